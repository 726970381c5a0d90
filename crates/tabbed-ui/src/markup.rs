//! Parser for the color and region tags understood by the text view.
//!
//! Supported tags:
//!
//! - `["id"]` starts region `id`, `[""]` ends it
//! - `[fg]`, `[fg:bg]`, `[fg:bg:flags]` change colors and attributes, where
//!   an empty field keeps the current value and `-` resets it
//! - `[tag[]` is the escaped form of a tag and displays as `[tag]`
//!
//! Anything else in brackets is displayed as written.

use ratatui::style::{Modifier, Style};
use std::ops::Range;
use tabbed_core::theme::parse_color;

/// A run of displayed text sharing one style and region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    /// Byte range into [`Markup::text`]
    pub range: Range<usize>,
    /// Style set by color tags
    pub style: Style,
    /// Region the run belongs to, if any
    pub region: Option<String>,
}

/// Markup with its tags resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    /// Displayed text with all recognised tags removed
    pub text: String,
    /// Styled runs covering `text` in order
    pub spans: Vec<MarkupSpan>,
}

impl Markup {
    /// Parses `markup`, honouring color tags when `colors` is set and region
    /// tags when `regions` is set.
    ///
    /// # Example
    ///
    /// ```
    /// use tabbed_ui::markup::Markup;
    ///
    /// let m = Markup::parse(r#"["a"][darkcyan] Alpha [white][""]|"#, true, true);
    /// assert_eq!(m.text, " Alpha |");
    /// assert_eq!(m.region_at(1), Some("a"));
    /// assert_eq!(m.region_at(7), None);
    /// ```
    #[must_use]
    pub fn parse(markup: &str, colors: bool, regions: bool) -> Self {
        let mut parser = Parser {
            out: Markup::default(),
            style: Style::default(),
            region: None,
        };

        if !colors && !regions {
            parser.push_text(markup);
            return parser.out;
        }

        let mut rest = markup;
        while let Some(open) = rest.find('[') {
            parser.push_text(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find(']') else {
                parser.push_text(&rest[open..]);
                rest = "";
                break;
            };
            let content = &after[..close];

            if parser.apply_tag(content, colors, regions) {
                rest = &after[close + 1..];
            } else {
                parser.push_text("[");
                rest = after;
            }
        }
        parser.push_text(rest);

        parser.out
    }

    /// Returns the region covering the byte offset, if any.
    #[must_use]
    pub fn region_at(&self, offset: usize) -> Option<&str> {
        self.spans
            .iter()
            .find(|span| span.range.contains(&offset))
            .and_then(|span| span.region.as_deref())
    }

    /// Returns the ids of all regions in order of first appearance.
    #[must_use]
    pub fn region_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for region in self.spans.iter().filter_map(|s| s.region.as_deref()) {
            if !ids.contains(&region) {
                ids.push(region);
            }
        }
        ids
    }
}

struct Parser {
    out: Markup,
    style: Style,
    region: Option<String>,
}

impl Parser {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let start = self.out.text.len();
        self.out.text.push_str(text);
        let end = self.out.text.len();

        if let Some(last) = self.out.spans.last_mut() {
            if last.range.end == start && last.style == self.style && last.region == self.region {
                last.range.end = end;
                return;
            }
        }

        self.out.spans.push(MarkupSpan {
            range: start..end,
            style: self.style,
            region: self.region.clone(),
        });
    }

    /// Applies a tag, returning false if `content` is not one.
    fn apply_tag(&mut self, content: &str, colors: bool, regions: bool) -> bool {
        if let Some(inner) = content.strip_suffix('[') {
            if !inner.contains(['[', ']']) {
                self.push_text("[");
                self.push_text(inner);
                self.push_text("]");
                return true;
            }
            return false;
        }

        if regions {
            if let Some(id) = region_tag(content) {
                self.region = (!id.is_empty()).then(|| id.to_string());
                return true;
            }
        }

        if colors {
            if let Some(style) = color_tag(content, self.style) {
                self.style = style;
                return true;
            }
        }

        false
    }
}

fn region_tag(content: &str) -> Option<&str> {
    let id = content.strip_prefix('"')?.strip_suffix('"')?;
    let valid = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | ';' | ':' | ' ' | '-' | '.'));
    valid.then_some(id)
}

fn color_tag(content: &str, current: Style) -> Option<Style> {
    if content.is_empty() {
        return None;
    }

    let mut fields = content.split(':');
    let fg = fields.next().unwrap_or("");
    let bg = fields.next().unwrap_or("");
    let flags = fields.next().unwrap_or("");
    if fields.next().is_some() {
        return None;
    }

    let mut style = current;
    match fg {
        "" => {}
        "-" => style.fg = None,
        name => style.fg = Some(parse_color(name).ok()?),
    }
    match bg {
        "" => {}
        "-" => style.bg = None,
        name => style.bg = Some(parse_color(name).ok()?),
    }
    match flags {
        "" => {}
        "-" => {
            style.add_modifier = Modifier::empty();
            style.sub_modifier = Modifier::empty();
        }
        flags => {
            let mut modifier = Modifier::empty();
            for flag in flags.chars() {
                modifier |= match flag {
                    'b' => Modifier::BOLD,
                    'd' => Modifier::DIM,
                    'i' => Modifier::ITALIC,
                    'u' => Modifier::UNDERLINED,
                    'l' => Modifier::SLOW_BLINK,
                    'r' => Modifier::REVERSED,
                    _ => return None,
                };
            }
            style.add_modifier = modifier;
        }
    }

    Some(style)
}

/// Strips all recognised tags from `markup`.
#[must_use]
pub fn strip_tags(markup: &str, colors: bool, regions: bool) -> String {
    Markup::parse(markup, colors, regions).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_plain_text() {
        let m = Markup::parse("hello", true, true);
        assert_eq!(m.text, "hello");
        assert_eq!(m.spans.len(), 1);
        assert_eq!(m.spans[0].style, Style::default());
    }

    #[test]
    fn test_tab_strip_markup() {
        let m = Markup::parse(
            r#"["a"][cyan] Alpha [white][""]|["b"][cyan] Beta [white][""]|"#,
            true,
            true,
        );
        assert_eq!(m.text, " Alpha | Beta |");
        assert_eq!(m.region_ids(), vec!["a", "b"]);
        assert_eq!(m.region_at(3), Some("a"));
        assert_eq!(m.region_at(7), None);
        assert_eq!(m.region_at(10), Some("b"));

        let alpha = &m.spans[0];
        assert_eq!(&m.text[alpha.range.clone()], " Alpha ");
        assert_eq!(alpha.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_color_reset_and_background() {
        let m = Markup::parse("[red:blue]x[-:-]y", true, false);
        assert_eq!(m.text, "xy");
        assert_eq!(m.spans[0].style.fg, Some(Color::Red));
        assert_eq!(m.spans[0].style.bg, Some(Color::Blue));
        assert_eq!(m.spans[1].style, Style::default());
    }

    #[test]
    fn test_attribute_flags() {
        let m = Markup::parse("[::bu]x", true, false);
        assert!(m.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(m.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_unknown_tag_is_literal() {
        let m = Markup::parse("[notacolor]x", true, true);
        assert_eq!(m.text, "[notacolor]x");
    }

    #[test]
    fn test_escaped_tag() {
        let m = Markup::parse("[red[]", true, true);
        assert_eq!(m.text, "[red]");
        assert_eq!(m.spans[0].style, Style::default());
    }

    #[test]
    fn test_unclosed_bracket() {
        let m = Markup::parse("a [b", true, true);
        assert_eq!(m.text, "a [b");
    }

    #[test]
    fn test_tags_ignored_when_disabled() {
        let m = Markup::parse(r#"["a"][red]x"#, false, false);
        assert_eq!(m.text, r#"["a"][red]x"#);

        let regions_only = Markup::parse(r#"["a"][red]x"#, false, true);
        assert_eq!(regions_only.text, "[red]x");
        assert_eq!(regions_only.region_at(0), Some("a"));
    }

    #[test]
    fn test_region_ids_reject_markup_characters() {
        let m = Markup::parse(r#"["a]b"]x"#, true, true);
        assert!(m.region_ids().is_empty());
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags(r#"["x"][cyan] X [white][""]|"#, true, true), " X |");
    }
}
