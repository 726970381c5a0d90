//! Region-aware styled text view
//!
//! The [`TextView`] displays markup (see [`crate::markup`]), wraps it to its
//! width and tracks which regions are highlighted. It is the widget the
//! tabbed panels coordinator uses as its tab strip: every tab label is a
//! region, and clicking a label highlights it.
//!
//! ## Example
//!
//! ```
//! use tabbed_ui::widgets::TextView;
//! use tabbed_core::TabStrip;
//!
//! let view = TextView::new();
//! view.set_regions(true);
//! view.set_text(r#"["one"]first[""] ["two"]second[""]"#);
//! assert_eq!(view.get_text(true), "first second");
//!
//! view.highlight(&["two"]);
//! assert_eq!(view.highlights(), vec!["two".to_string()]);
//! ```

use crate::markup::Markup;
use crate::wrap::wrap_ranges;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use parking_lot::RwLock;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::ops::Range;
use std::sync::Weak;
use tabbed_core::{FocusController, HighlightListener, Primitive, TabStrip};
use unicode_width::UnicodeWidthStr;

/// Internal mutable state for the text view
struct TextViewState {
    text: String,
    markup: Markup,
    dynamic_colors: bool,
    regions: bool,
    wrap: bool,
    word_wrap: bool,
    highlights: Vec<String>,
    listener: Option<Weak<dyn HighlightListener>>,
    rect: Rect,
    focused: bool,
}

impl TextViewState {
    fn reparse(&mut self) {
        self.markup = Markup::parse(&self.text, self.dynamic_colors, self.regions);
    }

    /// Splits the displayed text into lines of styled pieces.
    fn layout(&self, width: u16) -> Vec<Vec<Piece<'_>>> {
        let text = &self.markup.text;
        let width = if self.wrap { usize::from(width) } else { 0 };

        wrap_ranges(text, width, self.word_wrap)
            .into_iter()
            .map(|line| {
                self.markup
                    .spans
                    .iter()
                    .filter_map(|span| {
                        let start = span.range.start.max(line.start);
                        let end = span.range.end.min(line.end);
                        (start < end).then(|| Piece {
                            range: start..end,
                            style: span.style,
                            region: span.region.as_deref(),
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

struct Piece<'a> {
    range: Range<usize>,
    style: Style,
    region: Option<&'a str>,
}

/// Styled text view with highlightable regions
pub struct TextView {
    state: RwLock<TextViewState>,
}

impl TextView {
    /// Creates an empty text view with all markup features disabled.
    #[must_use]
    pub fn new() -> Self {
        TextView {
            state: RwLock::new(TextViewState {
                text: String::new(),
                markup: Markup::default(),
                dynamic_colors: false,
                regions: false,
                wrap: true,
                word_wrap: false,
                highlights: Vec::new(),
                listener: None,
                rect: Rect::default(),
                focused: false,
            }),
        }
    }

    /// Returns the number of lines the text occupies at `width`.
    #[must_use]
    pub fn line_count(&self, width: u16) -> usize {
        self.state.read().layout(width).len().max(1)
    }

    /// Returns the region drawn at the given screen cell, if any.
    #[must_use]
    pub fn region_at(&self, x: u16, y: u16) -> Option<String> {
        let state = self.state.read();
        let area = state.rect;
        if !state.regions || x < area.x || y < area.y {
            return None;
        }

        let lines = state.layout(area.width);
        let line = lines.get(usize::from(y - area.y))?;
        let column = usize::from(x - area.x);

        let mut left = 0;
        for piece in line {
            let right = left + state.markup.text[piece.range.clone()].width();
            if column < right {
                return piece.region.map(str::to_string);
            }
            left = right;
        }
        None
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStrip for TextView {
    fn set_dynamic_colors(&self, enabled: bool) {
        let mut state = self.state.write();
        state.dynamic_colors = enabled;
        state.reparse();
    }

    fn set_regions(&self, enabled: bool) {
        let mut state = self.state.write();
        state.regions = enabled;
        state.reparse();
    }

    fn set_wrap(&self, enabled: bool) {
        self.state.write().wrap = enabled;
    }

    fn set_word_wrap(&self, enabled: bool) {
        self.state.write().word_wrap = enabled;
    }

    fn set_text(&self, text: &str) {
        let mut state = self.state.write();
        if state.text == text {
            return;
        }
        state.text = text.to_string();
        state.reparse();
    }

    fn get_text(&self, strip_tags: bool) -> String {
        let state = self.state.read();
        if strip_tags {
            state.markup.text.clone()
        } else {
            state.text.clone()
        }
    }

    fn highlight(&self, ids: &[&str]) {
        let (added, removed, remaining, listener) = {
            let mut state = self.state.write();

            let mut next: Vec<String> = Vec::new();
            for id in ids.iter().filter(|id| !id.is_empty()) {
                if !next.iter().any(|n| n == id) {
                    next.push((*id).to_string());
                }
            }

            let added: Vec<String> = next
                .iter()
                .filter(|id| !state.highlights.contains(id))
                .cloned()
                .collect();
            let (remaining, removed): (Vec<String>, Vec<String>) = state
                .highlights
                .iter()
                .cloned()
                .partition(|id| next.contains(id));

            state.highlights = next;
            if added.is_empty() && removed.is_empty() {
                return;
            }
            (added, removed, remaining, state.listener.clone())
        };

        // Lock released: the listener may call straight back into us.
        if let Some(listener) = listener.and_then(|weak| weak.upgrade()) {
            listener.highlighted(&added, &removed, &remaining);
        }
    }

    fn highlights(&self) -> Vec<String> {
        self.state.read().highlights.clone()
    }

    fn set_highlight_listener(&self, listener: Weak<dyn HighlightListener>) {
        self.state.write().listener = Some(listener);
    }
}

impl Primitive for TextView {
    fn draw(&self, buf: &mut Buffer) {
        let state = self.state.read();
        let area = state.rect.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let lines: Vec<Line> = state
            .layout(state.rect.width)
            .into_iter()
            .map(|pieces| {
                let spans: Vec<Span> = pieces
                    .into_iter()
                    .map(|piece| {
                        let mut style = piece.style;
                        let highlighted = piece
                            .region
                            .is_some_and(|id| state.highlights.iter().any(|h| h == id));
                        if highlighted {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Span::styled(&state.markup.text[piece.range], style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }

    fn rect(&self) -> Rect {
        self.state.read().rect
    }

    fn set_rect(&self, area: Rect) {
        self.state.write().rect = area;
    }

    fn focus(&self) {
        self.state.write().focused = true;
    }

    fn blur(&self) {
        self.state.write().focused = false;
    }

    fn has_focus(&self) -> bool {
        self.state.read().focused
    }

    fn handle_mouse(&self, event: MouseEvent, _focus: &dyn FocusController) -> bool {
        if !self.in_rect(event.column, event.row) {
            return false;
        }

        if event.kind == MouseEventKind::Down(MouseButton::Left) {
            if let Some(region) = self.region_at(event.column, event.row) {
                self.highlight(&[region.as_str()]);
            }
        }
        true
    }
}
