//! Line wrapping for displayed text.
//!
//! Wrapping works on text that has already had its markup tags removed and
//! measures cells with `unicode-width`, so wide characters take two cells.

use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Splits `text` into display lines no wider than `width` cells.
///
/// Returns byte ranges into `text`, one per line. Newlines always end a
/// line and are not part of any range. With `word_boundaries` set, lines
/// break after the last whitespace that fits; words longer than the line
/// are split. A whitespace character that would overflow a line is consumed
/// by the break. A `width` of zero disables wrapping.
///
/// # Example
///
/// ```
/// use tabbed_ui::wrap::wrap_ranges;
///
/// let text = "one two three";
/// let lines: Vec<&str> = wrap_ranges(text, 8, true)
///     .into_iter()
///     .map(|r| &text[r])
///     .collect();
/// assert_eq!(lines, vec!["one two ", "three"]);
/// ```
#[must_use]
pub fn wrap_ranges(text: &str, width: usize, word_boundaries: bool) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, offset, width, word_boundaries, &mut lines);
        offset += paragraph.len() + 1;
    }

    lines
}

fn wrap_paragraph(
    paragraph: &str,
    base: usize,
    width: usize,
    word_boundaries: bool,
    lines: &mut Vec<Range<usize>>,
) {
    if width == 0 {
        lines.push(base..base + paragraph.len());
        return;
    }

    let mut start = 0;
    let mut line_width = 0;
    // Byte index where the current line may be broken, after whitespace.
    let mut break_at: Option<usize> = None;

    for (i, ch) in paragraph.char_indices() {
        let w = ch.width().unwrap_or(0);

        if line_width + w > width && i > start {
            if ch.is_whitespace() {
                lines.push(base + start..base + i);
                start = i + ch.len_utf8();
                line_width = 0;
                break_at = None;
                continue;
            }

            match break_at.filter(|&b| word_boundaries && b > start) {
                Some(b) => {
                    lines.push(base + start..base + b);
                    start = b;
                    line_width = paragraph[start..i]
                        .chars()
                        .map(|c| c.width().unwrap_or(0))
                        .sum();

                    // The carried-over word may still leave no room for `ch`.
                    if line_width + w > width && i > start {
                        lines.push(base + start..base + i);
                        start = i;
                        line_width = 0;
                    }
                }
                None => {
                    lines.push(base + start..base + i);
                    start = i;
                    line_width = 0;
                }
            }
            break_at = None;
        }

        line_width += w;
        if ch.is_whitespace() {
            break_at = Some(i + ch.len_utf8());
        }
    }

    lines.push(base + start..base + paragraph.len());
}

/// Word-wraps `text` to `width` cells and returns the lines.
///
/// # Example
///
/// ```
/// use tabbed_ui::wrap::word_wrap;
///
/// assert_eq!(word_wrap(" Alpha | Beta |", 15), vec![" Alpha | Beta |"]);
/// assert_eq!(word_wrap(" Alpha | Beta |", 10), vec![" Alpha | ", "Beta |"]);
/// ```
#[must_use]
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    wrap_ranges(text, width, true)
        .into_iter()
        .map(|range| text[range].to_string())
        .collect()
}

/// Returns how many lines `text` occupies at `width`, never less than one.
#[must_use]
pub fn line_count(text: &str, width: usize) -> usize {
    wrap_ranges(text, width, true).len().max(1)
}
