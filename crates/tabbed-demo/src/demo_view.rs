//! Scrollable text panel shown in each demo tab.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use parking_lot::RwLock;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use tabbed_core::{FocusController, Primitive};

struct DemoViewState {
    title: String,
    lines: Vec<String>,
    scroll: u16,
    rect: Rect,
    focused: bool,
}

/// A bordered, scrollable block of text
pub struct DemoView {
    state: RwLock<DemoViewState>,
}

impl DemoView {
    /// Creates a view titled `title` showing `lines`.
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        DemoView {
            state: RwLock::new(DemoViewState {
                title: title.into(),
                lines,
                scroll: 0,
                rect: Rect::default(),
                focused: false,
            }),
        }
    }

    /// Creates a view filled with numbered sample lines.
    pub fn sample(title: &str, count: usize) -> Self {
        let lines = (1..=count)
            .map(|n| format!("{title}: line {n} of {count}"))
            .collect();
        Self::new(title, lines)
    }

    /// Returns the index of the first displayed line.
    #[cfg(test)]
    pub fn scroll(&self) -> u16 {
        self.state.read().scroll
    }

    fn scroll_by(&self, delta: i32) {
        let mut state = self.state.write();
        let max = state.lines.len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let next = (i32::from(state.scroll) + delta).clamp(0, i32::from(max));
        state.scroll = u16::try_from(next).unwrap_or(0);
    }
}

impl Primitive for DemoView {
    fn draw(&self, buf: &mut Buffer) {
        let state = self.state.read();
        let area = state.rect.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let border = if state.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", state.title));

        Paragraph::new(state.lines.join("\n"))
            .block(block)
            .scroll((state.scroll, 0))
            .render(area, buf);
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

    fn handle_key(&self, key: KeyEvent, _focus: &dyn FocusController) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home | KeyCode::Char('g') => self.state.write().scroll = 0,
            _ => return false,
        }
        true
    }

    fn handle_mouse(&self, event: MouseEvent, _focus: &dyn FocusController) -> bool {
        if !self.in_rect(event.column, event.row) {
            return false;
        }

        match event.kind {
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tabbed_core::PrimitiveRef;

    struct NoFocus;

    impl FocusController for NoFocus {
        fn set_focus(&self, _target: PrimitiveRef) {}
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_is_clamped() {
        let view = DemoView::sample("A", 3);
        assert!(view.handle_key(press(KeyCode::Char('k')), &NoFocus));
        assert_eq!(view.scroll(), 0);

        view.handle_key(press(KeyCode::PageDown), &NoFocus);
        assert_eq!(view.scroll(), 2);

        view.handle_key(press(KeyCode::Home), &NoFocus);
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_unhandled_key() {
        let view = DemoView::sample("A", 3);
        assert!(!view.handle_key(press(KeyCode::Char('x')), &NoFocus));
    }

    #[test]
    fn test_draw_shows_title_and_text() {
        let view = DemoView::sample("Alpha", 2);
        let area = Rect::new(0, 0, 30, 4);
        view.set_rect(area);
        let mut buf = Buffer::empty(area);
        view.draw(&mut buf);

        let top: String = (0..30).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains(" Alpha "));
        let first: String = (1..29).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(first.starts_with("Alpha: line 1 of 2"));
    }
}
