//! Panel stack widget
//!
//! [`Panels`] keeps an ordered list of named child views, each of which can
//! be shown or hidden. Visible panels are drawn in order, so the last
//! visible panel ends up on top.

use crossterm::event::{KeyEvent, MouseEvent};
use parking_lot::RwLock;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tabbed_core::{FocusController, PanelStack, Primitive, PrimitiveRef};

/// A named child view in the stack
struct Panel {
    name: String,
    item: PrimitiveRef,
    resize: bool,
    visible: bool,
}

#[derive(Default)]
struct PanelsState {
    panels: Vec<Panel>,
    rect: Rect,
    focused: bool,
}

/// Ordered stack of show/hide-able panels
///
/// # Example
///
/// ```
/// use tabbed_ui::widgets::{Panels, TextView};
/// use tabbed_core::PanelStack;
/// use std::sync::Arc;
///
/// let panels = Panels::new();
/// panels.add_panel("log", Arc::new(TextView::new()), true, true);
/// panels.add_panel("stats", Arc::new(TextView::new()), true, false);
/// assert_eq!(panels.panel_names(), vec!["log", "stats"]);
///
/// panels.hide_panel("log");
/// assert!(!panels.is_panel_visible("log"));
/// ```
#[derive(Default)]
pub struct Panels {
    state: RwLock<PanelsState>,
}

impl Panels {
    /// Creates an empty panel stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().panels.len()
    }

    /// Returns true if the stack holds no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().panels.is_empty()
    }

    /// Returns the top-most visible view.
    #[must_use]
    pub fn front_panel(&self) -> Option<PrimitiveRef> {
        self.state
            .read()
            .panels
            .iter()
            .rev()
            .find(|p| p.visible)
            .map(|p| p.item.clone())
    }

    fn set_visible(&self, name: &str, visible: bool) {
        let mut state = self.state.write();
        if let Some(panel) = state.panels.iter_mut().find(|p| p.name == name) {
            panel.visible = visible;
        }
    }
}

impl PanelStack for Panels {
    fn add_panel(&self, name: &str, item: PrimitiveRef, resize: bool, visible: bool) {
        let mut state = self.state.write();
        state.panels.retain(|p| p.name != name);
        if resize {
            item.set_rect(state.rect);
        }
        state.panels.push(Panel {
            name: name.to_string(),
            item,
            resize,
            visible,
        });
    }

    fn remove_panel(&self, name: &str) {
        self.state.write().panels.retain(|p| p.name != name);
    }

    fn show_panel(&self, name: &str) {
        self.set_visible(name, true);
    }

    fn hide_panel(&self, name: &str) {
        self.set_visible(name, false);
    }

    fn panel_names(&self) -> Vec<String> {
        self.state
            .read()
            .panels
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    fn is_panel_visible(&self, name: &str) -> bool {
        self.state
            .read()
            .panels
            .iter()
            .any(|p| p.name == name && p.visible)
    }
}

impl Primitive for Panels {
    fn draw(&self, buf: &mut Buffer) {
        let visible: Vec<PrimitiveRef> = self
            .state
            .read()
            .panels
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.item.clone())
            .collect();

        for item in visible {
            item.draw(buf);
        }
    }

    fn rect(&self) -> Rect {
        self.state.read().rect
    }

    fn set_rect(&self, area: Rect) {
        let mut state = self.state.write();
        state.rect = area;
        for panel in state.panels.iter().filter(|p| p.resize) {
            panel.item.set_rect(area);
        }
    }

    fn focus(&self) {
        self.state.write().focused = true;
    }

    fn blur(&self) {
        self.state.write().focused = false;
    }

    fn has_focus(&self) -> bool {
        let state = self.state.read();
        state.focused || state.panels.iter().any(|p| p.item.has_focus())
    }

    fn handle_key(&self, key: KeyEvent, focus: &dyn FocusController) -> bool {
        match self.front_panel() {
            Some(item) => item.handle_key(key, focus),
            None => false,
        }
    }

    fn handle_mouse(&self, event: MouseEvent, focus: &dyn FocusController) -> bool {
        if !self.in_rect(event.column, event.row) {
            return false;
        }

        let target = self
            .state
            .read()
            .panels
            .iter()
            .rev()
            .find(|p| p.visible && p.item.in_rect(event.column, event.row))
            .map(|p| p.item.clone());

        match target {
            Some(item) => item.handle_mouse(event, focus),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct NoFocus;

    impl FocusController for NoFocus {
        fn set_focus(&self, _target: PrimitiveRef) {}
    }

    #[derive(Default)]
    struct MockView {
        area: RwLock<Rect>,
        draws: AtomicU32,
        keys: AtomicU32,
    }

    impl Primitive for MockView {
        fn draw(&self, _buf: &mut Buffer) {
            self.draws.fetch_add(1, Ordering::SeqCst);
        }

        fn rect(&self) -> Rect {
            *self.area.read()
        }

        fn set_rect(&self, area: Rect) {
            *self.area.write() = area;
        }

        fn handle_key(&self, _key: KeyEvent, _focus: &dyn FocusController) -> bool {
            self.keys.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)
    }

    #[test]
    fn test_add_preserves_order() {
        let panels = Panels::new();
        panels.add_panel("a", Arc::new(MockView::default()), true, false);
        panels.add_panel("b", Arc::new(MockView::default()), true, false);
        panels.add_panel("c", Arc::new(MockView::default()), true, false);
        assert_eq!(panels.panel_names(), vec!["a", "b", "c"]);
        assert_eq!(panels.len(), 3);
    }

    #[test]
    fn test_add_same_name_replaces() {
        let panels = Panels::new();
        panels.add_panel("a", Arc::new(MockView::default()), true, false);
        panels.add_panel("b", Arc::new(MockView::default()), true, false);
        panels.add_panel("a", Arc::new(MockView::default()), true, true);
        assert_eq!(panels.panel_names(), vec!["b", "a"]);
        assert!(panels.is_panel_visible("a"));
    }

    #[test]
    fn test_show_hide_remove() {
        let panels = Panels::new();
        panels.add_panel("a", Arc::new(MockView::default()), true, false);
        assert!(!panels.is_panel_visible("a"));

        panels.show_panel("a");
        assert!(panels.is_panel_visible("a"));

        panels.hide_panel("a");
        assert!(!panels.is_panel_visible("a"));

        panels.remove_panel("a");
        assert!(panels.is_empty());
        assert!(!panels.is_panel_visible("a"));

        panels.show_panel("missing");
        panels.remove_panel("missing");
    }

    #[test]
    fn test_resize_propagates_rect() {
        let panels = Panels::new();
        let resized = Arc::new(MockView::default());
        let fixed = Arc::new(MockView::default());
        panels.add_panel("r", resized.clone(), true, true);
        panels.add_panel("f", fixed.clone(), false, true);

        let area = Rect::new(0, 1, 30, 10);
        panels.set_rect(area);
        assert_eq!(resized.rect(), area);
        assert_eq!(fixed.rect(), Rect::default());
    }

    #[test]
    fn test_draw_only_visible() {
        let panels = Panels::new();
        let shown = Arc::new(MockView::default());
        let hidden = Arc::new(MockView::default());
        panels.add_panel("shown", shown.clone(), true, true);
        panels.add_panel("hidden", hidden.clone(), true, false);

        let area = Rect::new(0, 0, 10, 5);
        panels.set_rect(area);
        let mut buf = Buffer::empty(area);
        panels.draw(&mut buf);

        assert_eq!(shown.draws.load(Ordering::SeqCst), 1);
        assert_eq!(hidden.draws.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_keys_go_to_front_visible_panel() {
        let panels = Panels::new();
        let back = Arc::new(MockView::default());
        let front = Arc::new(MockView::default());
        let hidden = Arc::new(MockView::default());
        panels.add_panel("back", back.clone(), true, true);
        panels.add_panel("front", front.clone(), true, true);
        panels.add_panel("hidden", hidden.clone(), true, false);

        assert!(panels.handle_key(key(), &NoFocus));
        assert_eq!(front.keys.load(Ordering::SeqCst), 1);
        assert_eq!(back.keys.load(Ordering::SeqCst), 0);
        assert_eq!(hidden.keys.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_keys_without_visible_panel() {
        let panels = Panels::new();
        panels.add_panel("a", Arc::new(MockView::default()), true, false);
        assert!(!panels.handle_key(key(), &NoFocus));
    }

    #[test]
    fn test_focus_flag() {
        let panels = Panels::new();
        assert!(!panels.has_focus());
        panels.focus();
        assert!(panels.has_focus());
        panels.blur();
        assert!(!panels.has_focus());
    }
}
