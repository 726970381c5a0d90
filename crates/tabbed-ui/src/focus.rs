//! Focus tracking
//!
//! [`FocusTracker`] is the application-side [`FocusController`]: it remembers
//! which widget has input focus and moves it on request.

use parking_lot::Mutex;
use tabbed_core::{same_primitive, FocusController, PrimitiveRef};

/// Remembers the focused widget, blurring it when focus moves elsewhere.
///
/// # Example
///
/// ```
/// use tabbed_ui::{FocusTracker, TextView};
/// use tabbed_core::{FocusController, Primitive, PrimitiveRef};
/// use std::sync::Arc;
///
/// let first: PrimitiveRef = Arc::new(TextView::new());
/// let second: PrimitiveRef = Arc::new(TextView::new());
///
/// let tracker = FocusTracker::new();
/// tracker.set_focus(first.clone());
/// assert!(tracker.is_focused(&first));
///
/// tracker.set_focus(second.clone());
/// assert!(!first.has_focus());
/// assert!(second.has_focus());
/// ```
#[derive(Default)]
pub struct FocusTracker {
    focused: Mutex<Option<PrimitiveRef>>,
}

impl FocusTracker {
    /// Creates a tracker with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the focused widget, if any.
    #[must_use]
    pub fn focused(&self) -> Option<PrimitiveRef> {
        self.focused.lock().clone()
    }

    /// Returns true if `target` is the focused widget.
    #[must_use]
    pub fn is_focused(&self, target: &PrimitiveRef) -> bool {
        self.focused
            .lock()
            .as_ref()
            .is_some_and(|f| same_primitive(f, target))
    }
}

impl FocusController for FocusTracker {
    fn set_focus(&self, target: PrimitiveRef) {
        let previous = self.focused.lock().replace(target.clone());

        // Widget callbacks run without our lock held.
        if let Some(previous) = previous {
            if same_primitive(&previous, &target) {
                return;
            }
            previous.blur();
        }
        tracing::trace!("focus moved");
        target.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;
    use tabbed_core::Primitive;

    #[derive(Default)]
    struct Focusable {
        area: RwLock<Rect>,
        focused: AtomicBool,
        focus_count: AtomicU32,
    }

    impl Primitive for Focusable {
        fn draw(&self, _buf: &mut Buffer) {}

        fn rect(&self) -> Rect {
            *self.area.read()
        }

        fn set_rect(&self, area: Rect) {
            *self.area.write() = area;
        }

        fn focus(&self) {
            self.focused.store(true, Ordering::SeqCst);
            self.focus_count.fetch_add(1, Ordering::SeqCst);
        }

        fn blur(&self) {
            self.focused.store(false, Ordering::SeqCst);
        }

        fn has_focus(&self) -> bool {
            self.focused.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_starts_unfocused() {
        let tracker = FocusTracker::new();
        assert!(tracker.focused().is_none());
    }

    #[test]
    fn test_moving_focus_blurs_previous() {
        let tracker = FocusTracker::new();
        let a = Arc::new(Focusable::default());
        let b = Arc::new(Focusable::default());
        let a_ref: PrimitiveRef = a.clone();
        let b_ref: PrimitiveRef = b.clone();

        tracker.set_focus(a_ref.clone());
        assert!(a.has_focus());
        assert!(tracker.is_focused(&a_ref));

        tracker.set_focus(b_ref.clone());
        assert!(!a.has_focus());
        assert!(b.has_focus());
        assert!(tracker.is_focused(&b_ref));
    }

    #[test]
    fn test_refocusing_same_widget_is_noop() {
        let tracker = FocusTracker::new();
        let a = Arc::new(Focusable::default());
        let a_ref: PrimitiveRef = a.clone();

        tracker.set_focus(a_ref.clone());
        tracker.set_focus(a_ref);
        assert_eq!(a.focus_count.load(Ordering::SeqCst), 1);
        assert!(a.has_focus());
    }
}
