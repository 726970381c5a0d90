//! The primitive surface shared by every widget.
//!
//! Widgets are shared as `Arc<dyn Primitive>` and own their state behind
//! their own locks, so every method takes `&self`. A container can hold a
//! child, hand it to a focus controller and keep drawing it, all through the
//! same reference.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use std::sync::Arc;

/// Shared handle to a widget.
pub type PrimitiveRef = Arc<dyn Primitive>;

/// Trait that all widgets must implement.
///
/// # Example
///
/// ```
/// use tabbed_core::Primitive;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use std::sync::RwLock;
///
/// struct Blank {
///     area: RwLock<Rect>,
/// }
///
/// impl Primitive for Blank {
///     fn draw(&self, _buf: &mut Buffer) {}
///     fn rect(&self) -> Rect {
///         *self.area.read().unwrap()
///     }
///     fn set_rect(&self, area: Rect) {
///         *self.area.write().unwrap() = area;
///     }
/// }
///
/// let blank = Blank { area: RwLock::new(Rect::default()) };
/// blank.set_rect(Rect::new(0, 0, 10, 2));
/// assert!(blank.in_rect(9, 1));
/// assert!(!blank.in_rect(10, 1));
/// ```
pub trait Primitive: Send + Sync {
    /// Draws the widget into its current rectangle.
    fn draw(&self, buf: &mut Buffer);

    /// Returns the rectangle last assigned to this widget.
    fn rect(&self) -> Rect;

    /// Assigns the rectangle this widget occupies on screen.
    fn set_rect(&self, area: Rect);

    /// Returns true if the given screen cell lies within this widget.
    fn in_rect(&self, x: u16, y: u16) -> bool {
        self.rect().contains(Position::new(x, y))
    }

    /// Called when the widget receives input focus.
    fn focus(&self) {}

    /// Called when the widget loses input focus.
    fn blur(&self) {}

    /// Returns true if this widget, or one of its children, has focus.
    fn has_focus(&self) -> bool {
        false
    }

    /// Handles a key event. Returns true if the event was consumed.
    fn handle_key(&self, _key: KeyEvent, _focus: &dyn FocusController) -> bool {
        false
    }

    /// Handles a mouse event. Returns true if the event was consumed.
    fn handle_mouse(&self, _event: MouseEvent, _focus: &dyn FocusController) -> bool {
        false
    }
}

/// Transfers input focus between widgets.
///
/// Containers receive one of these explicitly, either at construction or
/// alongside each input event, rather than capturing it from the first
/// event that happens to arrive.
pub trait FocusController: Send + Sync {
    /// Moves input focus to `target`.
    fn set_focus(&self, target: PrimitiveRef);
}

/// Returns true if both handles point at the same widget.
///
/// Only the data pointers are compared; vtable pointers for the same type
/// may differ between codegen units.
pub fn same_primitive(a: &PrimitiveRef, b: &PrimitiveRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Cell {
        area: Mutex<Rect>,
    }

    impl Primitive for Cell {
        fn draw(&self, _buf: &mut Buffer) {}

        fn rect(&self) -> Rect {
            *self.area.lock().unwrap()
        }

        fn set_rect(&self, area: Rect) {
            *self.area.lock().unwrap() = area;
        }
    }

    fn cell() -> Arc<Cell> {
        Arc::new(Cell {
            area: Mutex::new(Rect::default()),
        })
    }

    #[test]
    fn test_in_rect_uses_assigned_area() {
        let c = cell();
        c.set_rect(Rect::new(2, 3, 4, 2));
        assert!(c.in_rect(2, 3));
        assert!(c.in_rect(5, 4));
        assert!(!c.in_rect(6, 4));
        assert!(!c.in_rect(1, 3));
    }

    #[test]
    fn test_default_focus_and_input() {
        let c = cell();
        assert!(!c.has_focus());
        c.focus();
        assert!(!c.has_focus());
    }

    #[test]
    fn test_same_primitive_identity() {
        let a: PrimitiveRef = cell();
        let b: PrimitiveRef = cell();
        let a2 = a.clone();
        assert!(same_primitive(&a, &a2));
        assert!(!same_primitive(&a, &b));
    }

    #[test]
    fn test_primitive_is_object_safe() {
        fn accept(_p: &dyn Primitive) {}
        let c = cell();
        accept(c.as_ref());
    }
}
