//! Flexible one-axis layout container
//!
//! [`Flex`] arranges its items in a row or column. Items either take a
//! fixed number of cells or share the leftover space by proportion.
//!
//! # Layout Structure
//!
//! ```text
//! +---------------------------------+
//! | item with fixed_size = 1        |
//! +---------------------------------+
//! |                                 |
//! | item with proportion = 1        |
//! | (remaining space)               |
//! |                                 |
//! +---------------------------------+
//! ```

use crossterm::event::{KeyEvent, MouseEvent};
use parking_lot::RwLock;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tabbed_core::{same_primitive, FlexLayout, FocusController, Primitive, PrimitiveRef};

/// An item in a flex container together with its sizing hints.
#[derive(Clone)]
pub struct FlexItem {
    /// The laid out widget
    pub item: PrimitiveRef,
    /// Cells along the main axis, or 0 for a flexible item
    pub fixed_size: u16,
    /// Share of the leftover space for flexible items
    pub proportion: u16,
    /// Whether the item takes focus when the container does
    pub focus: bool,
}

impl FlexItem {
    fn constraint(&self) -> Constraint {
        if self.fixed_size > 0 {
            Constraint::Length(self.fixed_size)
        } else {
            Constraint::Fill(self.proportion)
        }
    }
}

struct FlexState {
    items: Vec<FlexItem>,
    direction: Direction,
    rect: Rect,
}

/// One-axis layout container
pub struct Flex {
    state: RwLock<FlexState>,
}

impl Flex {
    /// Creates a container stacking items top to bottom.
    #[must_use]
    pub fn rows() -> Self {
        Self::new(Direction::Vertical)
    }

    /// Creates a container placing items left to right.
    #[must_use]
    pub fn columns() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Creates a container with the given main axis.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Flex {
            state: RwLock::new(FlexState {
                items: Vec::new(),
                direction,
                rect: Rect::default(),
            }),
        }
    }

    /// Returns the items in layout order.
    #[must_use]
    pub fn items(&self) -> Vec<FlexItem> {
        self.state.read().items.clone()
    }

    /// Returns the sizing hints of `item`, if it is in the container.
    #[must_use]
    pub fn item_size(&self, item: &PrimitiveRef) -> Option<(u16, u16)> {
        self.state
            .read()
            .items
            .iter()
            .find(|i| same_primitive(&i.item, item))
            .map(|i| (i.fixed_size, i.proportion))
    }

    /// Returns the position of `item` in layout order.
    #[must_use]
    pub fn index_of(&self, item: &PrimitiveRef) -> Option<usize> {
        self.state
            .read()
            .items
            .iter()
            .position(|i| same_primitive(&i.item, item))
    }

    /// Computes and assigns each item's rectangle, returning the items.
    fn arrange(&self) -> Vec<PrimitiveRef> {
        let state = self.state.read();
        let areas = Layout::default()
            .direction(state.direction)
            .constraints(state.items.iter().map(FlexItem::constraint))
            .split(state.rect);

        state
            .items
            .iter()
            .zip(areas.iter())
            .map(|(flex_item, area)| {
                flex_item.item.set_rect(*area);
                flex_item.item.clone()
            })
            .collect()
    }
}

impl Default for Flex {
    fn default() -> Self {
        Self::rows()
    }
}

impl FlexLayout for Flex {
    fn add_item(&self, item: PrimitiveRef, fixed_size: u16, proportion: u16, focus: bool) {
        self.state.write().items.push(FlexItem {
            item,
            fixed_size,
            proportion,
            focus,
        });
    }

    fn remove_item(&self, item: &PrimitiveRef) {
        self.state
            .write()
            .items
            .retain(|i| !same_primitive(&i.item, item));
    }

    fn resize_item(&self, item: &PrimitiveRef, fixed_size: u16, proportion: u16) {
        let mut state = self.state.write();
        for flex_item in state.items.iter_mut().filter(|i| same_primitive(&i.item, item)) {
            flex_item.fixed_size = fixed_size;
            flex_item.proportion = proportion;
        }
    }
}

impl Primitive for Flex {
    fn draw(&self, buf: &mut Buffer) {
        for item in self.arrange() {
            item.draw(buf);
        }
    }

    fn rect(&self) -> Rect {
        self.state.read().rect
    }

    fn set_rect(&self, area: Rect) {
        self.state.write().rect = area;
        self.arrange();
    }

    fn focus(&self) {
        let target = self
            .state
            .read()
            .items
            .iter()
            .find(|i| i.focus)
            .map(|i| i.item.clone());
        if let Some(item) = target {
            item.focus();
        }
    }

    fn blur(&self) {
        for item in self.items() {
            item.item.blur();
        }
    }

    fn has_focus(&self) -> bool {
        self.state.read().items.iter().any(|i| i.item.has_focus())
    }

    fn handle_key(&self, key: KeyEvent, focus: &dyn FocusController) -> bool {
        let focused = self
            .items()
            .into_iter()
            .find(|i| i.item.has_focus())
            .map(|i| i.item);
        match focused {
            Some(item) => item.handle_key(key, focus),
            None => false,
        }
    }

    fn handle_mouse(&self, event: MouseEvent, focus: &dyn FocusController) -> bool {
        if !self.in_rect(event.column, event.row) {
            return false;
        }

        let target = self
            .items()
            .into_iter()
            .find(|i| i.item.in_rect(event.column, event.row))
            .map(|i| i.item);
        match target {
            Some(item) => item.handle_mouse(event, focus),
            None => false,
        }
    }
}
