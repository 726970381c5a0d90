//! Collaborator traits consumed by the tabbed panels coordinator.
//!
//! The coordinator never reaches into a concrete panel stack, text view or
//! layout. It talks to these traits, which lets applications swap in their
//! own widgets and lets tests observe every call.

use crate::primitive::{Primitive, PrimitiveRef};
use std::sync::Weak;

/// An ordered collection of named, show/hide-able child views.
pub trait PanelStack: Primitive {
    /// Adds a panel. A panel with the same name is replaced.
    ///
    /// With `resize` set, the panel is resized to fill the stack.
    fn add_panel(&self, name: &str, item: PrimitiveRef, resize: bool, visible: bool);

    /// Removes the panel with the given name. Unknown names are ignored.
    fn remove_panel(&self, name: &str);

    /// Makes the named panel visible.
    fn show_panel(&self, name: &str);

    /// Hides the named panel.
    fn hide_panel(&self, name: &str);

    /// Returns the panel names in stack order.
    fn panel_names(&self) -> Vec<String>;

    /// Returns true if the named panel exists and is visible.
    fn is_panel_visible(&self, name: &str) -> bool;
}

/// Observer notified when the highlighted regions of a [`TabStrip`] change.
pub trait HighlightListener: Send + Sync {
    /// Called with the regions that became highlighted, the ones that lost
    /// their highlight, and the ones that stayed highlighted.
    fn highlighted(&self, added: &[String], removed: &[String], remaining: &[String]);
}

/// A styled, region-aware text view used to render the tab labels.
pub trait TabStrip: Primitive {
    /// Enables `[color]` tags in the text.
    fn set_dynamic_colors(&self, enabled: bool);

    /// Enables `["region"]` tags in the text.
    fn set_regions(&self, enabled: bool);

    /// Wraps lines that exceed the available width.
    fn set_wrap(&self, enabled: bool);

    /// Prefers breaking wrapped lines at word boundaries.
    fn set_word_wrap(&self, enabled: bool);

    /// Replaces the markup shown by the strip.
    fn set_text(&self, text: &str);

    /// Returns the markup, or the displayed text when `strip_tags` is set.
    fn get_text(&self, strip_tags: bool) -> String;

    /// Highlights exactly the given regions. Empty ids are ignored.
    ///
    /// When the highlight set changes the listener is notified after the
    /// strip has released its own lock, so the listener may call back into
    /// the strip or into its owner.
    fn highlight(&self, ids: &[&str]);

    /// Returns the currently highlighted region ids.
    fn highlights(&self) -> Vec<String>;

    /// Registers the listener for highlight changes.
    fn set_highlight_listener(&self, listener: Weak<dyn HighlightListener>);
}

/// A container arranging its items along one axis.
pub trait FlexLayout: Primitive {
    /// Appends an item. A `fixed_size` of zero makes the item flexible with
    /// the given `proportion`. With `focus` set the item takes focus when the
    /// layout does.
    fn add_item(&self, item: PrimitiveRef, fixed_size: u16, proportion: u16, focus: bool);

    /// Removes every occurrence of the item.
    fn remove_item(&self, item: &PrimitiveRef);

    /// Changes the sizing of an item already in the layout.
    fn resize_item(&self, item: &PrimitiveRef, fixed_size: u16, proportion: u16);
}
