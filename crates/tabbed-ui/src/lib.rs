//! # tabbed-ui
//!
//! Tabbed panels widget for ratatui terminal applications.
//!
//! This crate provides the concrete widgets built on top of
//! [`tabbed_core`], including:
//!
//! - [`TabbedPanels`] - Coordinates a tab strip and a panel stack
//! - [`Panels`] - Ordered stack of show/hide-able named views
//! - [`TextView`] - Markup text view used as the tab strip
//! - [`Flex`] - One-axis layout with fixed and proportional items
//! - [`FocusTracker`] - Remembers the focused widget
//!
//! ## Overview
//!
//! [`TabbedPanels`] keeps one panel per tab and shows exactly the current
//! one. The tab strip renders each label as a clickable region; clicking a
//! label selects its tab and moves focus into the panels. The strip grows
//! to as many lines as the labels need when wrapped at the widget's width.
//!
//! ## Example
//!
//! ```
//! use tabbed_ui::{FocusTracker, TabbedPanels, TextView};
//! use tabbed_core::Primitive;
//! use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use std::sync::Arc;
//!
//! let focus = Arc::new(FocusTracker::new());
//! let tabs = TabbedPanels::new(focus.clone());
//! tabs.add_tab("log", "Log", Arc::new(TextView::new()));
//! tabs.add_tab("stats", "Stats", Arc::new(TextView::new()));
//!
//! let area = Rect::new(0, 0, 40, 10);
//! let mut buf = Buffer::empty(area);
//! tabs.set_rect(area);
//! tabs.draw(&mut buf);
//!
//! // " Log | Stats |": column 8 is inside the second label.
//! let click = MouseEvent {
//!     kind: MouseEventKind::Down(MouseButton::Left),
//!     column: 8,
//!     row: 0,
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(tabs.handle_mouse(click, focus.as_ref()));
//! assert_eq!(tabs.get_current_tab(), "stats");
//! ```
//!
//! ## Wrapping
//!
//! ```
//! use tabbed_ui::wrap::line_count;
//!
//! assert_eq!(line_count(" Alpha | Beta |", 80), 1);
//! assert_eq!(line_count(" Alpha | Beta |", 10), 2);
//! ```

pub mod focus;
pub mod markup;
pub mod tabbed_panels;
pub mod widgets;
pub mod wrap;

pub use focus::FocusTracker;
pub use tabbed_panels::TabbedPanels;
pub use widgets::{Flex, FlexItem, Panels, TextView};
