//! Widgets the tabbed panels coordinator is assembled from
//!
//! ## Available Widgets
//!
//! - [`Panels`] - Ordered stack of named, show/hide-able views
//! - [`TextView`] - Styled text with highlightable regions, used as the tab strip
//! - [`Flex`] - One-axis layout with fixed and proportional items
//!
//! Each widget implements the matching collaborator trait from
//! [`tabbed_core`], so the coordinator can be given replacements.

pub mod flex;
pub mod panels;
pub mod text_view;

pub use flex::{Flex, FlexItem};
pub use panels::Panels;
pub use text_view::TextView;
