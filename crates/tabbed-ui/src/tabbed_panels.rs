//! Tabbed panels coordinator
//!
//! [`TabbedPanels`] multiplexes several child views behind a tab strip. It
//! owns the tab labels and the current tab, and keeps three collaborators in
//! step with them:
//!
//! - a [`PanelStack`] holding one panel per tab, of which exactly the
//!   current one is visible
//! - a [`TabStrip`] showing one highlightable region per tab
//! - a [`FlexLayout`] stacking the strip and the panels, with the strip's
//!   height matching its wrapped label text
//!
//! # Locking
//!
//! The coordinator's own fields sit behind one `RwLock`. The collaborators
//! lock themselves. The strip highlight is always requested after the
//! coordinator lock is released, because highlighting notifies
//! [`HighlightListener::highlighted`], which calls back into
//! [`TabbedPanels::set_current_tab`].
//!
//! # Example
//!
//! ```
//! use tabbed_ui::{FocusTracker, TabbedPanels, TextView};
//! use tabbed_core::Primitive;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use std::sync::Arc;
//!
//! let focus = Arc::new(FocusTracker::new());
//! let tabs = TabbedPanels::new(focus);
//! tabs.add_tab("log", "Log", Arc::new(TextView::new()));
//! tabs.add_tab("stats", "Stats", Arc::new(TextView::new()));
//! assert_eq!(tabs.get_current_tab(), "log");
//!
//! tabs.set_current_tab("stats");
//! let area = Rect::new(0, 0, 40, 10);
//! let mut buf = Buffer::empty(area);
//! tabs.set_rect(area);
//! tabs.draw(&mut buf);
//! assert_eq!(buf[(1, 0)].symbol(), "L");
//! ```

use crate::widgets::{Flex, Panels, TextView};
use crate::wrap;
use crossterm::event::{KeyEvent, MouseEvent};
use parking_lot::RwLock;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tabbed_core::theme::color_name;
use tabbed_core::{
    FlexLayout, FocusController, HighlightListener, PanelStack, Primitive, PrimitiveRef,
    TabStrip, TabbedConfig, Theme,
};

/// Mutable coordinator state, guarded by [`TabbedPanels::state`].
struct TabState {
    /// Label per tab name
    labels: HashMap<String, String>,
    /// Name of the visible tab, empty when there is none
    current: String,
    /// Tab strip below the panels
    bottom: bool,
    /// Inner width measured at the last draw
    width: u16,
    /// Inner width the labels were last wrapped for
    last_width: u16,
    theme: Theme,
    border: bool,
    title: Option<String>,
    rect: Rect,
}

/// A container showing one of several panels, selected by a tab strip.
pub struct TabbedPanels {
    state: RwLock<TabState>,
    panels: Arc<dyn PanelStack>,
    panels_item: PrimitiveRef,
    tabs: Arc<dyn TabStrip>,
    tabs_item: PrimitiveRef,
    layout: Arc<dyn FlexLayout>,
    focus: Arc<dyn FocusController>,
}

impl TabbedPanels {
    /// Creates a tabbed panels widget built from the default widgets.
    ///
    /// `focus` receives the panel stack whenever a tab is picked from the
    /// strip.
    #[must_use]
    pub fn new(focus: Arc<dyn FocusController>) -> Arc<Self> {
        Self::with_parts(
            Arc::new(Panels::new()),
            Arc::new(TextView::new()),
            Arc::new(Flex::rows()),
            focus,
        )
    }

    /// Creates a tabbed panels widget from the given collaborators.
    ///
    /// The strip is switched to colored, region-aware, word-wrapped text and
    /// both the strip and the panels are added to `layout`, strip first.
    #[must_use]
    pub fn with_parts<P, S, L>(
        panels: Arc<P>,
        tabs: Arc<S>,
        layout: Arc<L>,
        focus: Arc<dyn FocusController>,
    ) -> Arc<Self>
    where
        P: PanelStack + 'static,
        S: TabStrip + 'static,
        L: FlexLayout + 'static,
    {
        tabs.set_dynamic_colors(true);
        tabs.set_regions(true);
        tabs.set_wrap(true);
        tabs.set_word_wrap(true);

        let panels_item: PrimitiveRef = panels.clone();
        let tabs_item: PrimitiveRef = tabs.clone();
        layout.add_item(tabs_item.clone(), 1, 1, false);
        layout.add_item(panels_item.clone(), 0, 1, true);

        let tabbed = Arc::new(TabbedPanels {
            state: RwLock::new(TabState {
                labels: HashMap::new(),
                current: String::new(),
                bottom: false,
                width: 0,
                last_width: 0,
                theme: Theme::default(),
                border: false,
                title: None,
                rect: Rect::default(),
            }),
            panels,
            panels_item,
            tabs,
            tabs_item,
            layout,
            focus,
        });

        let listener: Weak<TabbedPanels> = Arc::downgrade(&tabbed);
        tabbed.tabs.set_highlight_listener(listener);
        tabbed
    }

    /// Adds a tab showing `item`.
    ///
    /// Tab names should consist only of letters, digits and spaces: they are
    /// embedded in the strip markup as-is. Other names are accepted but may
    /// render incorrectly. Reusing a name without removing it first replaces
    /// the panel. The first tab added becomes the current tab.
    pub fn add_tab(&self, name: &str, label: &str, item: PrimitiveRef) {
        if !is_plain_name(name) {
            tracing::warn!(tab = name, "tab name contains characters outside letters, digits and spaces");
        }

        self.state
            .write()
            .labels
            .insert(name.to_string(), label.to_string());

        self.panels.add_panel(name, item, true, false);
        tracing::debug!(tab = name, "tab added");

        self.update_all();
    }

    /// Removes a tab and its label.
    ///
    /// If it was the current tab, the first remaining tab becomes current.
    pub fn remove_tab(&self, name: &str) {
        self.panels.remove_panel(name);
        self.state.write().labels.remove(name);
        tracing::debug!(tab = name, "tab removed");

        self.update_all();
    }

    /// Makes `name` the current tab.
    ///
    /// Selecting the current tab again does nothing. Names that are not
    /// registered fall back to the first tab.
    pub fn set_current_tab(&self, name: &str) {
        let changed = {
            let mut state = self.state.write();
            if state.current == name {
                return;
            }

            let before = std::mem::replace(&mut state.current, name.to_string());
            self.update_tab_labels(&state);
            self.update_visible_tabs(&mut state);
            (state.current != before).then(|| state.current.clone())
        };

        if let Some(current) = changed {
            self.highlight_current(&current);
        }
    }

    /// Returns the name of the current tab, empty if there are no tabs.
    #[must_use]
    pub fn get_current_tab(&self) -> String {
        self.state.read().current.clone()
    }

    /// Changes the label of a tab. Setting the same label again is a no-op.
    pub fn set_tab_label(&self, name: &str, label: &str) {
        let mut state = self.state.write();
        let existing = state.labels.get(name).map(String::as_str).unwrap_or("");
        if existing == label {
            return;
        }

        state.labels.insert(name.to_string(), label.to_string());
        tracing::debug!(tab = name, label, "tab label changed");
        self.update_tab_labels(&state);
    }

    /// Places the tab strip below (`true`) or above (`false`) the panels.
    pub fn set_tab_switcher_position(&self, bottom: bool) {
        let mut state = self.state.write();
        if state.bottom == bottom {
            return;
        }
        state.bottom = bottom;

        self.layout.remove_item(&self.panels_item);
        self.layout.remove_item(&self.tabs_item);
        if bottom {
            self.layout.add_item(self.panels_item.clone(), 0, 1, true);
            self.layout.add_item(self.tabs_item.clone(), 1, 1, false);
        } else {
            self.layout.add_item(self.tabs_item.clone(), 1, 1, false);
            self.layout.add_item(self.panels_item.clone(), 0, 1, true);
        }
        tracing::debug!(bottom, "tab switcher moved");

        self.update_tab_labels(&state);
    }

    /// Returns true if the tab strip is below the panels.
    #[must_use]
    pub fn tab_switcher_bottom(&self) -> bool {
        self.state.read().bottom
    }

    /// Makes the next tab current, wrapping around after the last one.
    pub fn next_tab(&self) {
        self.cycle_tab(true);
    }

    /// Makes the previous tab current, wrapping around before the first one.
    pub fn prev_tab(&self) {
        self.cycle_tab(false);
    }

    fn cycle_tab(&self, forward: bool) {
        let names = self.panels.panel_names();
        if names.len() < 2 {
            return;
        }

        let current = self.get_current_tab();
        let index = names.iter().position(|n| *n == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % names.len()
        } else {
            (index + names.len() - 1) % names.len()
        };
        self.set_current_tab(&names[next]);
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.panels.panel_names().len()
    }

    /// Returns the tab names in strip order.
    #[must_use]
    pub fn tab_names(&self) -> Vec<String> {
        self.panels.panel_names()
    }

    /// Returns true if a tab with this name exists.
    #[must_use]
    pub fn has_tab(&self, name: &str) -> bool {
        self.panels.panel_names().iter().any(|n| n == name)
    }

    /// Returns the label of a tab, if one was set.
    #[must_use]
    pub fn tab_label(&self, name: &str) -> Option<String> {
        self.state.read().labels.get(name).cloned()
    }

    /// Changes the label colors and the background box.
    pub fn set_theme(&self, theme: Theme) {
        let mut state = self.state.write();
        state.theme = theme;
        self.update_tab_labels(&state);
    }

    /// Draws a border around the widget.
    pub fn set_border(&self, border: bool) {
        self.state.write().border = border;
    }

    /// Sets the title shown in the border.
    pub fn set_title(&self, title: impl Into<String>) {
        self.state.write().title = Some(title.into());
    }

    /// Applies switcher position, theme, border and title from `config`.
    pub fn apply_config(&self, config: &TabbedConfig) {
        {
            let mut state = self.state.write();
            state.border = config.border;
            state.title = config.title.clone();
        }
        self.set_theme(config.theme.clone());
        self.set_tab_switcher_position(config.switcher.is_bottom());
    }

    /// Serializes the labels into strip markup and resizes the strip to the
    /// number of lines the text wraps to.
    fn update_tab_labels(&self, state: &TabState) {
        let label_color = color_name(state.theme.colors.accent);
        let reset_color = color_name(state.theme.colors.foreground);

        let mut markup = String::new();
        for name in self.panels.panel_names() {
            let label = state.labels.get(&name).map(String::as_str).unwrap_or("");
            markup.push_str(&format!(
                r#"["{}"][{}] {} [{}][""]|"#,
                name, label_color, label, reset_color
            ));
        }
        self.tabs.set_text(&markup);

        let lines = wrap::line_count(&self.tabs.get_text(true), usize::from(state.width));
        let lines = u16::try_from(lines).unwrap_or(u16::MAX);
        self.layout.resize_item(&self.tabs_item, lines, 1);
        tracing::trace!(lines, width = state.width, "tab strip wrapped");
    }

    /// Resolves the current tab against the registered panels and shows
    /// exactly that panel.
    fn update_visible_tabs(&self, state: &mut TabState) {
        let names = self.panels.panel_names();

        let registered = !state.current.is_empty() && names.iter().any(|n| *n == state.current);
        if !registered {
            let fallback = names.iter().find(|n| !n.is_empty()).cloned();
            state.current = fallback.unwrap_or_default();
        }

        for name in &names {
            if *name == state.current {
                self.panels.show_panel(name);
            } else {
                self.panels.hide_panel(name);
            }
        }
    }

    /// Refreshes labels and visibility after the panel set changed.
    fn update_all(&self) {
        let changed = {
            let mut state = self.state.write();
            let before = state.current.clone();
            self.update_tab_labels(&state);
            self.update_visible_tabs(&mut state);
            (state.current != before).then(|| state.current.clone())
        };

        if let Some(current) = changed {
            self.highlight_current(&current);
        }
    }

    /// Highlights the current tab's region. Must be called without holding
    /// the state lock.
    fn highlight_current(&self, current: &str) {
        tracing::debug!(tab = current, "current tab changed");
        if current.is_empty() {
            self.tabs.highlight(&[]);
        } else {
            self.tabs.highlight(&[current]);
        }
    }

    fn block(state: &TabState) -> Block<'static> {
        let mut block = Block::default().style(Style::default().bg(state.theme.colors.background));

        if state.border {
            if let Some(border_type) = state.theme.borders.border_type() {
                block = block
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(Style::default().fg(state.theme.colors.border));
                if let Some(title) = &state.title {
                    block = block.title(title.clone());
                }
            }
        }

        block
    }
}

impl HighlightListener for TabbedPanels {
    fn highlighted(&self, added: &[String], _removed: &[String], _remaining: &[String]) {
        let Some(name) = added.first() else {
            return;
        };

        self.set_current_tab(name);
        self.focus.set_focus(self.panels_item.clone());
    }
}

impl Primitive for TabbedPanels {
    fn draw(&self, buf: &mut Buffer) {
        let (block, area, inner) = {
            let mut state = self.state.write();
            let block = Self::block(&state);
            let inner = block.inner(state.rect);

            state.width = inner.width;
            if state.width != state.last_width {
                self.update_tab_labels(&state);
            }
            state.last_width = state.width;

            (block, state.rect, inner)
        };

        block.render(area, buf);
        self.layout.set_rect(inner);
        self.layout.draw(buf);
    }

    fn rect(&self) -> Rect {
        self.state.read().rect
    }

    fn set_rect(&self, area: Rect) {
        let inner = {
            let mut state = self.state.write();
            state.rect = area;
            Self::block(&state).inner(area)
        };
        self.layout.set_rect(inner);
    }

    fn focus(&self) {
        self.layout.focus();
    }

    fn blur(&self) {
        self.layout.blur();
    }

    fn has_focus(&self) -> bool {
        self.layout.has_focus()
    }

    fn handle_key(&self, key: KeyEvent, focus: &dyn FocusController) -> bool {
        self.layout.handle_key(key, focus)
    }

    fn handle_mouse(&self, event: MouseEvent, focus: &dyn FocusController) -> bool {
        let (x, y) = (event.column, event.row);
        if !self.in_rect(x, y) {
            return false;
        }

        if self.tabs.in_rect(x, y) {
            self.tabs.handle_mouse(event, focus);
            self.focus.set_focus(self.panels_item.clone());
            return true;
        }

        self.layout.handle_mouse(event, focus)
    }
}

/// Returns true if `name` can be embedded in strip markup unchanged.
fn is_plain_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}
