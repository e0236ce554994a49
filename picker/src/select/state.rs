//! Select state.

use crate::config::SelectConfig;
use crate::rect::Rect;
use crate::selection::{Selection, SelectionMode};

use super::filter::substring_filter;
use super::item::SelectOption;

/// Callback invoked with the new selection after every user-driven change.
pub type ChangeHandler<V> = Box<dyn FnMut(&Selection<V>)>;

/// Whether the option list is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// A dropdown select with search, in single or multiple mode.
///
/// All state lives here and changes only through the methods below; the
/// view is derived from it on demand. Every selection change made through
/// [`select_option`](Self::select_option), [`remove_option`](Self::remove_option)
/// or [`clear_selection`](Self::clear_selection) is reported to the change
/// handler synchronously, once per call.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use picker::{SelectConfig, SelectOption, SelectableList, Selection};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut colors = SelectableList::new(
///     SelectConfig::new(vec![SelectOption::new(1, "Red"), SelectOption::new(2, "Green")])
///         .multiple(true),
/// )
/// .with_on_change(move |s: &Selection<u32>| sink.borrow_mut().push(s.clone()));
///
/// colors.select_option(&SelectOption::new(2, "Green"));
/// assert_eq!(seen.borrow().len(), 1);
/// assert!(colors.is_selected(&SelectOption::new(2, "Green")));
/// ```
pub struct SelectableList<V> {
    pub(super) options: Vec<SelectOption<V>>,
    pub(super) mode: SelectionMode,
    pub(super) selection: Selection<V>,
    pub(super) visibility: Visibility,
    pub(super) query: String,
    /// Highlighted index into `visible_options()` (keyboard navigation)
    pub(super) highlight: Option<usize>,
    pub(super) placeholder: String,
    pub(super) search_placeholder: String,
    pub(super) empty_text: String,
    /// Where the trigger was last drawn
    pub(super) bounds: Option<Rect>,
    /// Where the dropdown was last drawn (only while open)
    pub(super) overlay_bounds: Option<Rect>,
    /// Focus request for the search field (taken by the host)
    pub(super) focus_requested: bool,
    /// Dirty flag for re-render
    pub(super) dirty: bool,
    pub(super) on_change: Option<ChangeHandler<V>>,
}

impl<V: Clone + PartialEq> SelectableList<V> {
    /// Create a closed select from a configuration.
    ///
    /// An initial value of the wrong shape is coerced to the configured
    /// mode; use [`SelectConfig::validate`] to reject it instead.
    pub fn new(config: SelectConfig<V>) -> Self {
        let SelectConfig {
            options,
            mode,
            placeholder,
            search_placeholder,
            empty_text,
            value,
        } = config;

        let selection = resolve(&options, mode, value);

        log::debug!(
            "SelectableList::new mode={:?} options={} selected={}",
            mode,
            options.len(),
            selection.len()
        );

        Self {
            options,
            mode,
            selection,
            visibility: Visibility::Closed,
            query: String::new(),
            highlight: None,
            placeholder,
            search_placeholder,
            empty_text,
            bounds: None,
            overlay_bounds: None,
            focus_requested: false,
            dirty: true,
            on_change: None,
        }
    }

    /// Create a single-select over `options` with default texts.
    pub fn single(options: Vec<SelectOption<V>>) -> Self {
        Self::new(SelectConfig::new(options))
    }

    /// Create a multi-select over `options` with default texts.
    pub fn multiple(options: Vec<SelectOption<V>>) -> Self {
        Self::new(SelectConfig::new(options).multiple(true))
    }

    /// Set the change handler.
    pub fn with_on_change(mut self, handler: impl FnMut(&Selection<V>) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace the change handler.
    pub fn set_on_change(&mut self, handler: impl FnMut(&Selection<V>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &Selection<V> {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Labels of the selected options, in selection order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selection
            .options()
            .iter()
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Whether `option` (by value) is currently selected.
    pub fn is_selected(&self, option: &SelectOption<V>) -> bool {
        self.selection.contains(&option.value)
    }

    /// Overwrite the selection with a value owned outside the widget
    /// (a form reset, a value loaded later, ...).
    ///
    /// `None` clears. In single mode the option is looked up by value among
    /// the options, so the list's label is used; an unknown value clears.
    /// The change handler is not called: the owner already knows.
    pub fn set_external_value(&mut self, value: Option<Selection<V>>) {
        self.selection = resolve(&self.options, self.mode, value);
        self.dirty = true;
        log::debug!(
            "SelectableList::set_external_value selected={}",
            self.selection.len()
        );
    }

    /// Pick an option.
    ///
    /// Single mode replaces the selection and closes the dropdown. Multiple
    /// mode removes the option if it is already selected, otherwise appends
    /// it, and leaves the dropdown as it is.
    pub fn select_option(&mut self, option: &SelectOption<V>) {
        match &mut self.selection {
            Selection::Single(current) => {
                *current = Some(option.clone());
                self.dirty = true;
                self.notify();
                self.close();
            }
            Selection::Multiple(selected) => {
                if let Some(pos) = selected.iter().position(|o| o == option) {
                    selected.remove(pos);
                } else {
                    selected.push(option.clone());
                }
                self.dirty = true;
                self.notify();
            }
        }
    }

    /// Remove an option from a multiple selection.
    ///
    /// Does nothing (and notifies nobody) when the option is not selected
    /// or the select is in single mode.
    pub fn remove_option(&mut self, option: &SelectOption<V>) {
        let Selection::Multiple(selected) = &mut self.selection else {
            log::debug!("SelectableList::remove_option ignored in single mode");
            return;
        };

        if let Some(pos) = selected.iter().position(|o| o == option) {
            selected.remove(pos);
            self.dirty = true;
            self.notify();
        }
    }

    /// Clear the selection, notifying if anything was selected.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection = Selection::empty(self.mode);
        self.dirty = true;
        self.notify();
    }

    fn notify(&mut self) {
        log::debug!(
            "SelectableList change selected={}",
            self.selection.len()
        );
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.selection);
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Open the dropdown, clearing the search and requesting focus for it.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.visibility = Visibility::Open;
        self.query.clear();
        self.highlight = None;
        self.focus_requested = true;
        self.dirty = true;
        log::debug!("SelectableList open");
    }

    /// Close the dropdown, clearing the search.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.visibility = Visibility::Closed;
        self.query.clear();
        self.highlight = None;
        self.focus_requested = false;
        self.overlay_bounds = None;
        self.dirty = true;
        log::debug!("SelectableList close");
    }

    /// Toggle the dropdown open/closed.
    pub fn toggle_open(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Take the pending focus request, if any.
    ///
    /// The host should move input focus to the search field when this
    /// returns true.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Replace the search text verbatim.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.highlight = None;
        self.dirty = true;
    }

    /// Options whose label contains the search text, ignoring case, in
    /// their original order. All options when the search is empty.
    pub fn visible_options(&self) -> Vec<&SelectOption<V>> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.options[i])
            .collect()
    }

    /// Indices into `options` of the visible options.
    pub(super) fn visible_indices(&self) -> Vec<usize> {
        substring_filter(&self.query, self.options.iter().map(|o| o.label.as_str()))
    }

    // -------------------------------------------------------------------------
    // Highlight (keyboard navigation while open)
    // -------------------------------------------------------------------------

    /// Highlighted index into [`visible_options`](Self::visible_options).
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Set the highlight, clamped to the visible options.
    pub fn set_highlight(&mut self, index: usize) {
        let count = self.visible_options().len();
        self.highlight = if count == 0 {
            None
        } else {
            Some(index.min(count - 1))
        };
        self.dirty = true;
    }

    pub fn highlight_up(&mut self) {
        match self.highlight {
            Some(current) => self.set_highlight(current.saturating_sub(1)),
            None => self.set_highlight(usize::MAX),
        }
    }

    pub fn highlight_down(&mut self) {
        match self.highlight {
            Some(current) => self.set_highlight(current.saturating_add(1)),
            None => self.set_highlight(0),
        }
    }

    /// The highlighted option, if any.
    pub fn highlighted_option(&self) -> Option<&SelectOption<V>> {
        self.highlight
            .and_then(|i| self.visible_options().get(i).copied())
    }

    // -------------------------------------------------------------------------
    // Bounds (reported by the host after drawing)
    // -------------------------------------------------------------------------

    /// Record where the trigger was drawn.
    pub fn set_bounds(&mut self, rect: Rect) {
        self.bounds = Some(rect);
    }

    /// Record where the dropdown was drawn, `None` when not drawn.
    pub fn set_overlay_bounds(&mut self, rect: Option<Rect>) {
        self.overlay_bounds = rect;
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn overlay_bounds(&self) -> Option<Rect> {
        self.overlay_bounds
    }

    /// Whether a point lies on the trigger or the open dropdown.
    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        self.bounds.is_some_and(|r| r.contains(x, y))
            || self.overlay_bounds.is_some_and(|r| r.contains(x, y))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Shape an externally supplied value for `mode`.
fn resolve<V: Clone + PartialEq>(
    options: &[SelectOption<V>],
    mode: SelectionMode,
    value: Option<Selection<V>>,
) -> Selection<V> {
    let Some(value) = value else {
        return Selection::empty(mode);
    };

    let value = if value.mode() == mode {
        value
    } else {
        log::warn!(
            "SelectableList value has {:?} shape, coercing to {:?}",
            value.mode(),
            mode
        );
        value.into_mode(mode)
    };

    match value {
        Selection::Single(Some(wanted)) => {
            let found = options.iter().find(|o| **o == wanted).cloned();
            if found.is_none() {
                log::warn!("SelectableList value {:?} is not an option", wanted.label);
            }
            Selection::Single(found)
        }
        Selection::Multiple(wanted) => {
            let mut selected: Vec<SelectOption<V>> = Vec::with_capacity(wanted.len());
            for option in wanted {
                if selected.contains(&option) {
                    log::warn!("SelectableList value {:?} given twice", option.label);
                } else {
                    selected.push(option);
                }
            }
            Selection::Multiple(selected)
        }
        other => other,
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SelectableList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectableList")
            .field("mode", &self.mode)
            .field("options", &self.options.len())
            .field("selection", &self.selection)
            .field("visibility", &self.visibility)
            .field("query", &self.query)
            .field("highlight", &self.highlight)
            .finish_non_exhaustive()
    }
}
