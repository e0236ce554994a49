//! Selection state for the dropdown.
//!
//! The selection is a tagged value: the variant is chosen once from the
//! widget's [`SelectionMode`] and never re-tagged afterwards.

use serde::{Deserialize, Serialize};

use crate::select::SelectOption;

/// Selection mode, fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one option; picking closes the dropdown.
    #[default]
    Single,
    /// Any number of options, kept in the order they were picked.
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(is_multiple: bool) -> Self {
        if is_multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}

/// The current value of a select.
///
/// This is also the payload of every change notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum Selection<V> {
    Single(Option<SelectOption<V>>),
    Multiple(Vec<SelectOption<V>>),
}

impl<V> Selection<V> {
    /// The empty selection for a mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Selected options in selection order.
    pub fn options(&self) -> &[SelectOption<V>] {
        match self {
            Selection::Single(option) => option.as_slice(),
            Selection::Multiple(options) => options,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    /// The single selected option, if this is a single selection.
    pub fn as_single(&self) -> Option<&SelectOption<V>> {
        match self {
            Selection::Single(option) => option.as_ref(),
            Selection::Multiple(_) => None,
        }
    }

    /// Reshape into `mode`.
    ///
    /// A single value becomes a one-element set; a set keeps its first
    /// element when narrowed to single.
    pub fn into_mode(self, mode: SelectionMode) -> Self {
        match (self, mode) {
            (Selection::Single(option), SelectionMode::Multiple) => {
                Selection::Multiple(option.into_iter().collect())
            }
            (Selection::Multiple(options), SelectionMode::Single) => {
                Selection::Single(options.into_iter().next())
            }
            (selection, _) => selection,
        }
    }
}

impl<V: PartialEq> Selection<V> {
    /// Whether an option with this value is selected.
    pub fn contains(&self, value: &V) -> bool {
        self.options().iter().any(|o| &o.value == value)
    }
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Self::empty(SelectionMode::default())
    }
}
