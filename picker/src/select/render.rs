//! View model for the select.
//!
//! [`SelectableList::view`] projects the current state into plain data. The
//! host draws it; nothing here depends on a particular toolkit.

use unicode_width::UnicodeWidthStr;

use crate::selection::Selection;

use super::SelectableList;

pub const TRIGGER_ROLE: &str = "button";
pub const POPUP_ROLE: &str = "listbox";
pub const OPTION_ROLE: &str = "option";

/// Everything needed to draw the select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub trigger: Trigger,
    /// Present only while open.
    pub dropdown: Option<Dropdown>,
}

/// The always-visible part of the select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub content: TriggerContent,
    /// Mirrors `aria-expanded`.
    pub expanded: bool,
    /// "▲" while open, "▼" while closed.
    pub arrow: &'static str,
}

impl Trigger {
    /// ARIA attributes for hosts that expose them.
    pub fn aria_attributes(&self) -> [(&'static str, String); 3] {
        [
            ("role", TRIGGER_ROLE.to_string()),
            ("aria-haspopup", POPUP_ROLE.to_string()),
            ("aria-expanded", self.expanded.to_string()),
        ]
    }

    /// The trigger as a single line of text.
    pub fn text(&self) -> String {
        let body = match &self.content {
            TriggerContent::Placeholder(text) | TriggerContent::Label(text) => text.clone(),
            TriggerContent::Chips(chips) => chips
                .iter()
                .map(|chip| format!("[{} ×]", chip.label))
                .collect::<Vec<_>>()
                .join(" "),
        };
        format!("{} {}", body, self.arrow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerContent {
    /// Nothing selected.
    Placeholder(String),
    /// Single mode with a selection.
    Label(String),
    /// Multiple mode with at least one selection.
    Chips(Vec<Chip>),
}

/// A selected option shown on the trigger in multiple mode. Clicking its
/// remove affordance should call `remove_option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    /// Index into `options()`.
    pub option_index: Option<usize>,
}

/// The part shown below the trigger while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub search: SearchField,
    pub rows: Vec<OptionRow>,
    /// Set when no option matches the search.
    pub empty_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    pub text: String,
    pub placeholder: String,
    /// The host should focus the field when this is set.
    pub focus_requested: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    /// Index into `options()`.
    pub option_index: usize,
    /// Mirrors `aria-selected`.
    pub selected: bool,
    pub highlighted: bool,
}

impl OptionRow {
    pub fn aria_attributes(&self) -> [(&'static str, String); 2] {
        [
            ("role", OPTION_ROLE.to_string()),
            ("aria-selected", self.selected.to_string()),
        ]
    }
}

impl<V: Clone + PartialEq> SelectableList<V> {
    /// Project the current state into a [`SelectView`].
    pub fn view(&self) -> SelectView {
        let content = match &self.selection {
            Selection::Single(Some(option)) => TriggerContent::Label(option.label.clone()),
            Selection::Multiple(selected) if !selected.is_empty() => TriggerContent::Chips(
                selected
                    .iter()
                    .map(|o| Chip {
                        label: o.label.clone(),
                        option_index: self.options.iter().position(|opt| opt == o),
                    })
                    .collect(),
            ),
            _ => TriggerContent::Placeholder(self.placeholder.clone()),
        };

        let trigger = Trigger {
            content,
            expanded: self.is_open(),
            arrow: if self.is_open() { "▲" } else { "▼" },
        };

        let dropdown = self.is_open().then(|| {
            let rows: Vec<OptionRow> = self
                .visible_indices()
                .into_iter()
                .enumerate()
                .map(|(row, index)| {
                    let option = &self.options[index];
                    OptionRow {
                        label: option.label.clone(),
                        option_index: index,
                        selected: self.is_selected(option),
                        highlighted: self.highlight == Some(row),
                    }
                })
                .collect();

            Dropdown {
                search: SearchField {
                    text: self.query.clone(),
                    placeholder: self.search_placeholder.clone(),
                    focus_requested: self.focus_requested,
                },
                empty_text: rows.is_empty().then(|| self.empty_text.clone()),
                rows,
            }
        });

        SelectView { trigger, dropdown }
    }

    /// Display width of the trigger, at least 10 cells.
    pub fn intrinsic_width(&self) -> u16 {
        let width = self.view().trigger.text().width();
        u16::try_from(width).unwrap_or(u16::MAX).max(10)
    }
}
