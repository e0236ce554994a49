//! Options and the SelectItem conversion trait.

use serde::{Deserialize, Serialize};

/// A selectable choice: an identifying value and the label shown for it.
///
/// Two options are equal when their values are equal; labels are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<V: PartialEq> PartialEq for SelectOption<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for SelectOption<V> {}

/// Trait for items that can be offered in a select.
///
/// # Example
///
/// ```
/// use picker::{SelectItem, SelectOption};
///
/// struct Priority {
///     id: u32,
///     name: String,
/// }
///
/// impl SelectItem for Priority {
///     type Value = u32;
///
///     fn select_value(&self) -> u32 {
///         self.id
///     }
///
///     fn select_label(&self) -> String {
///         self.name.clone()
///     }
/// }
///
/// let high = Priority { id: 3, name: "High".into() };
/// assert_eq!(high.to_option(), SelectOption::new(3, "High"));
/// ```
pub trait SelectItem {
    type Value;

    /// Identifier used for equality and selection tracking.
    fn select_value(&self) -> Self::Value;

    /// Display text in the dropdown and the trigger.
    fn select_label(&self) -> String;

    fn to_option(&self) -> SelectOption<Self::Value> {
        SelectOption::new(self.select_value(), self.select_label())
    }
}

impl SelectItem for String {
    type Value = String;

    fn select_value(&self) -> String {
        self.clone()
    }

    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectItem for &str {
    type Value = String;

    fn select_value(&self) -> String {
        (*self).to_string()
    }

    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

impl<V: Clone, L: AsRef<str>> SelectItem for (V, L) {
    type Value = V;

    fn select_value(&self) -> V {
        self.0.clone()
    }

    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

impl<V: Clone> SelectItem for SelectOption<V> {
    type Value = V;

    fn select_value(&self) -> V {
        self.value.clone()
    }

    fn select_label(&self) -> String {
        self.label.clone()
    }
}
