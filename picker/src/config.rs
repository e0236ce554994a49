//! Select configuration

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::select::{SelectItem, SelectOption};
use crate::selection::{Selection, SelectionMode};

pub const DEFAULT_PLACEHOLDER: &str = "Select...";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search by name...";
pub const DEFAULT_EMPTY_TEXT: &str = "No results found";

/// Configuration for a [`SelectableList`](crate::SelectableList).
///
/// # Example
///
/// ```
/// use picker::{SelectConfig, SelectOption};
///
/// let config = SelectConfig::new(vec![
///     SelectOption::new(1, "Red"),
///     SelectOption::new(2, "Green"),
/// ])
/// .multiple(true)
/// .with_placeholder("Pick colors");
///
/// assert_eq!(config.placeholder, "Pick colors");
/// ```
///
/// Or from JSON:
///
/// ```
/// use picker::{SelectConfig, SelectionMode};
///
/// let config: SelectConfig<u32> = SelectConfig::from_json(
///     r#"{"options": [{"value": 1, "label": "Red"}], "mode": "multiple"}"#,
/// ).unwrap();
/// assert_eq!(config.mode, SelectionMode::Multiple);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectConfig<V> {
    /// Options in display order.
    pub options: Vec<SelectOption<V>>,

    /// Single or multiple selection.
    ///
    /// Default: single
    #[serde(default)]
    pub mode: SelectionMode,

    /// Text on the trigger when nothing is selected.
    ///
    /// Default: "Select..."
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Placeholder of the search field.
    ///
    /// Default: "Search by name..."
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Row shown when the search matches nothing.
    ///
    /// Default: "No results found"
    #[serde(default = "default_empty_text")]
    pub empty_text: String,

    /// Initial value.
    #[serde(default = "Option::default")]
    pub value: Option<Selection<V>>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_search_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

fn default_empty_text() -> String {
    DEFAULT_EMPTY_TEXT.to_string()
}

impl<V> SelectConfig<V> {
    /// Single-select config with default texts.
    pub fn new(options: Vec<SelectOption<V>>) -> Self {
        Self {
            options,
            mode: SelectionMode::Single,
            placeholder: default_placeholder(),
            search_placeholder: default_search_placeholder(),
            empty_text: default_empty_text(),
            value: None,
        }
    }

    /// Single-select config over anything that converts into options.
    ///
    /// ```
    /// use picker::SelectConfig;
    ///
    /// let config = SelectConfig::from_items([("us", "United States"), ("fr", "France")]);
    /// assert_eq!(config.options[1].label, "France");
    /// ```
    pub fn from_items<I>(items: impl IntoIterator<Item = I>) -> Self
    where
        I: SelectItem<Value = V>,
    {
        Self::new(items.into_iter().map(|item| item.to_option()).collect())
    }

    /// Switches between single and multiple selection.
    pub fn multiple(mut self, is_multiple: bool) -> Self {
        self.mode = SelectionMode::from_multiple(is_multiple);
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: Selection<V>) -> Self {
        self.value = Some(value);
        self
    }
}

impl<V: PartialEq> SelectConfig<V> {
    /// Checks option and initial value uniqueness, and that the initial
    /// value fits the mode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique(&self.options)?;

        if let Some(value) = &self.value {
            if value.mode() != self.mode {
                return Err(ConfigError::ModeMismatch {
                    expected: self.mode,
                });
            }
            check_unique(value.options())?;
            if let Some(unknown) = value.options().iter().find(|v| !self.options.contains(v)) {
                return Err(ConfigError::UnknownValue {
                    label: unknown.label.clone(),
                });
            }
        }

        Ok(())
    }
}

fn check_unique<V: PartialEq>(options: &[SelectOption<V>]) -> Result<(), ConfigError> {
    for (i, option) in options.iter().enumerate() {
        if let Some(dup) = options[..i].iter().find(|o| *o == option) {
            return Err(ConfigError::DuplicateValue {
                first: dup.label.clone(),
                second: option.label.clone(),
            });
        }
    }
    Ok(())
}

impl<V: PartialEq + DeserializeOwned> SelectConfig<V> {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
