//! Headless dropdown selection.
//!
//! A [`SelectableList`] owns the selection (single or multiple), the
//! open/closed state and a live search filter over a fixed list of options.
//! The host delivers key and pointer events, reports where the widget was
//! drawn, and renders [`SelectView`] however it likes.

pub mod config;
pub mod error;
pub mod event;
pub mod rect;
pub mod select;
pub mod selection;

pub use config::SelectConfig;
pub use error::ConfigError;
pub use event::{EventResult, Key, KeyCombo, Modifiers, Pointer};
pub use rect::Rect;
pub use select::{
    ChangeHandler, Chip, Dropdown, OptionRow, SearchField, SelectItem, SelectOption, SelectView,
    SelectableList, Trigger, TriggerContent, Visibility,
};
pub use selection::{Selection, SelectionMode};

pub mod prelude {
    pub use crate::config::SelectConfig;
    pub use crate::event::{EventResult, Key, KeyCombo, Modifiers, Pointer};
    pub use crate::rect::Rect;
    pub use crate::select::{SelectItem, SelectOption, SelectView, SelectableList, Visibility};
    pub use crate::selection::{Selection, SelectionMode};
}
