//! Select widget - a dropdown with search, single or multiple selection.

mod events;
mod filter;
mod item;
mod render;
mod state;

pub use filter::substring_filter;
pub use item::{SelectItem, SelectOption};
pub use render::{
    Chip, Dropdown, OptionRow, SearchField, SelectView, Trigger, TriggerContent, OPTION_ROLE,
    POPUP_ROLE, TRIGGER_ROLE,
};
pub use state::{ChangeHandler, SelectableList, Visibility};
