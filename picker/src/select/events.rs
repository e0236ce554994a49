//! Event handling for the select.

use crate::event::{EventResult, Key, KeyCombo, Pointer};

use super::SelectableList;

impl<V: Clone + PartialEq> SelectableList<V> {
    /// Handle a key delivered while the select (or its search field) has
    /// focus.
    ///
    /// Closed: Enter, Space or Down open. Open: the search field has focus,
    /// so printable keys edit the search, Up/Down/Home/End move the
    /// highlight, Enter picks the highlighted option (or closes when nothing
    /// is highlighted), Space closes while the search is empty and Escape
    /// always closes.
    pub fn dispatch_key(&mut self, key: impl Into<KeyCombo>) -> EventResult {
        let key = key.into();

        // Ignore keys with ctrl/alt modifiers
        if key.has_command_modifier() {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            return match key.key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                // Escape on a closed select is left to the host
                _ => EventResult::Ignored,
            };
        }

        match key.key {
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            Key::Enter => {
                match self.highlighted_option().cloned() {
                    Some(option) => self.select_option(&option),
                    None => self.toggle_open(),
                }
                EventResult::Consumed
            }
            Key::Char(' ') if self.query.is_empty() => {
                self.toggle_open();
                EventResult::Consumed
            }
            Key::Char(c) => {
                self.query.push(c);
                self.highlight = None;
                self.dirty = true;
                EventResult::Consumed
            }
            Key::Backspace => {
                if self.query.pop().is_some() {
                    self.highlight = None;
                    self.dirty = true;
                }
                EventResult::Consumed
            }
            Key::Up => {
                self.highlight_up();
                EventResult::Consumed
            }
            Key::Down => {
                self.highlight_down();
                EventResult::Consumed
            }
            Key::Home => {
                self.set_highlight(0);
                EventResult::Consumed
            }
            Key::End => {
                self.set_highlight(usize::MAX);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a pointer press anywhere in the host.
    ///
    /// A press outside the trigger and the dropdown closes an open select.
    /// Presses inside are left to the host (trigger toggle, row pick, chip
    /// removal).
    pub fn dispatch_pointer(&mut self, pointer: Pointer) -> EventResult {
        if !self.is_open() || self.contains_point(pointer.x, pointer.y) {
            return EventResult::Ignored;
        }

        log::debug!(
            "SelectableList outside press at ({}, {})",
            pointer.x,
            pointer.y
        );
        self.close();
        EventResult::Consumed
    }

    /// Handle a click on the trigger.
    pub fn dispatch_click(&mut self) -> EventResult {
        // No change event on toggle - only on actual selection
        self.toggle_open();
        EventResult::Consumed
    }

    /// Handle a click on a dropdown row (index into the visible options).
    pub fn dispatch_overlay_click(&mut self, row: usize) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }

        let Some(option) = self.visible_options().get(row).map(|o| (*o).clone()) else {
            // Click on the empty-state row or below the options
            return EventResult::Consumed;
        };

        self.select_option(&option);
        EventResult::Consumed
    }

    /// Handle focus leaving the select.
    pub fn dispatch_blur(&mut self) {
        self.close();
    }
}
