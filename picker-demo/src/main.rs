//! Terminal host for the picker widget.
//!
//! Tab moves between fields, Enter/Space opens, type to search, Up/Down and
//! Enter to pick, Escape or a click elsewhere to close, q to quit.

mod terminal;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent};
use picker::event::MouseButton;
use picker::{
    KeyCombo, Pointer, Rect, SelectConfig, SelectView, SelectableList, Selection, TriggerContent,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthStr;

use terminal::{Look, Span, Terminal};

const PRIORITY_CONFIG: &str = r#"{
    "options": [
        {"value": "low", "label": "Low"},
        {"value": "medium", "label": "Medium"},
        {"value": "high", "label": "High"},
        {"value": "urgent", "label": "Urgent"}
    ],
    "placeholder": "Select priority"
}"#;

const LABELS_CONFIG: &str = r#"{
    "options": [
        {"value": "bug", "label": "Bug"},
        {"value": "feature", "label": "Feature"},
        {"value": "docs", "label": "Documentation"},
        {"value": "perf", "label": "Performance"},
        {"value": "ui", "label": "User interface"}
    ],
    "mode": "multiple",
    "placeholder": "Add labels"
}"#;

const FIELD_X: u16 = 14;
const HISTORY_LEN: usize = 5;

/// A labelled select placed on a screen row.
struct Field {
    title: &'static str,
    y: u16,
    select: SelectableList<String>,
}

struct Demo {
    fields: Vec<Field>,
    focused: usize,
    /// Where the host put the cursor after a focus request
    search_cursor: Option<(u16, u16)>,
    changes: Rc<RefCell<VecDeque<String>>>,
    quit: bool,
}

impl Demo {
    fn new() -> Result<Self, picker::ConfigError> {
        let changes = Rc::new(RefCell::new(VecDeque::new()));

        let fields = vec![
            Field {
                title: "Priority",
                y: 3,
                select: Self::build(PRIORITY_CONFIG, "priority", &changes)?,
            },
            Field {
                title: "Labels",
                y: 5,
                select: Self::build(LABELS_CONFIG, "labels", &changes)?,
            },
        ];

        Ok(Self {
            fields,
            focused: 0,
            search_cursor: None,
            changes,
            quit: false,
        })
    }

    fn build(
        json: &str,
        name: &'static str,
        changes: &Rc<RefCell<VecDeque<String>>>,
    ) -> Result<SelectableList<String>, picker::ConfigError> {
        let config = SelectConfig::from_json(json)?;
        let sink = Rc::clone(changes);
        Ok(
            SelectableList::new(config).with_on_change(move |selection: &Selection<String>| {
                let values: Vec<&str> = selection
                    .options()
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect();
                let line = format!("{} -> [{}]", name, values.join(", "));
                log::info!("{}", line);
                let mut history = sink.borrow_mut();
                history.push_back(line);
                if history.len() > HISTORY_LEN {
                    history.pop_front();
                }
            }),
        )
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            Event::Mouse(mouse) => {
                if let Some(pointer) = left_press(&mouse) {
                    self.on_press(pointer);
                }
            }
            _ => {}
        }
    }

    fn on_key(&mut self, key: crossterm::event::KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            self.move_focus(1);
            return;
        }
        if key.code == KeyCode::BackTab {
            self.move_focus(self.fields.len() - 1);
            return;
        }

        let select = &mut self.fields[self.focused].select;
        let handled = select.dispatch_key(KeyCombo::from(key)).is_handled();
        if !handled && key.code == KeyCode::Char('q') {
            self.quit = true;
        }
    }

    fn move_focus(&mut self, step: usize) {
        self.fields[self.focused].select.dispatch_blur();
        self.focused = (self.focused + step) % self.fields.len();
        log::debug!("focus -> {}", self.fields[self.focused].title);
    }

    fn on_press(&mut self, pointer: Pointer) {
        // An open dropdown paints over the fields below it, so it wins
        if let Some(index) = self.fields.iter().position(|f| {
            f.select
                .overlay_bounds()
                .is_some_and(|r| r.contains(pointer.x, pointer.y))
        }) {
            let select = &mut self.fields[index].select;
            if let Some(overlay) = select.overlay_bounds() {
                // First overlay line is the search field
                let line = pointer.y - overlay.y;
                if line > 0 {
                    select.dispatch_overlay_click(usize::from(line - 1));
                }
            }
            return;
        }

        for field in &mut self.fields {
            field.select.dispatch_pointer(pointer);
        }

        let Some(index) = self.fields.iter().position(|f| {
            f.select
                .bounds()
                .is_some_and(|r| r.contains(pointer.x, pointer.y))
        }) else {
            return;
        };

        if index != self.focused {
            self.move_focus((index + self.fields.len() - self.focused) % self.fields.len());
        }

        let select = &mut self.fields[index].select;
        match chip_at(&select.view(), pointer.x.saturating_sub(FIELD_X)) {
            Some(chip) => {
                if let Some(option) = select.selection().options().get(chip).cloned() {
                    select.remove_option(&option);
                }
            }
            None => {
                select.dispatch_click();
            }
        }
    }

    fn render(&mut self) -> Vec<Span> {
        let mut spans = vec![
            Span::new(2, 1, "picker demo", Look::bold()),
            Span::new(
                2,
                8,
                "Tab: next field  Enter/Space: open  type: search  Esc/click outside: close  q: quit",
                Look::dim(),
            ),
            Span::new(2, 10, "Changes:", Look::bold()),
        ];

        for (i, line) in self.changes.borrow().iter().enumerate() {
            spans.push(Span::new(4, 11 + i as u16, line.clone(), Look::PLAIN));
        }

        // Overlays are collected separately and painted last
        let mut overlays = Vec::new();

        for (i, field) in self.fields.iter_mut().enumerate() {
            let select = &mut field.select;
            let view = select.view();
            let focused = i == self.focused;

            let marker = if focused { ">" } else { " " };
            spans.push(Span::new(0, field.y, marker, Look::bold()));
            spans.push(Span::new(2, field.y, field.title, Look::PLAIN));

            let trigger = view.trigger.text();
            let width = select.intrinsic_width();
            let look = match (&view.trigger.content, focused) {
                (_, true) => Look::reverse(),
                (TriggerContent::Placeholder(_), false) => Look::dim(),
                _ => Look::PLAIN,
            };
            spans.push(Span::new(FIELD_X, field.y, trigger, look));
            select.set_bounds(Rect::new(FIELD_X, field.y, width, 1));

            let Some(dropdown) = view.dropdown else {
                select.set_overlay_bounds(None);
                continue;
            };

            let top = field.y + 1;
            let search = if dropdown.search.text.is_empty() {
                (dropdown.search.placeholder.clone(), Look::dim())
            } else {
                (dropdown.search.text.clone(), Look::PLAIN)
            };
            let mut lines = vec![(format!("/ {}", search.0), search.1)];
            for row in &dropdown.rows {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let look = if row.highlighted {
                    Look::reverse()
                } else if row.selected {
                    Look::bold()
                } else {
                    Look::PLAIN
                };
                lines.push((format!("{} {}", check, row.label), look));
            }
            if let Some(empty) = &dropdown.empty_text {
                lines.push((empty.clone(), Look::dim()));
            }

            let overlay_width = lines
                .iter()
                .map(|(text, _)| text.width())
                .max()
                .unwrap_or(0)
                .max(usize::from(width)) as u16;
            for (offset, (text, look)) in lines.iter().enumerate() {
                let padded = format!("{:<w$}", text, w = usize::from(overlay_width));
                overlays.push(Span::new(FIELD_X, top + offset as u16, padded, *look));
            }
            select.set_overlay_bounds(Some(Rect::new(
                FIELD_X,
                top,
                overlay_width,
                lines.len() as u16,
            )));

            if select.take_focus_request() || focused {
                let typed = dropdown.search.text.width() as u16;
                self.search_cursor = Some((FIELD_X + 2 + typed, top));
            }
        }

        if !self.fields.iter().any(|f| f.select.is_open()) {
            self.search_cursor = None;
        }

        spans.extend(overlays);
        spans
    }
}

/// Only the primary button picks, opens or dismisses.
fn left_press(mouse: &MouseEvent) -> Option<Pointer> {
    Pointer::from_mouse(mouse).filter(|p| p.button == MouseButton::Left)
}

/// Index of the chip whose "×" sits at column `x` of the trigger text.
fn chip_at(view: &SelectView, x: u16) -> Option<usize> {
    let TriggerContent::Chips(chips) = &view.trigger.content else {
        return None;
    };

    let mut start = 0usize;
    for (i, chip) in chips.iter().enumerate() {
        // "[label ×]" followed by a space
        let text = format!("[{} ×]", chip.label);
        let cross = start + text.width() - 2;
        if usize::from(x) == cross {
            return Some(i);
        }
        start += text.width() + 1;
    }
    None
}

fn main() -> io::Result<()> {
    let log_file = File::create("picker-demo.log")?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut demo = Demo::new().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut term = Terminal::new()?;

    while !demo.quit {
        let spans = demo.render();
        term.draw(&spans, demo.search_cursor)?;

        for event in term.poll(Duration::from_millis(250))? {
            demo.handle(event);
        }
    }

    log::info!("picker demo exiting");
    Ok(())
}
