use std::cell::RefCell;
use std::rc::Rc;

use picker::{
    EventResult, Key, KeyCombo, Pointer, Rect, SelectConfig, SelectOption, SelectableList,
    Selection, Visibility,
};

fn colors() -> Vec<SelectOption<u32>> {
    vec![
        SelectOption::new(1, "Red"),
        SelectOption::new(2, "Green"),
        SelectOption::new(3, "Blue"),
    ]
}

fn red() -> SelectOption<u32> {
    SelectOption::new(1, "Red")
}

fn green() -> SelectOption<u32> {
    SelectOption::new(2, "Green")
}

fn blue() -> SelectOption<u32> {
    SelectOption::new(3, "Blue")
}

/// Build a select that records every change notification.
fn recording(
    config: SelectConfig<u32>,
) -> (SelectableList<u32>, Rc<RefCell<Vec<Selection<u32>>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let select = SelectableList::new(config)
        .with_on_change(move |s: &Selection<u32>| sink.borrow_mut().push(s.clone()));
    (select, seen)
}

fn labels(selection: &Selection<u32>) -> Vec<&str> {
    selection.options().iter().map(|o| o.label.as_str()).collect()
}

// ============================================================================
// Multiple mode
// ============================================================================

#[test]
fn test_multiple_toggle_scenario() {
    let (mut select, seen) = recording(SelectConfig::new(colors()).multiple(true));

    select.select_option(&green());
    select.select_option(&red());
    select.select_option(&green());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], Selection::Multiple(vec![green()]));
    assert_eq!(seen[1], Selection::Multiple(vec![green(), red()]));
    assert_eq!(seen[2], Selection::Multiple(vec![red()]));
}

#[test]
fn test_multiple_order_is_first_selection_order() {
    let mut select = SelectableList::multiple(colors());
    select.select_option(&blue());
    select.select_option(&red());
    select.select_option(&green());
    // Deselect and reselect blue: it moves to the end
    select.select_option(&blue());
    select.select_option(&blue());

    assert_eq!(labels(select.selection()), ["Red", "Green", "Blue"]);
}

#[test]
fn test_double_select_nets_to_unselected() {
    let (mut select, seen) = recording(SelectConfig::new(colors()).multiple(true));
    select.select_option(&red());
    select.select_option(&red());

    assert!(!select.is_selected(&red()));
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[1], Selection::Multiple(vec![]));
}

#[test]
fn test_multiple_select_keeps_dropdown_open() {
    let mut select = SelectableList::multiple(colors());
    select.toggle_open();
    select.select_option(&red());
    assert!(select.is_open());
    select.select_option(&green());
    assert!(select.is_open());
}

#[test]
fn test_remove_option() {
    let (mut select, seen) = recording(SelectConfig::new(colors()).multiple(true));
    select.select_option(&red());
    select.select_option(&blue());
    select.open();

    select.remove_option(&red());
    assert_eq!(select.selection(), &Selection::Multiple(vec![blue()]));
    assert!(select.is_open());
    assert_eq!(seen.borrow().len(), 3);

    // Absent: no-op, no notification
    select.remove_option(&green());
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_remove_option_ignored_in_single_mode() {
    let (mut select, seen) = recording(SelectConfig::new(colors()));
    select.select_option(&red());
    select.remove_option(&red());
    assert_eq!(select.selection(), &Selection::Single(Some(red())));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_equality_is_by_value() {
    let mut select = SelectableList::multiple(colors());
    select.select_option(&SelectOption::new(2, "Vert"));
    assert!(select.is_selected(&green()));
    select.select_option(&green());
    assert!(select.selection().is_empty());
}

// ============================================================================
// Single mode
// ============================================================================

#[test]
fn test_single_select_scenario() {
    let (mut select, seen) = recording(SelectConfig::new(colors()));
    select.toggle_open();

    select.select_option(&blue());

    assert_eq!(seen.borrow().as_slice(), [Selection::Single(Some(blue()))]);
    assert_eq!(select.visibility(), Visibility::Closed);
    assert!(select.is_selected(&blue()));
    assert!(!select.is_selected(&red()));
}

#[test]
fn test_single_reselect_still_notifies() {
    let (mut select, seen) = recording(SelectConfig::new(colors()));
    select.select_option(&blue());
    select.select_option(&blue());
    assert_eq!(seen.borrow().len(), 2);
    assert!(select.is_selected(&blue()));
}

#[test]
fn test_clear_selection() {
    let (mut select, seen) = recording(SelectConfig::new(colors()).multiple(true));
    select.clear_selection();
    assert!(seen.borrow().is_empty());

    select.select_option(&red());
    select.clear_selection();
    assert_eq!(seen.borrow().last(), Some(&Selection::Multiple(vec![])));
}

// ============================================================================
// External value
// ============================================================================

#[test]
fn test_initial_value() {
    let select = SelectableList::new(
        SelectConfig::new(colors())
            .multiple(true)
            .with_value(Selection::Multiple(vec![blue(), red()])),
    );
    assert_eq!(labels(select.selection()), ["Blue", "Red"]);
    assert!(!select.is_open());
}

#[test]
fn test_external_value_overwrites_without_notifying() {
    let (mut select, seen) = recording(SelectConfig::new(colors()).multiple(true));
    select.select_option(&red());

    select.set_external_value(Some(Selection::Multiple(vec![green(), blue()])));
    assert_eq!(labels(select.selection()), ["Green", "Blue"]);

    select.set_external_value(None);
    assert!(select.selection().is_empty());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_external_value_single_resolves_against_options() {
    let mut select = SelectableList::single(colors());

    select.set_external_value(Some(Selection::Single(Some(SelectOption::new(2, "")))));
    assert_eq!(select.selected_labels(), ["Green"]);

    select.set_external_value(Some(Selection::Single(Some(SelectOption::new(42, "?")))));
    assert_eq!(select.selection(), &Selection::Single(None));
}

#[test]
fn test_repeated_initial_value_deselects_in_one_toggle() {
    let mut select = SelectableList::new(
        SelectConfig::new(colors())
            .multiple(true)
            .with_value(Selection::Multiple(vec![red(), blue(), red()])),
    );
    assert_eq!(labels(select.selection()), ["Red", "Blue"]);

    select.select_option(&red());
    assert!(!select.is_selected(&red()));
    assert_eq!(labels(select.selection()), ["Blue"]);
}

#[test]
fn test_config_from_items() {
    let mut select = SelectableList::new(
        SelectConfig::from_items([(1u32, "Red"), (2, "Green")]).multiple(true),
    );
    select.select_option(&SelectOption::new(2, "Green"));
    assert_eq!(select.selected_labels(), ["Green"]);
}

#[test]
fn test_external_value_wrong_shape_is_coerced() {
    let mut select = SelectableList::multiple(colors());
    select.set_external_value(Some(Selection::Single(Some(red()))));
    assert_eq!(select.selection(), &Selection::Multiple(vec![red()]));
}

// ============================================================================
// Visibility and search
// ============================================================================

#[test]
fn test_toggle_twice_restores_and_clears_search() {
    let mut select = SelectableList::single(colors());

    select.toggle_open();
    assert!(select.is_open());
    assert!(select.take_focus_request());
    assert!(!select.take_focus_request());
    select.set_search_query("re");

    select.toggle_open();
    assert!(!select.is_open());
    assert_eq!(select.search_query(), "");

    select.toggle_open();
    assert_eq!(select.search_query(), "");
    select.set_search_query("bl");
    select.toggle_open();
    select.toggle_open();
    assert_eq!(select.search_query(), "");
}

#[test]
fn test_visible_options_identity_with_empty_query() {
    let select = SelectableList::single(colors());
    let visible: Vec<SelectOption<u32>> = select.visible_options().into_iter().cloned().collect();
    assert_eq!(visible, colors());
    let labels: Vec<_> = select.visible_options().iter().map(|o| o.label.clone()).collect();
    assert_eq!(labels, ["Red", "Green", "Blue"]);
}

#[test]
fn test_visible_options_filters() {
    let mut select = SelectableList::single(colors());
    select.set_search_query("gr");
    assert_eq!(select.visible_options(), [&green()]);

    select.set_search_query("E");
    let labels: Vec<_> = select.visible_options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["Red", "Green", "Blue"]);

    // Derived fresh on each call
    assert_eq!(select.visible_options().len(), 3);
}

#[test]
fn test_case_insensitive_match() {
    let mut select = SelectableList::single(vec![SelectOption::new(1, "Apple")]);
    select.set_search_query("a");
    assert_eq!(select.visible_options().len(), 1);
}

#[test]
fn test_search_query_is_verbatim() {
    let mut select = SelectableList::single(colors());
    select.set_search_query("  Red ");
    assert_eq!(select.search_query(), "  Red ");
    assert!(select.visible_options().is_empty());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_activate_keys_toggle() {
    let mut select = SelectableList::single(colors());

    assert_eq!(select.dispatch_key(Key::Enter), EventResult::Consumed);
    assert!(select.is_open());
    select.dispatch_key(Key::Enter);
    assert!(!select.is_open());

    select.dispatch_key(Key::Char(' '));
    assert!(select.is_open());
    select.dispatch_key(Key::Char(' '));
    assert!(!select.is_open());
}

#[test]
fn test_escape_forces_closed() {
    let mut select = SelectableList::single(colors());
    select.dispatch_key(Key::Escape);
    assert!(!select.is_open());

    select.open();
    select.dispatch_key(Key::Char('g'));
    assert_eq!(select.dispatch_key(Key::Escape), EventResult::Consumed);
    assert!(!select.is_open());
    assert_eq!(select.search_query(), "");

    select.dispatch_key(Key::Escape);
    assert!(!select.is_open());
}

#[test]
fn test_type_navigate_and_pick() {
    let (mut select, seen) = recording(SelectConfig::new(colors()));
    select.dispatch_key(Key::Enter);
    select.dispatch_key(Key::Char('b'));
    select.dispatch_key(Key::Char('x'));
    select.dispatch_key(Key::Backspace);
    assert_eq!(select.search_query(), "b");
    assert_eq!(select.visible_options(), [&blue()]);

    select.dispatch_key(Key::Down);
    assert_eq!(select.highlighted_option(), Some(&blue()));
    select.dispatch_key(Key::Enter);

    assert_eq!(seen.borrow().as_slice(), [Selection::Single(Some(blue()))]);
    assert!(!select.is_open());
}

#[test]
fn test_home_end_navigation() {
    let mut select = SelectableList::multiple(colors());
    select.dispatch_key(Key::Down);
    select.dispatch_key(Key::End);
    assert_eq!(select.highlighted_option(), Some(&blue()));
    select.dispatch_key(Key::Home);
    assert_eq!(select.highlighted_option(), Some(&red()));
    select.dispatch_key(Key::Enter);
    // Multiple mode: picked and still open
    assert!(select.is_selected(&red()));
    assert!(select.is_open());
}

#[test]
fn test_closed_ignores_other_keys() {
    let mut select = SelectableList::single(colors());
    assert_eq!(select.dispatch_key(Key::Char('r')), EventResult::Ignored);
    assert_eq!(select.dispatch_key(KeyCombo::key(Key::Tab)), EventResult::Ignored);
    assert_eq!(select.search_query(), "");
}

// ============================================================================
// Pointer and focus
// ============================================================================

#[test]
fn test_outside_press_closes() {
    let mut select = SelectableList::single(colors());
    select.set_bounds(Rect::new(0, 0, 20, 1));
    select.open();
    select.set_overlay_bounds(Some(Rect::new(0, 1, 20, 4)));
    select.set_search_query("r");

    assert_eq!(select.dispatch_pointer(Pointer::new(5, 0)), EventResult::Ignored);
    assert_eq!(select.dispatch_pointer(Pointer::new(5, 3)), EventResult::Ignored);
    assert!(select.is_open());

    assert_eq!(select.dispatch_pointer(Pointer::new(30, 3)), EventResult::Consumed);
    assert!(!select.is_open());
    assert_eq!(select.search_query(), "");
}

#[test]
fn test_outside_press_when_closed_is_ignored() {
    let mut select = SelectableList::single(colors());
    assert_eq!(select.dispatch_pointer(Pointer::new(30, 3)), EventResult::Ignored);
    assert!(!select.is_open());
}

#[test]
fn test_unknown_bounds_count_as_outside() {
    let mut select = SelectableList::single(colors());
    select.open();
    select.dispatch_pointer(Pointer::new(0, 0));
    assert!(!select.is_open());
}

#[test]
fn test_click_and_overlay_click() {
    let (mut select, seen) = recording(SelectConfig::new(colors()));
    select.dispatch_click();
    assert!(select.is_open());
    select.set_search_query("e");

    // Visible rows: Red, Green, Blue (all contain "e"); row 1 is Green
    select.dispatch_overlay_click(1);
    assert_eq!(seen.borrow().as_slice(), [Selection::Single(Some(green()))]);
    assert!(!select.is_open());
}

#[test]
fn test_blur_closes() {
    let mut select = SelectableList::single(colors());
    select.open();
    select.set_search_query("x");
    select.dispatch_blur();
    assert!(!select.is_open());
    assert_eq!(select.search_query(), "");
}
