use picker::select::substring_filter;

#[test]
fn test_empty_query_returns_all() {
    let items = vec!["apple".to_string(), "banana".to_string()];
    assert_eq!(substring_filter("", &items), vec![0, 1]);
}

#[test]
fn test_substring_not_fuzzy() {
    let items = ["apple", "banana", "apricot"];
    assert_eq!(substring_filter("ap", items), vec![0, 2]);
    // Letters in order but not contiguous
    assert!(substring_filter("ale", items).is_empty());
}

#[test]
fn test_order_is_input_order() {
    let items = ["Green", "Grey", "green apple"];
    assert_eq!(substring_filter("gre", items), vec![0, 1, 2]);
}

#[test]
fn test_no_matches() {
    assert!(substring_filter("xyz", ["apple", "banana"]).is_empty());
}

#[test]
fn test_case_insensitive() {
    assert_eq!(substring_filter("apple", ["Apple", "BANANA"]), vec![0]);
    assert_eq!(substring_filter("NaN", ["Apple", "BANANA"]), vec![1]);
}
