//! Case-insensitive substring filtering of option labels.

/// Indices of the labels containing `query`, ignoring case, in input order.
///
/// Empty query returns every index. No trimming or other normalization is
/// applied to either side.
///
/// # Example
///
/// ```
/// use picker::select::substring_filter;
///
/// let labels = ["Red", "Green", "Blue"];
/// assert_eq!(substring_filter("gr", labels), vec![1]);
/// assert_eq!(substring_filter("", labels), vec![0, 1, 2]);
/// ```
pub fn substring_filter<I, S>(query: &str, labels: I) -> Vec<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.is_empty() {
        return labels.into_iter().enumerate().map(|(i, _)| i).collect();
    }

    let needle = query.to_lowercase();
    labels
        .into_iter()
        .enumerate()
        .filter(|(_, label)| label.as_ref().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
