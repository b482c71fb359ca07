/// Search filtering and carousel selection
///
/// The carousel only shows items whose name matches the query. These
/// functions keep the selected item inside that filtered subset.
///
/// Two kinds of index appear here:
/// - an *original position* is an index into the full catalog
/// - a *page* is an index into the filtered subset
///
/// The selection itself is always stored as an original position.
use caseless::default_case_fold_str;

/// Return the original positions whose name contains `query`
///
/// Matching is a substring test on the Unicode full case folding of both
/// sides, so "STRASSE" finds "Straße". An empty query keeps every
/// position. The result is in ascending order.
pub fn compute_filtered_indices<S: AsRef<str>>(names: &[S], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..names.len()).collect();
    }

    let needle = default_case_fold_str(query);
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| default_case_fold_str(name.as_ref()).contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Map a page number to the original position shown on that page
///
/// Pages past the end clamp to the last item. With nothing filtered the
/// result falls back to `0`, which is not a member of the (empty) subset.
pub fn reconcile_current_index(filtered: &[usize], current: usize) -> usize {
    match filtered.get(current) {
        Some(&original) => original,
        None => filtered.last().copied().unwrap_or(0),
    }
}

/// Page on which the original position `current` appears, or `0` if absent
pub fn current_position_within_filtered(filtered: &[usize], current: usize) -> usize {
    filtered
        .iter()
        .position(|&original| original == current)
        .unwrap_or(0)
}

/// Query and current selection, owned by the app and updated per event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    query: String,
    filtered: Vec<usize>,
    /// Original position of the selected item
    current: usize,
}

impl Selection {
    /// Start with an empty query and the first item selected
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let filtered = compute_filtered_indices(names, "");
        let current = filtered.first().copied().unwrap_or(0);

        Self {
            query: String::new(),
            filtered,
            current,
        }
    }

    /// Replace the query, refilter, and jump back to the first match
    pub fn set_query<S: AsRef<str>>(&mut self, names: &[S], query: String) {
        self.filtered = compute_filtered_indices(names, &query);
        self.current = self.filtered.first().copied().unwrap_or(0);
        self.query = query;
    }

    /// Show the given page of the filtered subset
    pub fn go_to_page(&mut self, page: usize) {
        self.current = reconcile_current_index(&self.filtered, page);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page().saturating_sub(1));
    }

    /// Select an item by original position
    ///
    /// Items hidden by the current query can't be selected. Returns whether
    /// the selection changed.
    pub fn select(&mut self, original: usize) -> bool {
        if self.current == original || !self.filtered.contains(&original) {
            return false;
        }
        self.current = original;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Page of the current item, for the page indicator
    pub fn page(&self) -> usize {
        current_position_within_filtered(&self.filtered, self.current)
    }

    /// The item for the "now showing" panel, if it survives the filter
    pub fn showing(&self) -> Option<usize> {
        self.filtered
            .contains(&self.current)
            .then_some(self.current)
    }
}
