//! The catalog state machine.
//!
//! Owns the full entry list and the current page/query/sort, and derives
//! the visible slice from them. Load phases run `Empty -> Loading -> Ready`;
//! a failed load returns to `Empty` with the error flag set. Detail loading
//! is an overlay on top of `Ready` (see `modal`), never a phase transition.
//!
//! Pagination input is never an error: out-of-range page requests clamp
//! silently to the nearest valid page.

use crate::sort::SortSpec;
use crate::types::PokemonEntry;

/// Entries per page. Fixed; matches the original application.
pub const PAGE_SIZE: usize = 20;

/// Load phase of the full index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Empty,
    Loading,
    Ready,
}

/// A user action routed into the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Navigate to a page; clamped, never rejected.
    RequestPage(usize),
    /// Filter by case-insensitive substring; empty clears the filter.
    SetQuery(String),
    /// Apply or clear the sort configuration.
    SetSort(Option<SortSpec>),
    /// Flip favorite membership for an entry. Not consumed here; the
    /// dispatcher routes it to the favorites store.
    ToggleFavorite(u32),
}

/// In-memory list/pagination/search/sort state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    entries: Vec<PokemonEntry>,
    phase: LoadPhase,
    load_failed: bool,
    /// 1-based, always within `[1, total_pages()]`.
    page: usize,
    query: Option<String>,
    sort: Option<SortSpec>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            phase: LoadPhase::Empty,
            load_failed: false,
            page: 1,
            query: None,
            sort: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Mark the index load as in flight.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
        self.load_failed = false;
    }

    /// Install the loaded index and reset to the first page.
    pub fn complete_load(&mut self, entries: Vec<PokemonEntry>) {
        self.entries = entries;
        self.phase = LoadPhase::Ready;
        self.load_failed = false;
        self.page = 1;
    }

    /// Record a failed load: back to `Empty` with the error flag set.
    pub fn fail_load(&mut self) {
        self.entries.clear();
        self.phase = LoadPhase::Empty;
        self.load_failed = true;
        self.page = 1;
    }

    /// Navigate to page `n`, clamped to `[1, total_pages()]`.
    pub fn set_page(&mut self, n: usize) {
        self.page = n.clamp(1, self.total_pages());
    }

    /// Set the name filter. Empty or whitespace-only input means "no
    /// filter". Changing the query resets to page 1, since the current page
    /// may exceed the filtered page count.
    pub fn set_query(&mut self, q: &str) {
        let trimmed = q.trim();
        self.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page = 1;
    }

    /// Apply or clear the sort configuration. The page is preserved: the
    /// filtered count is unchanged by reordering.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Route a user intent into the state machine. `ToggleFavorite` is a
    /// no-op here; see `presenter::dispatch`.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::RequestPage(n) => self.set_page(n),
            Intent::SetQuery(q) => self.set_query(&q),
            Intent::SetSort(sort) => self.set_sort(sort),
            Intent::ToggleFavorite(_) => {}
        }
    }

    /// The full list after sort and filter, before pagination.
    ///
    /// Sorting is stable: equal keys keep insertion order. Filtering
    /// preserves the relative order of survivors.
    pub fn filtered(&self) -> Vec<&PokemonEntry> {
        let mut view: Vec<&PokemonEntry> = self.entries.iter().collect();
        if let Some(spec) = self.sort {
            view.sort_by(|a, b| spec.compare(a, b));
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            view.retain(|entry| entry.name.to_lowercase().contains(&needle));
        }
        view
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages for the current filtered count; never zero.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE).max(1)
    }

    /// The current page's worth of entries. Pure derivation; always
    /// consistent with page/query/sort at call time.
    pub fn visible_slice(&self) -> Vec<PokemonEntry> {
        let filtered = self.filtered();
        let page = self.page.clamp(1, self.total_pages());
        let start = (page - 1) * PAGE_SIZE;
        let end = (page * PAGE_SIZE).min(filtered.len());
        if start >= filtered.len() {
            return Vec::new();
        }
        filtered[start..end].iter().map(|e| (*e).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortDirection, SortField};

    fn entry(id: u32, name: &str) -> PokemonEntry {
        PokemonEntry::new(id, name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
    }

    fn numbered(count: u32) -> Vec<PokemonEntry> {
        (1..=count).map(|id| entry(id, &format!("mon-{id:03}"))).collect()
    }

    fn loaded(count: u32) -> CatalogState {
        let mut state = CatalogState::new();
        state.begin_load();
        state.complete_load(numbered(count));
        state
    }

    #[test]
    fn test_load_transitions() {
        let mut state = CatalogState::new();
        assert_eq!(state.phase(), LoadPhase::Empty);

        state.begin_load();
        assert_eq!(state.phase(), LoadPhase::Loading);

        state.complete_load(numbered(3));
        assert_eq!(state.phase(), LoadPhase::Ready);
        assert_eq!(state.page(), 1);
        assert_eq!(state.entry_count(), 3);
    }

    #[test]
    fn test_failed_load_returns_to_empty_with_flag() {
        let mut state = CatalogState::new();
        state.begin_load();
        state.fail_load();
        assert_eq!(state.phase(), LoadPhase::Empty);
        assert!(state.load_failed());
        assert!(state.visible_slice().is_empty());

        // A retry clears the flag.
        state.begin_load();
        assert!(!state.load_failed());
    }

    #[test]
    fn test_page_clamps_to_valid_range() {
        let mut state = loaded(45);
        assert_eq!(state.total_pages(), 3);

        state.set_page(5);
        assert_eq!(state.page(), 3);

        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_overflow_page_yields_last_partial_slice() {
        // 45 entries, page size 20: page 5 clamps to 3, slice is 41..=45.
        let mut state = loaded(45);
        state.set_page(5);
        let slice = state.visible_slice();
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[0].id, 41);
        assert_eq!(slice[4].id, 45);
    }

    #[test]
    fn test_visible_slice_window() {
        let mut state = loaded(45);
        state.set_page(2);
        let slice = state.visible_slice();
        assert_eq!(slice.len(), 20);
        assert_eq!(slice[0].id, 21);
        assert_eq!(slice[19].id, 40);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let mut state = CatalogState::new();
        state.complete_load(vec![
            entry(4, "charmander"),
            entry(7, "squirtle"),
            entry(6, "charizard"),
        ]);

        state.set_query("CHAR");
        let names: Vec<&str> = state.filtered().iter().map(|e| e.name.as_str()).collect();
        // Original order preserved, non-matches excluded.
        assert_eq!(names, vec!["charmander", "charizard"]);
    }

    #[test]
    fn test_empty_query_means_no_filter() {
        let mut state = loaded(5);
        state.set_query("mon-003");
        assert_eq!(state.filtered_count(), 1);

        state.set_query("   ");
        assert_eq!(state.filtered_count(), 5);
        assert!(state.query().is_none());
    }

    #[test]
    fn test_query_resets_page() {
        let mut state = loaded(45);
        state.set_page(3);
        state.set_query("mon");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_filtered_is_subset_preserving_order() {
        let mut state = loaded(45);
        state.set_query("4");
        let filtered: Vec<u32> = state.filtered().iter().map(|e| e.id).collect();
        let unfiltered: Vec<u32> = (1..=45).collect();
        let mut last_pos = 0;
        for id in &filtered {
            let pos = unfiltered.iter().position(|u| u == id).unwrap();
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn test_sort_name_descending_reverses_ascending() {
        let mut state = CatalogState::new();
        state.complete_load(vec![
            entry(1, "bulbasaur"),
            entry(4, "charmander"),
            entry(7, "squirtle"),
            entry(25, "pikachu"),
        ]);

        state.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Ascending)));
        let ascending: Vec<u32> = state.filtered().iter().map(|e| e.id).collect();

        state.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Descending)));
        let descending: Vec<u32> = state.filtered().iter().map(|e| e.id).collect();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_sort_ties_keep_insertion_order() {
        let mut state = CatalogState::new();
        state.complete_load(vec![entry(10, "ditto"), entry(3, "ditto"), entry(7, "abra")]);
        state.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Ascending)));

        let ids: Vec<u32> = state.filtered().iter().map(|e| e.id).collect();
        // "ditto" ties stay in insertion order: 10 before 3.
        assert_eq!(ids, vec![7, 10, 3]);
    }

    #[test]
    fn test_clearing_sort_restores_insertion_order() {
        let mut state = CatalogState::new();
        state.complete_load(vec![entry(3, "c"), entry(1, "a"), entry(2, "b")]);
        state.set_sort(Some(SortSpec::new(SortField::Id, SortDirection::Ascending)));
        assert_eq!(state.filtered()[0].id, 1);

        state.set_sort(None);
        let ids: Vec<u32> = state.filtered().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_then_query_composes() {
        let mut state = CatalogState::new();
        state.complete_load(vec![
            entry(4, "charmander"),
            entry(6, "charizard"),
            entry(7, "squirtle"),
        ]);
        state.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Ascending)));
        state.set_query("char");

        let names: Vec<&str> = state.filtered().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["charizard", "charmander"]);
    }

    #[test]
    fn test_operations_before_load_are_safe() {
        let mut state = CatalogState::new();
        state.set_page(9);
        state.set_query("pika");
        state.set_sort(Some(SortSpec::default()));
        assert_eq!(state.page(), 1);
        assert!(state.visible_slice().is_empty());
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_intents_route_to_mutators() {
        let mut state = loaded(45);
        state.apply(Intent::RequestPage(2));
        assert_eq!(state.page(), 2);

        state.apply(Intent::SetQuery("mon-01".to_string()));
        assert_eq!(state.page(), 1);
        assert!(state.query().is_some());

        state.apply(Intent::SetSort(Some(SortSpec::default())));
        assert!(state.sort().is_some());

        // ToggleFavorite is handled by the dispatcher, not the catalog.
        state.apply(Intent::ToggleFavorite(25));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_query_changes_total_pages() {
        let mut state = loaded(45);
        state.set_query("mon-00");
        // mon-001 .. mon-009
        assert_eq!(state.filtered_count(), 9);
        assert_eq!(state.total_pages(), 1);
    }
}
