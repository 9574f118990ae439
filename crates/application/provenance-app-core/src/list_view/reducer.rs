use provenance_core::{
    filter_by_text, resolve_valid_medium, retain_visible_medium, visible_mediums, Categorical,
    CategoryOption, CategoryOptions, DisplayName, FilterKey, FilterState, RecordId,
};

use super::events::{FetchGeneration, ListEvent};

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub filter: FilterState,

    pub options: CategoryOptions,
    pub options_ready: bool,

    /// Last committed result set; stays visible while a newer fetch runs.
    pub results: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub latest_generation: FetchGeneration,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            options: CategoryOptions::default(),
            options_ready: false,
            results: Vec::new(),
            loading: false,
            error: None,
            latest_generation: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Whether a resolved fetch may still be committed: it must be the most
    /// recently started one, and the selections it was made for must still
    /// be the current ones.
    pub fn is_current(&self, generation: FetchGeneration, snapshot: &Categorical) -> bool {
        generation == self.latest_generation && *snapshot == self.filter.categorical
    }

    pub fn visible_mediums(&self) -> Vec<&CategoryOption> {
        visible_mediums(self.filter.get(FilterKey::ArtType), &self.options.mediums)
    }
}

impl<T: DisplayName> ListState<T> {
    /// Committed results narrowed by the free-text term.
    pub fn visible_results(&self) -> Vec<&T> {
        filter_by_text(&self.results, &self.filter.free_text)
    }
}

/// Apply a categorical selection and re-derive the medium so it never points
/// at an art type other than the selected one. The forced clear is part of
/// the same change. Returns whether the categorical state changed.
pub fn apply_selection(
    filter: &mut FilterState,
    key: FilterKey,
    value: Option<RecordId>,
    mediums: &[CategoryOption],
) -> bool {
    let before = filter.categorical.clone();
    let changed = filter.set(key, value);

    let medium = filter.get(FilterKey::Medium);
    let art_type = filter.get(FilterKey::ArtType);
    match key {
        FilterKey::ArtType if changed => {
            filter.set(FilterKey::Medium, resolve_valid_medium(medium, art_type, mediums));
        }
        FilterKey::Medium => {
            filter.set(FilterKey::Medium, retain_visible_medium(medium, art_type, mediums));
        }
        FilterKey::ArtType | FilterKey::EventType => {}
    }

    filter.categorical != before
}

/// Fold one event into the view state. Staleness is checked by the caller.
pub fn reduce<T>(mut state: ListState<T>, ev: ListEvent<T>) -> ListState<T> {
    match ev {
        ListEvent::OptionsLoaded(options) => {
            state.options = options;
            state.options_ready = true;
        }

        ListEvent::ResultsLoaded { items, .. } => {
            state.results = items;
            state.loading = false;
            state.error = None;
        }

        ListEvent::ResultsFailed { message, .. } => {
            state.results.clear();
            state.loading = false;
            state.error = Some(message);
        }
    }
    state
}
