use provenance_core::{FilterKey, RecordId};

#[derive(Debug, Clone)]
pub enum ListCommand {
    // Lifecycle
    Mount,

    // Filters
    SetFreeText(String),
    Select(FilterKey, Option<RecordId>),
    ClearFilters,
}
