use provenance_core::{Categorical, CategoryOptions};

/// Sequence number of a results fetch within one view.
pub type FetchGeneration = u64;

#[derive(Debug, Clone)]
pub enum ListEvent<T> {
    OptionsLoaded(CategoryOptions),

    ResultsLoaded {
        generation: FetchGeneration,
        snapshot: Categorical,
        items: Vec<T>,
    },
    ResultsFailed {
        generation: FetchGeneration,
        snapshot: Categorical,
        message: String,
    },
}
