use serde::{Deserialize, Serialize};

pub mod cascade;
pub mod filter;
pub mod model;
pub mod search;

pub use cascade::{resolve_valid_medium, retain_visible_medium, visible_mediums};
pub use filter::{Categorical, FilterKey, FilterState};
pub use model::{
    Artwork, CategoryOption, Credentials, Identity, Person, PersonDetail, PersonEvent,
    ProvenanceEvent,
};
pub use search::{filter_by_text, DisplayName};

pub type RecordId = u64;

/// Reference lists a list view renders its categorical filters from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryOptions {
    pub art_types: Vec<CategoryOption>,
    pub mediums: Vec<CategoryOption>,
    pub event_types: Vec<CategoryOption>,
}
