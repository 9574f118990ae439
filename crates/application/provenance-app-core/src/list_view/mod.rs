//! Filterable list views (artworks, persons).
//!
//! A view keeps three things in step: the free-text term, the categorical
//! selections and the location query. Categorical changes re-fetch from the
//! archive; free text only narrows what is already loaded.

pub mod commands;
pub mod events;
pub mod kernel;
pub mod reducer;
pub mod source;

pub use commands::ListCommand;
pub use events::{FetchGeneration, ListEvent};
pub use kernel::ListViewKernel;
pub use reducer::{apply_selection, reduce, ListState};
pub use source::{ArtworkList, ListSource, PersonList};
