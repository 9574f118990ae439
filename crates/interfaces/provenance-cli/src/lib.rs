pub mod commands;

use clap::ValueEnum;
use provenance_core::{FilterKey, RecordId};

#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a list command seeds its view: a starting address, then explicit
/// selections and a search term applied on top, the way a user would.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub query: String,
    pub select: Vec<(FilterKey, RecordId)>,
    pub search: Option<String>,
}
