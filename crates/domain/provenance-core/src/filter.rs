//! Filter state of a list view and its location query-string form.
//!
//! The query string is the shareable half of the state: `q` carries the free
//! text and each categorical filter is stored under its own key as a decimal
//! id. Keys without a selection are omitted, never written empty.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::RecordId;

/// Query key holding the free-text search term.
pub const FREE_TEXT_KEY: &str = "q";

// Everything outside the unreserved set is escaped.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    ArtType,
    Medium,
    EventType,
}

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [FilterKey::ArtType, FilterKey::Medium, FilterKey::EventType];

    /// Name used both in the location query and in API query parameters.
    pub fn as_query_key(self) -> &'static str {
        match self {
            FilterKey::ArtType => "art_type",
            FilterKey::Medium => "medium",
            FilterKey::EventType => "event_type",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_query_key() == key)
    }

    /// The filter whose value constrains this one, if any.
    pub fn parent(self) -> Option<FilterKey> {
        match self {
            FilterKey::Medium => Some(FilterKey::ArtType),
            FilterKey::ArtType | FilterKey::EventType => None,
        }
    }
}

/// Selected categorical values; a missing key means "absent".
pub type Categorical = BTreeMap<FilterKey, RecordId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub free_text: String,
    pub categorical: Categorical,
}

impl FilterState {
    /// Parse a location query (with or without the leading `?`), keeping only
    /// the categorical keys the view recognizes. Unknown keys and ids that are
    /// not decimal numbers are treated as absent.
    pub fn from_query(query: &str, keys: &[FilterKey]) -> Self {
        let mut state = FilterState::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);
            if value.is_empty() {
                continue;
            }

            if key == FREE_TEXT_KEY {
                state.free_text = value;
                continue;
            }

            let Some(filter) = FilterKey::from_query_key(&key) else {
                continue;
            };
            if !keys.contains(&filter) {
                continue;
            }
            if let Ok(id) = value.parse::<RecordId>() {
                state.categorical.insert(filter, id);
            }
        }

        state
    }

    /// Serialize without the leading `?`. An empty state yields an empty string.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if !self.free_text.is_empty() {
            pairs.push(format!(
                "{FREE_TEXT_KEY}={}",
                utf8_percent_encode(&self.free_text, QUERY_VALUE)
            ));
        }
        for key in FilterKey::ALL {
            if let Some(id) = self.categorical.get(&key) {
                pairs.push(format!("{}={id}", key.as_query_key()));
            }
        }
        pairs.join("&")
    }

    pub fn get(&self, key: FilterKey) -> Option<RecordId> {
        self.categorical.get(&key).copied()
    }

    /// Set or clear one categorical value. Returns whether anything changed.
    pub fn set(&mut self, key: FilterKey, value: Option<RecordId>) -> bool {
        match value {
            Some(id) => self.categorical.insert(key, id) != Some(id),
            None => self.categorical.remove(&key).is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.free_text.is_empty() && self.categorical.is_empty()
    }

    /// Categorical selections as API query parameters, in key order.
    pub fn query_params(&self) -> Vec<(&'static str, Option<String>)> {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| {
                self.categorical
                    .get(&key)
                    .map(|id| (key.as_query_key(), Some(id.to_string())))
            })
            .collect()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
