use serde::{Deserialize, Serialize};

use crate::RecordId;

/// The signed-in user as reported by the archive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "username", default)]
    pub handle: String,
    #[serde(rename = "email", default)]
    pub email_address: String,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(rename = "is_staff", default)]
    pub is_privileged: bool,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Art type, medium or event type. Mediums point at their art type via
/// `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: RecordId,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default, alias = "art_type", alias = "type")]
    pub parent_id: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Artwork {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub art_type: Option<String>,
    #[serde(default)]
    pub dimension: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub event_count: u32,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub provenance: Vec<ProvenanceEvent>,
}

impl Artwork {
    /// Put the provenance chain in custody order.
    pub fn sort_provenance(&mut self) {
        self.provenance.sort_by_key(|ev| ev.sequence);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProvenanceEvent {
    pub id: RecordId,
    pub sequence: i64,
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub certainty: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    pub family_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub death_date: Option<String>,
}

impl Person {
    /// "Family, First", or just the family name when no first name is known.
    pub fn sort_label(&self) -> String {
        if self.first_name.trim().is_empty() {
            self.family_name.clone()
        } else {
            format!("{}, {}", self.family_name, self.first_name)
        }
    }

    pub fn life_span(&self) -> String {
        format!(
            "{} - {}",
            self.birth_date.as_deref().unwrap_or("?"),
            self.death_date.as_deref().unwrap_or("?")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonDetail {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub events: Vec<PersonEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonEvent {
    pub id: RecordId,
    pub artwork_id: RecordId,
    #[serde(default)]
    pub artwork_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: String,
}
