use crate::model::{Artwork, Person};

/// Text a list item is matched against by the free-text search.
pub trait DisplayName {
    fn display_name(&self) -> String;
}

impl DisplayName for Artwork {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl DisplayName for Person {
    fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
            .trim()
            .to_string()
    }
}

/// Case-insensitive substring filter. An empty term keeps every item.
pub fn filter_by_text<'a, T: DisplayName>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(&needle))
        .collect()
}
