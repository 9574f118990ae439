//! Medium options depend on the selected art type.

use crate::model::CategoryOption;
use crate::RecordId;

/// Mediums selectable under `art_type`; every medium when no art type is set.
pub fn visible_mediums(
    art_type: Option<RecordId>,
    mediums: &[CategoryOption],
) -> Vec<&CategoryOption> {
    match art_type {
        None => mediums.iter().collect(),
        Some(parent) => mediums
            .iter()
            .filter(|m| m.parent_id == Some(parent))
            .collect(),
    }
}

/// Parent art type of `medium`, or `None` when the option lists do not
/// know the medium (not loaded yet, failed, or a stale id).
fn known_parent(medium: RecordId, mediums: &[CategoryOption]) -> Option<Option<RecordId>> {
    mediums.iter().find(|m| m.id == medium).map(|m| m.parent_id)
}

/// Medium to keep after the art type changed to `selected_art_type`.
///
/// A medium whose known parent differs from the new art type is cleared;
/// clearing the art type counts as a different parent. A medium the option
/// lists do not know is left alone.
pub fn resolve_valid_medium(
    selected_medium: Option<RecordId>,
    selected_art_type: Option<RecordId>,
    mediums: &[CategoryOption],
) -> Option<RecordId> {
    let medium = selected_medium?;
    match known_parent(medium, mediums) {
        Some(parent) if parent != selected_art_type => None,
        _ => Some(medium),
    }
}

/// Medium to keep when it is picked (or read from the location) under an
/// unchanged art type: refused only if it is known to belong elsewhere.
pub fn retain_visible_medium(
    selected_medium: Option<RecordId>,
    selected_art_type: Option<RecordId>,
    mediums: &[CategoryOption],
) -> Option<RecordId> {
    let medium = selected_medium?;
    let Some(art_type) = selected_art_type else {
        return Some(medium);
    };
    match known_parent(medium, mediums) {
        Some(parent) if parent != Some(art_type) => None,
        _ => Some(medium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medium(id: RecordId, parent: Option<RecordId>) -> CategoryOption {
        CategoryOption {
            id,
            display_name: format!("medium {id}"),
            parent_id: parent,
        }
    }

    fn catalog() -> Vec<CategoryOption> {
        vec![
            medium(7, Some(3)),
            medium(8, Some(3)),
            medium(9, Some(4)),
            medium(10, None),
        ]
    }

    #[test]
    fn no_art_type_shows_everything() {
        let mediums = catalog();
        assert_eq!(visible_mediums(None, &mediums).len(), 4);
    }

    #[test]
    fn art_type_narrows_to_children() {
        let mediums = catalog();
        let ids: Vec<_> = visible_mediums(Some(3), &mediums)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn medium_survives_matching_parent() {
        assert_eq!(resolve_valid_medium(Some(7), Some(3), &catalog()), Some(7));
    }

    #[test]
    fn medium_is_dropped_when_parent_changes() {
        assert_eq!(resolve_valid_medium(Some(7), Some(4), &catalog()), None);
    }

    #[test]
    fn clearing_art_type_drops_medium_with_a_parent() {
        assert_eq!(resolve_valid_medium(Some(9), None, &catalog()), None);
        assert_eq!(resolve_valid_medium(Some(10), None, &catalog()), Some(10));
    }

    #[test]
    fn unlisted_medium_is_left_alone() {
        assert_eq!(resolve_valid_medium(Some(99), Some(3), &catalog()), Some(99));
        assert_eq!(resolve_valid_medium(Some(7), Some(4), &[]), Some(7));
    }

    #[test]
    fn nothing_selected_stays_nothing() {
        assert_eq!(resolve_valid_medium(None, Some(3), &catalog()), None);
        assert_eq!(retain_visible_medium(None, None, &catalog()), None);
    }

    #[test]
    fn any_medium_is_selectable_without_art_type() {
        assert_eq!(retain_visible_medium(Some(7), None, &catalog()), Some(7));
    }

    #[test]
    fn medium_of_another_art_type_is_not_selectable() {
        assert_eq!(retain_visible_medium(Some(9), Some(3), &catalog()), None);
        assert_eq!(retain_visible_medium(Some(8), Some(3), &catalog()), Some(8));
    }

    #[test]
    fn selection_is_kept_when_option_lists_are_missing() {
        assert_eq!(retain_visible_medium(Some(9), Some(3), &[]), Some(9));
    }
}
