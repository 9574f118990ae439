use proptest::prelude::*;
use provenance_core::{FilterKey, FilterState};

fn any_filter_state() -> impl Strategy<Value = FilterState> {
    (
        ".{0,24}",
        proptest::option::of(0u64..10_000),
        proptest::option::of(0u64..10_000),
        proptest::option::of(0u64..10_000),
    )
        .prop_map(|(free_text, art_type, medium, event_type)| {
            let mut s = FilterState {
                free_text,
                ..Default::default()
            };
            s.set(FilterKey::ArtType, art_type);
            s.set(FilterKey::Medium, medium);
            s.set(FilterKey::EventType, event_type);
            s
        })
}

proptest! {
    #[test]
    fn parse_of_serialized_state_is_identity(state in any_filter_state()) {
        let query = state.to_query();
        let parsed = FilterState::from_query(&query, &FilterKey::ALL);
        prop_assert_eq!(parsed, state);
    }

    #[test]
    fn serialized_state_never_has_empty_values(state in any_filter_state()) {
        let query = state.to_query();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (_, value) = pair.split_once('=').unwrap();
            prop_assert!(!value.is_empty());
        }
    }
}

#[test]
fn leading_question_mark_is_optional() {
    let with = FilterState::from_query("?art_type=3", &FilterKey::ALL);
    let without = FilterState::from_query("art_type=3", &FilterKey::ALL);
    assert_eq!(with, without);
}

#[test]
fn person_view_ignores_artwork_keys() {
    let s = FilterState::from_query("art_type=3&event_type=5", &[FilterKey::EventType]);
    assert_eq!(s.get(FilterKey::ArtType), None);
    assert_eq!(s.get(FilterKey::EventType), Some(5));
    assert_eq!(s.to_query(), "event_type=5");
}
