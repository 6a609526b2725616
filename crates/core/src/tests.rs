#![forbid(unsafe_code)]

use super::*;

#[test]
fn node_kind_literals_round_trip() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::parse(kind.as_str()).unwrap(), kind);
    }
    assert_eq!(NodeKind::parse(" solution ").unwrap(), NodeKind::Solution);
}

#[test]
fn unknown_kind_is_rejected() {
    assert_eq!(
        NodeKind::parse("ocr").unwrap_err(),
        NodeKindError::Unknown("ocr".to_string())
    );
    assert_eq!(
        NodeKind::parse("Thought").unwrap_err(),
        NodeKindError::Unknown("Thought".to_string())
    );
}

#[test]
fn topic_is_not_a_note_kind() {
    assert_eq!(NoteKind::parse("topic").unwrap_err(), NodeKindError::NotANote);
    assert_eq!(NoteKind::try_from(NodeKind::Topic).unwrap_err(), NodeKindError::NotANote);
    assert_eq!(NoteKind::parse("thought").unwrap(), NoteKind::Thought);
    assert_eq!(NodeKind::from(NoteKind::Solution), NodeKind::Solution);
}

#[test]
fn node_id_validation() {
    assert_eq!(NodeId::try_new(0).unwrap_err(), NodeIdError::NotPositive);
    assert_eq!(NodeId::try_new(-3).unwrap_err(), NodeIdError::NotPositive);
    assert_eq!(NodeId::parse("").unwrap_err(), NodeIdError::Empty);
    assert_eq!(NodeId::parse("abc").unwrap_err(), NodeIdError::NotInteger);
    assert_eq!(NodeId::parse(" 42 ").unwrap().get(), 42);
}

#[test]
fn topic_names_are_trimmed_and_blank_means_none() {
    assert_eq!(normalize_topic_name(None), None);
    assert_eq!(normalize_topic_name(Some("   ")), None);
    assert_eq!(normalize_topic_name(Some(" work ")), Some("work".to_string()));
}

#[test]
fn lookup_prefers_explicit_constructors() {
    let id = NodeId::try_new(7).unwrap();
    assert_eq!(NodeLookup::from(id).id, Some(id));
    assert!(NodeLookup::by_content("x").id.is_none());
    assert!(NodeLookup::default().is_empty());
}

#[test]
fn switch_snapshots_are_independent_of_later_flips() {
    let switch = AutoEliminateSwitch::default();
    let before = switch.policy();
    assert!(switch.set(false));
    assert_eq!(before, EliminationPolicy::ENABLED);
    assert_eq!(switch.policy(), EliminationPolicy::DISABLED);

    let shared = switch.clone();
    shared.set(true);
    assert!(switch.get());
}
