#![forbid(unsafe_code)]

use bubble_core::{NodeId, NodeKind, NoteKind, Retyped};
use bubble_storage::{CreateNoteRequest, SqliteStore, StoreError};

fn create(store: &mut SqliteStore, request: CreateNoteRequest) -> NodeId {
    store.note_create(request).expect("create note").id
}

fn expect_note(retyped: Retyped) -> bubble_core::Note {
    match retyped {
        Retyped::Note(note) => note,
        Retyped::Topic(topic) => panic!("expected a note, got topic {topic:?}"),
    }
}

#[test]
fn leaf_thought_becomes_solution_with_same_linkage() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let root = create(&mut store, CreateNoteRequest::new(NoteKind::Thought, "root"));
    let mut request =
        CreateNoteRequest::new(NoteKind::Thought, "idea").with_parent(root).with_topic("work");
    request.created_at_ms = Some(42);
    let idea = create(&mut store, request);
    let peer = create(&mut store, CreateNoteRequest::new(NoteKind::Solution, "peer"));
    store
        .connect_add(NoteKind::Thought, idea, &[peer])
        .expect("connect");

    let solution = expect_note(
        store
            .retype(idea, NodeKind::Solution, "answer")
            .expect("retype"),
    );

    assert_ne!(solution.id, idea);
    assert_eq!(solution.kind, NoteKind::Solution);
    assert_eq!(solution.content, "answer");
    assert_eq!(solution.parent, Some(root));
    assert_eq!(solution.topic_name.as_deref(), Some("work"));
    assert_eq!(solution.created_at_ms, 42);
    assert!(solution.is_connected_to(peer));

    assert!(store.note_get(NoteKind::Thought, idea).expect("get").is_none());
    let peer = store
        .note_get(NoteKind::Solution, peer)
        .expect("get")
        .expect("peer");
    assert_eq!(peer.connect.into_iter().collect::<Vec<_>>(), vec![solution.id]);
    assert_eq!(store.count_solutions_anchored(root).expect("count"), 1);
}

#[test]
fn thought_with_children_cannot_change_kind() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let root = create(&mut store, CreateNoteRequest::new(NoteKind::Thought, "root"));
    create(
        &mut store,
        CreateNoteRequest::new(NoteKind::Thought, "child").with_parent(root),
    );

    for kind in [NodeKind::Solution, NodeKind::Topic] {
        let err = store.retype(root, kind, "x").expect_err("has children");
        assert!(matches!(err, StoreError::HasChildren { .. }));
    }

    let same = expect_note(store.retype(root, NodeKind::Thought, "renamed").expect("retype"));
    assert_eq!(same.id, root, "same kind keeps the id");
    assert_eq!(same.content, "renamed");
}

#[test]
fn solution_becomes_thought() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let root = create(&mut store, CreateNoteRequest::new(NoteKind::Thought, "root"));
    let s = create(
        &mut store,
        CreateNoteRequest::new(NoteKind::Solution, "s").with_parent(root),
    );

    let thought = expect_note(store.retype(s, NodeKind::Thought, "t").expect("retype"));
    assert_eq!(thought.kind, NoteKind::Thought);
    assert_eq!(thought.parent, Some(root));
    assert_eq!(store.count_children(root).expect("count"), 1);
    assert_eq!(store.count_solutions_anchored(root).expect("count"), 0);
}

#[test]
fn note_becomes_topic_and_drops_its_position() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let s = create(&mut store, CreateNoteRequest::new(NoteKind::Solution, "s"));
    let peer = create(&mut store, CreateNoteRequest::new(NoteKind::Thought, "peer"));
    store
        .connect_add(NoteKind::Solution, s, &[peer])
        .expect("connect");

    let topic = match store.retype(s, NodeKind::Topic, " errands ").expect("retype") {
        Retyped::Topic(topic) => topic,
        Retyped::Note(note) => panic!("expected topic, got {note:?}"),
    };
    assert_eq!(topic.name, "errands");

    assert!(store.note_get(NoteKind::Solution, s).expect("get").is_none());
    let peer = store
        .note_get(NoteKind::Thought, peer)
        .expect("get")
        .expect("peer");
    assert!(peer.connect.is_empty());

    let again = store
        .retype(peer.id, NodeKind::Topic, "errands")
        .expect("retype into existing topic");
    assert_eq!(again.id(), topic.id, "existing topic is reused");

    let blank = create(&mut store, CreateNoteRequest::new(NoteKind::Thought, "blank"));
    let err = store
        .retype(blank, NodeKind::Topic, "  ")
        .expect_err("blank topic name");
    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[test]
fn topic_becomes_root_note() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let topic = store
        .ensure_topic("inbox")
        .expect("ensure")
        .expect("topic");

    let note = expect_note(
        store
            .retype(topic.id, NodeKind::Solution, "triage")
            .expect("retype"),
    );
    assert_eq!(note.kind, NoteKind::Solution);
    assert!(note.is_root());
    assert_eq!(note.topic_name.as_deref(), Some("triage"));

    assert!(store.topic_get("inbox").expect("get").is_none());
    assert!(store.topic_get("triage").expect("get").is_some());
}

#[test]
fn topic_becomes_note_under_its_own_name_and_keeps_its_id() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let topic = store
        .ensure_topic("inbox")
        .expect("ensure")
        .expect("topic");

    let note = expect_note(
        store
            .retype(topic.id, NodeKind::Thought, "inbox")
            .expect("retype"),
    );
    assert_eq!(note.kind, NoteKind::Thought);
    assert_eq!(note.topic_name.as_deref(), Some("inbox"));

    let after = store.topic_get("inbox").expect("get").expect("topic kept");
    assert_eq!(after.id, topic.id);
    assert_eq!(store.topic_list().expect("list").len(), 1);
}

#[test]
fn topic_to_topic_and_unknown_ids_fail() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let topic = store.ensure_topic("a").expect("ensure").expect("topic");

    let err = store
        .retype(topic.id, NodeKind::Topic, "b")
        .expect_err("topics are not renamed");
    assert!(matches!(err, StoreError::InvalidInput(_)));

    let err = store
        .retype(NodeId::try_new(777).expect("id"), NodeKind::Thought, "x")
        .expect_err("unknown");
    assert!(matches!(err, StoreError::NotFound));
}
