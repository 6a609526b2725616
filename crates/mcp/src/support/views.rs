#![forbid(unsafe_code)]

use super::time::ts_ms_to_rfc3339;
use bubble_core::{EliminatedNode, Note, Retyped, Topic};
use serde_json::{Value, json};

pub(crate) fn note_json(note: &Note) -> Value {
    json!({
        "id": note.id.get(),
        "kind": note.kind.as_str(),
        "content": note.content,
        "parent": note.parent.map(|id| id.get()),
        "topic_name": note.topic_name,
        "connect": note.connect.iter().map(|id| id.get()).collect::<Vec<_>>(),
        "created_at_ms": note.created_at_ms,
        "created_at": ts_ms_to_rfc3339(note.created_at_ms),
    })
}

pub(crate) fn notes_json(notes: &[Note]) -> Value {
    Value::Array(notes.iter().map(note_json).collect())
}

pub(crate) fn topic_json(topic: &Topic) -> Value {
    json!({
        "id": topic.id.get(),
        "kind": "topic",
        "name": topic.name,
        "created_at_ms": topic.created_at_ms,
        "created_at": ts_ms_to_rfc3339(topic.created_at_ms),
    })
}

pub(crate) fn eliminated_json(nodes: &[EliminatedNode]) -> Value {
    Value::Array(
        nodes
            .iter()
            .map(|node| {
                json!({
                    "id": node.id.get(),
                    "kind": node.kind.as_str(),
                    "content": node.content,
                })
            })
            .collect(),
    )
}

pub(crate) fn retyped_json(retyped: &Retyped) -> Value {
    match retyped {
        Retyped::Note(note) => note_json(note),
        Retyped::Topic(topic) => topic_json(topic),
    }
}
