#![forbid(unsafe_code)]

use crate::ids::NodeId;
use crate::model::{NodeKind, NoteKind};
use std::collections::BTreeSet;

/// A thought or a solution.
///
/// `parent` always names a thought (or nothing); `connect` is one half of a
/// symmetric relation, the store writes the other half in the same transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: NodeId,
    pub kind: NoteKind,
    pub content: String,
    pub parent: Option<NodeId>,
    pub topic_name: Option<String>,
    pub connect: BTreeSet<NodeId>,
    pub created_at_ms: i64,
}

impl Note {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_connected_to(&self, peer: NodeId) -> bool {
        self.connect.contains(&peer)
    }

    pub fn to_eliminated(&self) -> EliminatedNode {
        EliminatedNode {
            id: self.id,
            kind: self.kind,
            content: self.content.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    pub id: NodeId,
    pub name: String,
    pub created_at_ms: i64,
}

/// One entry of a cascade report, in deletion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliminatedNode {
    pub id: NodeId,
    pub kind: NoteKind,
    pub content: String,
}

/// Result of re-typing a record: either a note or a topic label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Retyped {
    Note(Note),
    Topic(Topic),
}

impl Retyped {
    pub fn id(&self) -> NodeId {
        match self {
            Retyped::Note(note) => note.id,
            Retyped::Topic(topic) => topic.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Retyped::Note(note) => note.kind.node_kind(),
            Retyped::Topic(_) => NodeKind::Topic,
        }
    }
}

/// Trims a topic reference; blank names mean "ungrouped".
pub fn normalize_topic_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
