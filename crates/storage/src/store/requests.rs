#![forbid(unsafe_code)]

use bubble_core::{NodeId, NoteKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateNoteRequest {
    pub kind: NoteKind,
    pub content: String,
    pub parent: Option<NodeId>,
    pub topic_name: Option<String>,
    pub connect: Vec<NodeId>,
    pub created_at_ms: Option<i64>,
}

impl CreateNoteRequest {
    pub fn new(kind: NoteKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            parent: None,
            topic_name: None,
            connect: Vec::new(),
            created_at_ms: None,
        }
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_topic(mut self, topic_name: impl Into<String>) -> Self {
        self.topic_name = Some(topic_name.into());
        self
    }
}

/// Field-wise patch for a note. `None` leaves a field untouched; the inner
/// `None` of `parent`/`topic_name` clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub parent: Option<Option<NodeId>>,
    pub topic_name: Option<Option<String>>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.parent.is_none() && self.topic_name.is_none()
    }
}
