#![forbid(unsafe_code)]

use crate::ids::NodeId;

/// Selects a note by id, falling back to its content.
///
/// The id wins whenever it resolves. Content is only consulted when no id was
/// given or the id names nothing of the requested kind. Content is not unique,
/// so the store resolves duplicates to the oldest record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeLookup {
    pub id: Option<NodeId>,
    pub content: Option<String>,
}

impl NodeLookup {
    pub fn by_id(id: NodeId) -> Self {
        Self {
            id: Some(id),
            content: None,
        }
    }

    pub fn by_content(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.content.is_none()
    }
}

impl From<NodeId> for NodeLookup {
    fn from(value: NodeId) -> Self {
        Self::by_id(value)
    }
}
