#![forbid(unsafe_code)]

use bubble_core::{EliminatedNode, NodeId, Note};

/// Nodes removed by one delete, leaf first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub target: NodeId,
    pub deleted: Vec<EliminatedNode>,
}

impl CascadeOutcome {
    pub fn deleted_ids(&self) -> Vec<NodeId> {
        self.deleted.iter().map(|node| node.id).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub solution: Note,
    pub previous_parent: Option<NodeId>,
    pub eliminated: Vec<EliminatedNode>,
}

impl ArchiveOutcome {
    pub fn eliminated_ids(&self) -> Vec<NodeId> {
        self.eliminated.iter().map(|node| node.id).collect()
    }
}
