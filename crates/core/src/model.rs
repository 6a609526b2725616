#![forbid(unsafe_code)]

/// Discriminator for every record the engine stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Thought,
    Solution,
    Topic,
}

impl NodeKind {
    pub const ALL: [NodeKind; 3] = [NodeKind::Thought, NodeKind::Solution, NodeKind::Topic];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Thought => "thought",
            NodeKind::Solution => "solution",
            NodeKind::Topic => "topic",
        }
    }

    pub fn parse(value: &str) -> Result<Self, NodeKindError> {
        match value.trim() {
            "thought" => Ok(NodeKind::Thought),
            "solution" => Ok(NodeKind::Solution),
            "topic" => Ok(NodeKind::Topic),
            other => Err(NodeKindError::Unknown(other.to_string())),
        }
    }

    pub fn as_note(self) -> Result<NoteKind, NodeKindError> {
        match self {
            NodeKind::Thought => Ok(NoteKind::Thought),
            NodeKind::Solution => Ok(NoteKind::Solution),
            NodeKind::Topic => Err(NodeKindError::NotANote),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of kinds that live in the note table and take part in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Thought,
    Solution,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteKind::Thought => "thought",
            NoteKind::Solution => "solution",
        }
    }

    pub fn parse(value: &str) -> Result<Self, NodeKindError> {
        NodeKind::parse(value)?.as_note()
    }

    pub fn node_kind(self) -> NodeKind {
        match self {
            NoteKind::Thought => NodeKind::Thought,
            NoteKind::Solution => NodeKind::Solution,
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NoteKind> for NodeKind {
    fn from(value: NoteKind) -> Self {
        value.node_kind()
    }
}

impl TryFrom<NodeKind> for NoteKind {
    type Error = NodeKindError;

    fn try_from(value: NodeKind) -> Result<Self, Self::Error> {
        value.as_note()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeKindError {
    #[error("unknown node kind: {0:?} (expected thought, solution or topic)")]
    Unknown(String),
    #[error("topic is not a note kind (expected thought or solution)")]
    NotANote,
}
