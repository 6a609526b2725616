#![forbid(unsafe_code)]

/// Identifier shared by thoughts, solutions and topics.
///
/// All three kinds draw from one counter, so an id names at most one record
/// in a store regardless of kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(i64);

impl NodeId {
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn try_new(value: i64) -> Result<Self, NodeIdError> {
        if value <= 0 {
            return Err(NodeIdError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, NodeIdError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(NodeIdError::Empty);
        }
        let raw = value
            .parse::<i64>()
            .map_err(|_| NodeIdError::NotInteger)?;
        Self::try_new(raw)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeIdError {
    #[error("node id must not be empty")]
    Empty,
    #[error("node id must be an integer")]
    NotInteger,
    #[error("node id must be positive")]
    NotPositive,
}

impl NodeIdError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "node id must not be empty",
            Self::NotInteger => "node id must be an integer",
            Self::NotPositive => "node id must be positive",
        }
    }
}
