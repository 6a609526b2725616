#![forbid(unsafe_code)]

use bubble_core::{NodeId, NodeKindError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid kind: {0}")]
    InvalidKind(#[from] NodeKindError),
    #[error("not found")]
    NotFound,
    #[error("node {id} still has {children} children")]
    HasChildren { id: NodeId, children: i64 },
}
