#![forbid(unsafe_code)]

pub mod elimination;
pub mod ids;
pub mod lookup;
pub mod model;
pub mod node;

pub use elimination::{AutoEliminateSwitch, EliminationPolicy};
pub use ids::{NodeId, NodeIdError};
pub use lookup::NodeLookup;
pub use model::{NodeKind, NodeKindError, NoteKind};
pub use node::{EliminatedNode, Note, Retyped, Topic, normalize_topic_name};

#[cfg(test)]
mod tests;
