#![forbid(unsafe_code)]

mod counters;
mod edges_tx;
mod note_tx;
mod rows;
mod schema;
mod time;
mod topic_tx;

pub(super) use edges_tx::*;
pub(super) use note_tx::*;
pub(super) use rows::select_notes;
pub(super) use schema::migrate_sqlite_schema;
pub(super) use self::time::now_ms;
pub(super) use topic_tx::*;
