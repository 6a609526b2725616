#![forbid(unsafe_code)]

use super::super::StoreError;
use bubble_core::{NodeId, Note, NoteKind, Topic};
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::collections::BTreeSet;

pub(in crate::store) const NOTE_COLUMNS: &str =
    "id, kind, content, parent_id, topic_name, connect_json, created_at_ms";

struct NoteRow {
    id: i64,
    kind: String,
    content: String,
    parent_id: Option<i64>,
    topic_name: Option<String>,
    connect_json: String,
    created_at_ms: i64,
}

impl NoteRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            kind: row.get(1)?,
            content: row.get(2)?,
            parent_id: row.get(3)?,
            topic_name: row.get(4)?,
            connect_json: row.get(5)?,
            created_at_ms: row.get(6)?,
        })
    }

    fn into_note(self) -> Result<Note, StoreError> {
        let id = NodeId::try_new(self.id).map_err(|_| StoreError::InvalidInput("invalid note row"))?;
        let kind = NoteKind::parse(&self.kind)?;
        let parent = self
            .parent_id
            .map(NodeId::try_new)
            .transpose()
            .map_err(|_| StoreError::InvalidInput("invalid note parent"))?;
        Ok(Note {
            id,
            kind,
            content: self.content,
            parent,
            topic_name: self.topic_name,
            connect: decode_connect(&self.connect_json)?,
            created_at_ms: self.created_at_ms,
        })
    }
}

/// Runs `SELECT <note columns> FROM notes <clause>`.
pub(in crate::store) fn select_notes<P: Params>(
    conn: &Connection,
    clause: &str,
    params: P,
) -> Result<Vec<Note>, StoreError> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes {clause}");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, NoteRow::read)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?.into_note()?);
    }
    Ok(out)
}

pub(in crate::store) fn select_note<P: Params>(
    conn: &Connection,
    clause: &str,
    params: P,
) -> Result<Option<Note>, StoreError> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes {clause}");
    let row = conn.query_row(&sql, params, NoteRow::read).optional()?;
    row.map(NoteRow::into_note).transpose()
}

pub(in crate::store) fn read_topic(row: &Row<'_>) -> rusqlite::Result<(i64, String, i64)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

pub(in crate::store) fn topic_from_parts(
    (id, name, created_at_ms): (i64, String, i64),
) -> Result<Topic, StoreError> {
    let id = NodeId::try_new(id).map_err(|_| StoreError::InvalidInput("invalid topic row"))?;
    Ok(Topic {
        id,
        name,
        created_at_ms,
    })
}

pub(in crate::store) fn encode_connect(connect: &BTreeSet<NodeId>) -> Result<String, StoreError> {
    let raw = connect.iter().map(|id| id.get()).collect::<Vec<_>>();
    Ok(serde_json::to_string(&raw)?)
}

pub(in crate::store) fn decode_connect(raw: &str) -> Result<BTreeSet<NodeId>, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(BTreeSet::new());
    }
    let ids: Vec<i64> = serde_json::from_str(trimmed)?;
    ids.into_iter()
        .map(|id| {
            NodeId::try_new(id).map_err(|_| StoreError::InvalidInput("invalid connect row"))
        })
        .collect()
}
