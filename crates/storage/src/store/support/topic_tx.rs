#![forbid(unsafe_code)]

use super::super::StoreError;
use super::counters::next_node_id_tx;
use super::rows::{read_topic, topic_from_parts};
use bubble_core::{NodeId, Topic};
use rusqlite::{Connection, OptionalExtension, Transaction, params};

pub(in crate::store) fn topic_get_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Topic>, StoreError> {
    conn.query_row(
        "SELECT id, name, created_at_ms FROM topics WHERE name=?1",
        params![name],
        read_topic,
    )
    .optional()?
    .map(topic_from_parts)
    .transpose()
}

pub(in crate::store) fn topic_get_by_id(
    conn: &Connection,
    id: NodeId,
) -> Result<Option<Topic>, StoreError> {
    conn.query_row(
        "SELECT id, name, created_at_ms FROM topics WHERE id=?1",
        params![id.get()],
        read_topic,
    )
    .optional()?
    .map(topic_from_parts)
    .transpose()
}

/// Get-or-create by exact (already trimmed) name.
pub(in crate::store) fn ensure_topic_tx(
    tx: &Transaction<'_>,
    name: &str,
    now_ms: i64,
) -> Result<Topic, StoreError> {
    if let Some(existing) = topic_get_by_name(tx, name)? {
        return Ok(existing);
    }

    let id = next_node_id_tx(tx)?;
    tx.execute(
        "INSERT INTO topics(id, name, created_at_ms) VALUES (?1, ?2, ?3)",
        params![id.get(), name, now_ms],
    )?;
    tracing::debug!(topic = name, id = id.get(), "topic created");

    Ok(Topic {
        id,
        name: name.to_string(),
        created_at_ms: now_ms,
    })
}

pub(in crate::store) fn delete_topic_tx(tx: &Transaction<'_>, id: NodeId) -> Result<(), StoreError> {
    tx.execute("DELETE FROM topics WHERE id=?1", params![id.get()])?;
    Ok(())
}

pub(in crate::store) fn topic_list_all(conn: &Connection) -> Result<Vec<Topic>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, created_at_ms FROM topics ORDER BY id ASC")?;
    let rows = stmt.query_map([], read_topic)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(topic_from_parts(row?)?);
    }
    Ok(out)
}
