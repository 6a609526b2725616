#![forbid(unsafe_code)]

use super::super::StoreError;
use super::counters::next_node_id_tx;
use super::edges_tx::detach_all_peers_tx;
use super::rows::{select_note, select_notes};
use super::topic_tx::ensure_topic_tx;
use bubble_core::{NodeId, NodeLookup, Note, NoteKind, normalize_topic_name};
use rusqlite::{Connection, Transaction, params};
use std::collections::BTreeSet;

pub(in crate::store) struct NoteInsertTxArgs<'a> {
    pub kind: NoteKind,
    pub content: &'a str,
    pub parent: Option<NodeId>,
    pub topic_name: Option<&'a str>,
    pub created_at_ms: i64,
}

pub(in crate::store) fn note_get_any(
    conn: &Connection,
    id: NodeId,
) -> Result<Option<Note>, StoreError> {
    select_note(conn, "WHERE id=?1", params![id.get()])
}

pub(in crate::store) fn note_get(
    conn: &Connection,
    kind: NoteKind,
    id: NodeId,
) -> Result<Option<Note>, StoreError> {
    select_note(
        conn,
        "WHERE id=?1 AND kind=?2",
        params![id.get(), kind.as_str()],
    )
}

/// Oldest note of `kind` with exactly this content.
pub(in crate::store) fn note_get_by_content(
    conn: &Connection,
    kind: NoteKind,
    content: &str,
) -> Result<Option<Note>, StoreError> {
    select_note(
        conn,
        "WHERE kind=?1 AND content=?2 ORDER BY id ASC LIMIT 1",
        params![kind.as_str(), content],
    )
}

pub(in crate::store) fn note_find(
    conn: &Connection,
    kind: NoteKind,
    lookup: &NodeLookup,
) -> Result<Option<Note>, StoreError> {
    if let Some(id) = lookup.id
        && let Some(note) = note_get(conn, kind, id)?
    {
        return Ok(Some(note));
    }
    match lookup.content.as_deref() {
        Some(content) => note_get_by_content(conn, kind, content),
        None => Ok(None),
    }
}

pub(in crate::store) fn count_children(conn: &Connection, parent: NodeId) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COUNT(1) FROM notes WHERE parent_id=?1 AND kind='thought'",
        params![parent.get()],
        |row| row.get(0),
    )?)
}

pub(in crate::store) fn count_solutions_anchored(
    conn: &Connection,
    parent: NodeId,
) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COUNT(1) FROM notes WHERE parent_id=?1 AND kind='solution'",
        params![parent.get()],
        |row| row.get(0),
    )?)
}

/// Child thoughts plus anchored solutions.
pub(in crate::store) fn count_dependents(
    conn: &Connection,
    parent: NodeId,
) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COUNT(1) FROM notes WHERE parent_id=?1",
        params![parent.get()],
        |row| row.get(0),
    )?)
}

pub(in crate::store) fn note_children(
    conn: &Connection,
    parent: NodeId,
) -> Result<Vec<Note>, StoreError> {
    select_notes(conn, "WHERE parent_id=?1 ORDER BY id ASC", params![parent.get()])
}

pub(in crate::store) fn ensure_parent_thought(
    conn: &Connection,
    parent: Option<NodeId>,
) -> Result<(), StoreError> {
    let Some(parent) = parent else {
        return Ok(());
    };
    match note_get(conn, NoteKind::Thought, parent)? {
        Some(_) => Ok(()),
        None => Err(StoreError::InvalidInput(
            "parent must reference an existing thought",
        )),
    }
}

/// Rejects a parent link that would put `node` among its own ancestors.
pub(in crate::store) fn ensure_no_parent_cycle(
    conn: &Connection,
    node: NodeId,
    new_parent: NodeId,
) -> Result<(), StoreError> {
    let mut seen = BTreeSet::new();
    let mut cursor = Some(new_parent);
    while let Some(current) = cursor {
        if current == node {
            return Err(StoreError::InvalidInput("parent would create a cycle"));
        }
        if !seen.insert(current) {
            return Err(StoreError::InvalidInput("existing parent chain has a cycle"));
        }
        cursor = note_get_any(conn, current)?.and_then(|note| note.parent);
    }
    Ok(())
}

pub(in crate::store) fn insert_note_tx(
    tx: &Transaction<'_>,
    args: NoteInsertTxArgs<'_>,
) -> Result<Note, StoreError> {
    let NoteInsertTxArgs {
        kind,
        content,
        parent,
        topic_name,
        created_at_ms,
    } = args;

    ensure_parent_thought(tx, parent)?;
    let topic_name = normalize_topic_name(topic_name);
    if let Some(name) = topic_name.as_deref() {
        ensure_topic_tx(tx, name, created_at_ms)?;
    }

    let id = next_node_id_tx(tx)?;
    tx.execute(
        "INSERT INTO notes(id, kind, content, parent_id, topic_name, connect_json, created_at_ms) \
         VALUES (?1, ?2, ?3, ?4, ?5, '[]', ?6)",
        params![
            id.get(),
            kind.as_str(),
            content,
            parent.map(NodeId::get),
            topic_name.as_deref(),
            created_at_ms,
        ],
    )?;

    Ok(Note {
        id,
        kind,
        content: content.to_string(),
        parent,
        topic_name,
        connect: BTreeSet::new(),
        created_at_ms,
    })
}

/// Removes a note row and every trace of it: peer links and parent links
/// pointing at it.
pub(in crate::store) fn delete_note_tx(tx: &Transaction<'_>, note: &Note) -> Result<(), StoreError> {
    detach_all_peers_tx(tx, note)?;
    tx.execute(
        "UPDATE notes SET parent_id=NULL WHERE parent_id=?1",
        params![note.id.get()],
    )?;
    tx.execute("DELETE FROM notes WHERE id=?1", params![note.id.get()])?;
    Ok(())
}
