#![forbid(unsafe_code)]

use super::*;
use bubble_core::{NodeId, NodeLookup, Note, NoteKind, normalize_topic_name};

impl SqliteStore {
    pub fn note_create(&mut self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        let created_at_ms = request.created_at_ms.unwrap_or_else(now_ms);

        let tx = self.conn.transaction()?;
        let note = insert_note_tx(
            &tx,
            NoteInsertTxArgs {
                kind: request.kind,
                content: &request.content,
                parent: request.parent,
                topic_name: request.topic_name.as_deref(),
                created_at_ms,
            },
        )?;
        let note = if request.connect.is_empty() {
            note
        } else {
            update_edges_tx(&tx, note, &request.connect, EdgeChange::Link)?
        };
        tx.commit()?;

        tracing::debug!(id = note.id.get(), kind = %note.kind, parent = ?note.parent.map(NodeId::get), "note created");
        Ok(note)
    }

    pub fn note_get(&self, kind: NoteKind, id: NodeId) -> Result<Option<Note>, StoreError> {
        note_get(&self.conn, kind, id)
    }

    /// Id first, then content (oldest match).
    pub fn note_find(
        &self,
        kind: NoteKind,
        lookup: &NodeLookup,
    ) -> Result<Option<Note>, StoreError> {
        note_find(&self.conn, kind, lookup)
    }

    pub fn note_update(
        &mut self,
        kind: NoteKind,
        id: NodeId,
        update: NoteUpdate,
    ) -> Result<Note, StoreError> {
        let tx = self.conn.transaction()?;
        let Some(mut note) = note_get(&tx, kind, id)? else {
            return Err(StoreError::NotFound);
        };

        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(parent) = update.parent {
            if let Some(parent_id) = parent {
                ensure_parent_thought(&tx, Some(parent_id))?;
                ensure_no_parent_cycle(&tx, note.id, parent_id)?;
            }
            note.parent = parent;
        }
        if let Some(topic_name) = update.topic_name {
            let topic_name = normalize_topic_name(topic_name.as_deref());
            if let Some(name) = topic_name.as_deref() {
                ensure_topic_tx(&tx, name, now_ms())?;
            }
            note.topic_name = topic_name;
        }

        tx.execute(
            "UPDATE notes SET content=?2, parent_id=?3, topic_name=?4 WHERE id=?1",
            rusqlite::params![
                note.id.get(),
                note.content,
                note.parent.map(NodeId::get),
                note.topic_name.as_deref(),
            ],
        )?;
        tx.commit()?;

        tracing::debug!(id = note.id.get(), kind = %note.kind, "note updated");
        Ok(note)
    }

    /// Plain delete: no leaf check and no cascade. Children become roots and
    /// peers lose their edge to the deleted note.
    pub fn note_delete(&mut self, kind: NoteKind, id: NodeId) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let Some(note) = note_get(&tx, kind, id)? else {
            return Ok(false);
        };
        delete_note_tx(&tx, &note)?;
        tx.commit()?;

        tracing::debug!(id = id.get(), kind = %kind, "note deleted");
        Ok(true)
    }

    /// Child thoughts of `thought_id`.
    pub fn count_children(&self, thought_id: NodeId) -> Result<i64, StoreError> {
        count_children(&self.conn, thought_id)
    }

    pub fn count_solutions_anchored(&self, thought_id: NodeId) -> Result<i64, StoreError> {
        count_solutions_anchored(&self.conn, thought_id)
    }

    /// Child thoughts and anchored solutions, oldest first.
    pub fn note_children(&self, thought_id: NodeId) -> Result<Vec<Note>, StoreError> {
        note_children(&self.conn, thought_id)
    }

    pub fn note_list(
        &self,
        kind: NoteKind,
        topic_name: Option<&str>,
    ) -> Result<Vec<Note>, StoreError> {
        match normalize_topic_name(topic_name) {
            Some(topic) => select_notes(
                &self.conn,
                "WHERE kind=?1 AND topic_name=?2 ORDER BY id ASC",
                rusqlite::params![kind.as_str(), topic],
            ),
            None => select_notes(
                &self.conn,
                "WHERE kind=?1 ORDER BY id ASC",
                rusqlite::params![kind.as_str()],
            ),
        }
    }

    /// Newest thought that has no child thought, optionally within a topic.
    pub fn latest_leaf_thought(&self, topic_name: Option<&str>) -> Result<Option<Note>, StoreError> {
        const LEAF: &str = "NOT EXISTS (SELECT 1 FROM notes c WHERE c.parent_id = notes.id AND c.kind='thought')";
        let found = match normalize_topic_name(topic_name) {
            Some(topic) => select_notes(
                &self.conn,
                &format!(
                    "WHERE kind='thought' AND topic_name=?1 AND {LEAF} ORDER BY created_at_ms DESC, id DESC LIMIT 1"
                ),
                rusqlite::params![topic],
            )?,
            None => select_notes(
                &self.conn,
                &format!("WHERE kind='thought' AND {LEAF} ORDER BY created_at_ms DESC, id DESC LIMIT 1"),
                [],
            )?,
        };
        Ok(found.into_iter().next())
    }
}
