#![forbid(unsafe_code)]

use super::*;
use bubble_core::{NodeId, NodeKind, Note, NoteKind, Retyped, Topic, normalize_topic_name};
use rusqlite::Transaction;

enum RetypeSource {
    Note(Note),
    Topic(Topic),
}

impl SqliteStore {
    /// Recreates the record holding `node_id` under `new_kind`.
    ///
    /// Notes changing kind keep parent, topic, creation time and peers; the
    /// replacement gets a fresh id. A note with children cannot leave the
    /// thought kind. A topic turned into a note becomes a root note filed
    /// under the topic named `new_content`; when that name matches the old
    /// topic, the topic row and its id are kept.
    pub fn retype(
        &mut self,
        node_id: NodeId,
        new_kind: NodeKind,
        new_content: &str,
    ) -> Result<Retyped, StoreError> {
        let tx = self.conn.transaction()?;
        let source = match note_get_any(&tx, node_id)? {
            Some(note) => RetypeSource::Note(note),
            None => match topic_get_by_id(&tx, node_id)? {
                Some(topic) => RetypeSource::Topic(topic),
                None => return Err(StoreError::NotFound),
            },
        };

        let out = match (source, new_kind) {
            (RetypeSource::Note(note), NodeKind::Thought | NodeKind::Solution) => {
                let target = new_kind.as_note()?;
                if note.kind == target {
                    Retyped::Note(replace_content_tx(&tx, note, new_content)?)
                } else {
                    Retyped::Note(note_to_note_tx(&tx, note, target, new_content)?)
                }
            }
            (RetypeSource::Note(note), NodeKind::Topic) => {
                Retyped::Topic(note_to_topic_tx(&tx, note, new_content)?)
            }
            (RetypeSource::Topic(_), NodeKind::Topic) => {
                return Err(StoreError::InvalidInput("topics cannot be renamed"));
            }
            (RetypeSource::Topic(topic), NodeKind::Thought | NodeKind::Solution) => {
                let target = new_kind.as_note()?;
                Retyped::Note(topic_to_note_tx(&tx, topic, target, new_content)?)
            }
        };
        tx.commit()?;

        tracing::info!(
            from = node_id.get(),
            to = out.id().get(),
            kind = %out.kind(),
            "node retyped"
        );
        Ok(out)
    }
}

fn ensure_leaf(tx: &Transaction<'_>, note: &Note) -> Result<(), StoreError> {
    if note.kind != NoteKind::Thought {
        return Ok(());
    }
    let children = count_dependents(tx, note.id)?;
    if children > 0 {
        return Err(StoreError::HasChildren {
            id: note.id,
            children,
        });
    }
    Ok(())
}

fn replace_content_tx(
    tx: &Transaction<'_>,
    mut note: Note,
    new_content: &str,
) -> Result<Note, StoreError> {
    tx.execute(
        "UPDATE notes SET content=?2 WHERE id=?1",
        params![note.id.get(), new_content],
    )?;
    note.content = new_content.to_string();
    Ok(note)
}

fn note_to_note_tx(
    tx: &Transaction<'_>,
    note: Note,
    target: NoteKind,
    new_content: &str,
) -> Result<Note, StoreError> {
    ensure_leaf(tx, &note)?;

    let replacement = insert_note_tx(
        tx,
        NoteInsertTxArgs {
            kind: target,
            content: new_content,
            parent: note.parent,
            topic_name: note.topic_name.as_deref(),
            created_at_ms: note.created_at_ms,
        },
    )?;
    let replacement = transfer_edges_tx(tx, &note, replacement)?;
    tx.execute("DELETE FROM notes WHERE id=?1", params![note.id.get()])?;
    Ok(replacement)
}

fn note_to_topic_tx(
    tx: &Transaction<'_>,
    note: Note,
    new_content: &str,
) -> Result<Topic, StoreError> {
    let Some(name) = normalize_topic_name(Some(new_content)) else {
        return Err(StoreError::InvalidInput("topic name must not be empty"));
    };
    ensure_leaf(tx, &note)?;

    let topic = ensure_topic_tx(tx, &name, now_ms())?;
    delete_note_tx(tx, &note)?;
    Ok(topic)
}

fn topic_to_note_tx(
    tx: &Transaction<'_>,
    topic: Topic,
    target: NoteKind,
    new_content: &str,
) -> Result<Note, StoreError> {
    // A note filed under the same name keeps the existing topic row.
    if normalize_topic_name(Some(new_content)).as_deref() != Some(topic.name.as_str()) {
        delete_topic_tx(tx, topic.id)?;
    }
    insert_note_tx(
        tx,
        NoteInsertTxArgs {
            kind: target,
            content: new_content,
            parent: None,
            topic_name: Some(new_content),
            created_at_ms: now_ms(),
        },
    )
}
