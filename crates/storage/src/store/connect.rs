#![forbid(unsafe_code)]

use super::*;
use bubble_core::{NodeId, Note, NoteKind};

impl SqliteStore {
    /// Links `node_id` with each existing peer, on both sides.
    pub fn connect_add(
        &mut self,
        kind: NoteKind,
        node_id: NodeId,
        peers: &[NodeId],
    ) -> Result<Note, StoreError> {
        self.connect_change(kind, node_id, peers, EdgeChange::Link)
    }

    pub fn connect_remove(
        &mut self,
        kind: NoteKind,
        node_id: NodeId,
        peers: &[NodeId],
    ) -> Result<Note, StoreError> {
        self.connect_change(kind, node_id, peers, EdgeChange::Unlink)
    }

    /// Resolves the stored peer ids; ids that no longer resolve are omitted.
    pub fn connect_peers(&self, kind: NoteKind, node_id: NodeId) -> Result<Vec<Note>, StoreError> {
        let Some(note) = note_get(&self.conn, kind, node_id)? else {
            return Err(StoreError::NotFound);
        };
        let mut out = Vec::with_capacity(note.connect.len());
        for peer_id in note.connect.iter().copied() {
            if let Some(peer) = note_get_any(&self.conn, peer_id)? {
                out.push(peer);
            }
        }
        Ok(out)
    }

    fn connect_change(
        &mut self,
        kind: NoteKind,
        node_id: NodeId,
        peers: &[NodeId],
        change: EdgeChange,
    ) -> Result<Note, StoreError> {
        let tx = self.conn.transaction()?;
        let Some(note) = note_get(&tx, kind, node_id)? else {
            return Err(StoreError::NotFound);
        };
        let note = update_edges_tx(&tx, note, peers, change)?;
        tx.commit()?;

        tracing::debug!(
            id = node_id.get(),
            change = change.as_str(),
            peers = peers.len(),
            degree = note.connect.len(),
            "connect overlay updated"
        );
        Ok(note)
    }
}
