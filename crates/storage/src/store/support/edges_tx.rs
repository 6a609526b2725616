#![forbid(unsafe_code)]

use super::super::StoreError;
use super::note_tx::note_get_any;
use super::rows::encode_connect;
use bubble_core::{NodeId, Note};
use rusqlite::{Transaction, params};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::store) enum EdgeChange {
    Link,
    Unlink,
}

impl EdgeChange {
    pub(in crate::store) fn as_str(self) -> &'static str {
        match self {
            EdgeChange::Link => "link",
            EdgeChange::Unlink => "unlink",
        }
    }
}

fn write_connect_tx(
    tx: &Transaction<'_>,
    id: NodeId,
    connect: &BTreeSet<NodeId>,
) -> Result<(), StoreError> {
    tx.execute(
        "UPDATE notes SET connect_json=?2 WHERE id=?1",
        params![id.get(), encode_connect(connect)?],
    )?;
    Ok(())
}

/// The only write path into the connect overlay: every edge change lands on
/// both endpoints inside the caller's transaction.
///
/// Unknown peers and self-references are skipped. Unlinking an unknown peer
/// still drops the stale id from `node`.
pub(in crate::store) fn update_edges_tx(
    tx: &Transaction<'_>,
    mut node: Note,
    peers: &[NodeId],
    change: EdgeChange,
) -> Result<Note, StoreError> {
    let peers = peers.iter().copied().collect::<BTreeSet<_>>();
    let mut node_changed = false;

    for peer_id in peers {
        if peer_id == node.id {
            continue;
        }
        let peer = note_get_any(tx, peer_id)?;
        match change {
            EdgeChange::Link => {
                let Some(mut peer) = peer else {
                    continue;
                };
                if peer.connect.insert(node.id) {
                    write_connect_tx(tx, peer.id, &peer.connect)?;
                }
                node_changed |= node.connect.insert(peer_id);
            }
            EdgeChange::Unlink => {
                if let Some(mut peer) = peer
                    && peer.connect.remove(&node.id)
                {
                    write_connect_tx(tx, peer.id, &peer.connect)?;
                }
                node_changed |= node.connect.remove(&peer_id);
            }
        }
    }

    if node_changed {
        write_connect_tx(tx, node.id, &node.connect)?;
    }
    Ok(node)
}

/// Drops `note` from every peer's set. The caller removes `note` itself.
pub(in crate::store) fn detach_all_peers_tx(
    tx: &Transaction<'_>,
    note: &Note,
) -> Result<(), StoreError> {
    for peer_id in note.connect.iter().copied() {
        let Some(mut peer) = note_get_any(tx, peer_id)? else {
            continue;
        };
        if peer.connect.remove(&note.id) {
            write_connect_tx(tx, peer.id, &peer.connect)?;
        }
    }
    Ok(())
}

/// Moves every edge of `old` onto `replacement` (used when a note is
/// recreated under another kind).
pub(in crate::store) fn transfer_edges_tx(
    tx: &Transaction<'_>,
    old: &Note,
    mut replacement: Note,
) -> Result<Note, StoreError> {
    for peer_id in old.connect.iter().copied() {
        if peer_id == replacement.id {
            continue;
        }
        let Some(mut peer) = note_get_any(tx, peer_id)? else {
            continue;
        };
        peer.connect.remove(&old.id);
        peer.connect.insert(replacement.id);
        write_connect_tx(tx, peer.id, &peer.connect)?;
        replacement.connect.insert(peer_id);
    }
    write_connect_tx(tx, replacement.id, &replacement.connect)?;
    Ok(replacement)
}
