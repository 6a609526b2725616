#![forbid(unsafe_code)]

use super::*;
use bubble_core::{EliminatedNode, EliminationPolicy, NodeLookup, Note, NoteKind};
use rusqlite::Transaction;

impl SqliteStore {
    /// Deletes a leaf and, when the policy allows, every ancestor the deletion
    /// leaves without children or anchored solutions.
    ///
    /// A thought that still has a child thought or an anchored solution is
    /// refused with [`StoreError::HasChildren`] and nothing changes. The report
    /// lists deleted nodes leaf first.
    pub fn delete_and_cascade(
        &mut self,
        kind: NoteKind,
        lookup: &NodeLookup,
        policy: EliminationPolicy,
    ) -> Result<CascadeOutcome, StoreError> {
        let tx = self.conn.transaction()?;
        let Some(target) = note_find(&tx, kind, lookup)? else {
            return Err(StoreError::NotFound);
        };

        if target.kind == NoteKind::Thought {
            let children = count_dependents(&tx, target.id)?;
            if children > 0 {
                return Err(StoreError::HasChildren {
                    id: target.id,
                    children,
                });
            }
        }

        let target_id = target.id;
        let deleted = eliminate_chain_tx(&tx, target, policy)?;
        tx.commit()?;

        tracing::info!(
            target = target_id.get(),
            deleted = deleted.len(),
            auto_eliminate = policy.auto_eliminate,
            "cascade finished"
        );
        Ok(CascadeOutcome {
            target: target_id,
            deleted,
        })
    }
}

/// Deletes `first` unconditionally, then climbs parent links while the policy
/// allows and each parent is left empty.
///
/// Every step removes one node, so the walk ends within the depth of the tree.
pub(super) fn eliminate_chain_tx(
    tx: &Transaction<'_>,
    first: Note,
    policy: EliminationPolicy,
) -> Result<Vec<EliminatedNode>, StoreError> {
    let mut deleted = Vec::new();
    let mut current = first;

    loop {
        let parent_id = current.parent;
        delete_note_tx(tx, &current)?;
        tracing::debug!(id = current.id.get(), kind = %current.kind, "node eliminated");
        deleted.push(current.to_eliminated());

        if !policy.auto_eliminate {
            break;
        }
        let Some(parent_id) = parent_id else {
            break;
        };
        let Some(parent) = note_get(tx, NoteKind::Thought, parent_id)? else {
            break;
        };
        if !is_eliminable(tx, &parent)? {
            break;
        }
        current = parent;
    }

    Ok(deleted)
}

/// No child thought and no anchored solution.
pub(super) fn is_eliminable(tx: &Transaction<'_>, thought: &Note) -> Result<bool, StoreError> {
    Ok(count_dependents(tx, thought.id)? == 0)
}
