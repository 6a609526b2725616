#![forbid(unsafe_code)]

use super::eliminate::{eliminate_chain_tx, is_eliminable};
use super::*;
use bubble_core::{EliminationPolicy, NodeLookup, NoteKind};

impl SqliteStore {
    /// Detaches a solution from its thought without deleting it, then lets the
    /// vacated thought chain collapse under the same rule as a delete.
    pub fn archive_solution(
        &mut self,
        lookup: &NodeLookup,
        policy: EliminationPolicy,
    ) -> Result<ArchiveOutcome, StoreError> {
        let tx = self.conn.transaction()?;
        let Some(mut solution) = note_find(&tx, NoteKind::Solution, lookup)? else {
            return Err(StoreError::NotFound);
        };

        let previous_parent = solution.parent.take();
        let mut eliminated = Vec::new();

        if let Some(parent_id) = previous_parent {
            tx.execute(
                "UPDATE notes SET parent_id=NULL WHERE id=?1",
                params![solution.id.get()],
            )?;

            if policy.auto_eliminate
                && let Some(parent) = note_get(&tx, NoteKind::Thought, parent_id)?
                && is_eliminable(&tx, &parent)?
            {
                eliminated = eliminate_chain_tx(&tx, parent, policy)?;
                // An eliminated ancestor may have been one of its peers.
                solution = note_get(&tx, NoteKind::Solution, solution.id)?
                    .ok_or(StoreError::NotFound)?;
            }
        }
        tx.commit()?;

        tracing::info!(
            id = solution.id.get(),
            previous_parent = ?previous_parent.map(|id| id.get()),
            eliminated = eliminated.len(),
            "solution archived"
        );
        Ok(ArchiveOutcome {
            solution,
            previous_parent,
            eliminated,
        })
    }
}
