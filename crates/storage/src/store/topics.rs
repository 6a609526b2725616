#![forbid(unsafe_code)]

use super::*;
use bubble_core::{Topic, normalize_topic_name};

impl SqliteStore {
    /// Get-or-create. Blank names yield `None` and create nothing.
    pub fn ensure_topic(&mut self, name: &str) -> Result<Option<Topic>, StoreError> {
        let Some(name) = normalize_topic_name(Some(name)) else {
            return Ok(None);
        };
        let tx = self.conn.transaction()?;
        let topic = ensure_topic_tx(&tx, &name, now_ms())?;
        tx.commit()?;
        Ok(Some(topic))
    }

    pub fn topic_get(&self, name: &str) -> Result<Option<Topic>, StoreError> {
        match normalize_topic_name(Some(name)) {
            Some(name) => topic_get_by_name(&self.conn, &name),
            None => Ok(None),
        }
    }

    pub fn topic_list(&self) -> Result<Vec<Topic>, StoreError> {
        topic_list_all(&self.conn)
    }
}
