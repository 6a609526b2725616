#![forbid(unsafe_code)]

use crate::*;
use bubble_storage::{CreateNoteRequest, NoteUpdate};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_node_create(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let request = CreateNoteRequest {
            kind: require_note_kind(&args, "kind")?,
            content: require_string(&args, "content")?,
            parent: optional_node_id(&args, "parent")?,
            topic_name: optional_string(&args, "topic_name")?,
            connect: optional_node_ids(&args, "connect")?,
            created_at_ms: optional_i64(&args, "created_at_ms")?,
        };

        let note = self.store.note_create(request).map_err(store_error)?;
        Ok(ai_ok("node_create", json!({ "node": note_json(&note) })))
    }

    pub(crate) fn tool_node_get(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let lookup = node_lookup(&args)?;

        let Some(note) = self.store.note_find(kind, &lookup).map_err(store_error)? else {
            return Err(store_error(bubble_storage::StoreError::NotFound));
        };
        Ok(ai_ok("node_get", json!({ "node": note_json(&note) })))
    }

    pub(crate) fn tool_node_update(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let id = require_node_id(&args, "id")?;
        let update = NoteUpdate {
            content: optional_string(&args, "content")?,
            parent: optional_nullable_node_id(&args, "parent")?,
            topic_name: optional_nullable_string(&args, "topic_name")?,
        };
        if update.is_empty() {
            return Err(ai_error(
                "INVALID_INPUT",
                "nothing to update: pass content, parent or topic_name",
            ));
        }

        let note = self
            .store
            .note_update(kind, id, update)
            .map_err(store_error)?;
        Ok(ai_ok("node_update", json!({ "node": note_json(&note) })))
    }

    pub(crate) fn tool_node_delete(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let id = require_node_id(&args, "id")?;

        let deleted = self.store.note_delete(kind, id).map_err(store_error)?;
        Ok(ai_ok(
            "node_delete",
            json!({ "id": id.get(), "deleted": deleted }),
        ))
    }

    pub(crate) fn tool_node_list(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let topic_name = optional_string(&args, "topic_name")?;

        let notes = self
            .store
            .note_list(kind, topic_name.as_deref())
            .map_err(store_error)?;
        Ok(ai_ok(
            "node_list",
            json!({ "count": notes.len(), "nodes": notes_json(&notes) }),
        ))
    }

    pub(crate) fn tool_node_children(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let id = require_node_id(&args, "id")?;

        let children = self.store.note_children(id).map_err(store_error)?;
        let thoughts = self.store.count_children(id).map_err(store_error)?;
        let solutions = self
            .store
            .count_solutions_anchored(id)
            .map_err(store_error)?;
        Ok(ai_ok(
            "node_children",
            json!({
                "id": id.get(),
                "child_thoughts": thoughts,
                "anchored_solutions": solutions,
                "children": notes_json(&children),
            }),
        ))
    }

    pub(crate) fn tool_latest_leaf(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let topic_name = optional_string(&args, "topic_name")?;

        let leaf = self
            .store
            .latest_leaf_thought(topic_name.as_deref())
            .map_err(store_error)?;
        let mut warnings = Vec::new();
        if leaf.is_none() {
            warnings.push(json!("no leaf thought yet"));
        }
        Ok(ai_ok_with_warnings(
            "latest_leaf",
            json!({ "node": leaf.as_ref().map(note_json) }),
            warnings,
        ))
    }
}
