#![forbid(unsafe_code)]

use crate::*;
use serde_json::{Value, json};

#[derive(Clone, Copy)]
enum ConnectOp {
    Add,
    Remove,
}

impl McpServer {
    pub(crate) fn tool_eliminate(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let lookup = node_lookup(&args)?;
        let policy = self.policy();

        let outcome = self
            .store
            .delete_and_cascade(kind, &lookup, policy)
            .map_err(store_error)?;
        Ok(ai_ok(
            "eliminate",
            json!({
                "target": outcome.target.get(),
                "auto_eliminate": policy.auto_eliminate,
                "deleted": eliminated_json(&outcome.deleted),
            }),
        ))
    }

    pub(crate) fn tool_archive(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let lookup = node_lookup(&args)?;
        let policy = self.policy();

        let outcome = self
            .store
            .archive_solution(&lookup, policy)
            .map_err(store_error)?;
        let mut warnings = Vec::new();
        if outcome.previous_parent.is_none() {
            warnings.push(json!("solution was already detached"));
        }
        Ok(ai_ok_with_warnings(
            "archive",
            json!({
                "solution": note_json(&outcome.solution),
                "previous_parent": outcome.previous_parent.map(|id| id.get()),
                "auto_eliminate": policy.auto_eliminate,
                "eliminated": eliminated_json(&outcome.eliminated),
            }),
            warnings,
        ))
    }

    pub(crate) fn tool_connect_add(&mut self, args: Value) -> Result<Value, Value> {
        self.connect_change("connect_add", args, ConnectOp::Add)
    }

    pub(crate) fn tool_connect_remove(&mut self, args: Value) -> Result<Value, Value> {
        self.connect_change("connect_remove", args, ConnectOp::Remove)
    }

    fn connect_change(&mut self, intent: &str, args: Value, op: ConnectOp) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let id = require_node_id(&args, "id")?;
        let peers = optional_node_ids(&args, "peers")?;
        if peers.is_empty() {
            return Err(ai_error("INVALID_INPUT", "peers must list at least one id"));
        }

        let note = match op {
            ConnectOp::Add => self.store.connect_add(kind, id, &peers),
            ConnectOp::Remove => self.store.connect_remove(kind, id, &peers),
        }
        .map_err(store_error)?;
        Ok(ai_ok(intent, json!({ "node": note_json(&note) })))
    }

    pub(crate) fn tool_connect_peers(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let kind = require_note_kind(&args, "kind")?;
        let id = require_node_id(&args, "id")?;

        let peers = self.store.connect_peers(kind, id).map_err(store_error)?;
        Ok(ai_ok(
            "connect_peers",
            json!({ "id": id.get(), "peers": notes_json(&peers) }),
        ))
    }

    pub(crate) fn tool_retype(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let id = require_node_id(&args, "id")?;
        let new_kind = require_node_kind(&args, "new_kind")?;
        let new_content = require_string(&args, "new_content")?;

        let retyped = self
            .store
            .retype(id, new_kind, &new_content)
            .map_err(store_error)?;
        let replaced = retyped.id() != id;
        Ok(ai_ok(
            "retype",
            json!({
                "previous_id": id.get(),
                "kind": retyped.kind().as_str(),
                "replaced": replaced,
                "node": retyped_json(&retyped),
            }),
        ))
    }
}
