#![forbid(unsafe_code)]

use crate::*;
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_topic_ensure(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let name = require_string(&args, "name")?;

        let Some(topic) = self.store.ensure_topic(&name).map_err(store_error)? else {
            return Err(ai_error("INVALID_INPUT", "name must not be blank"));
        };
        Ok(ai_ok("topic_ensure", json!({ "topic": topic_json(&topic) })))
    }

    pub(crate) fn tool_topic_list(&mut self, args: Value) -> Result<Value, Value> {
        args_object(args)?;
        let topics = self.store.topic_list().map_err(store_error)?;
        Ok(ai_ok(
            "topic_list",
            json!({
                "count": topics.len(),
                "topics": topics.iter().map(topic_json).collect::<Vec<_>>(),
            }),
        ))
    }

    pub(crate) fn tool_auto_eliminate_get(&mut self, args: Value) -> Result<Value, Value> {
        args_object(args)?;
        Ok(ai_ok(
            "auto_eliminate_get",
            json!({ "enabled": self.auto_eliminate().get() }),
        ))
    }

    pub(crate) fn tool_auto_eliminate_set(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        let enabled = require_bool(&args, "enabled")?;

        let previous = self.auto_eliminate().set(enabled);
        tracing::info!(enabled, previous, "auto-eliminate switched");
        Ok(ai_ok(
            "auto_eliminate_set",
            json!({ "enabled": enabled, "previous": previous }),
        ))
    }

    pub(crate) fn tool_reset(&mut self, args: Value) -> Result<Value, Value> {
        let args = args_object(args)?;
        if !require_bool(&args, "confirm")? {
            return Err(ai_error_with(
                "INVALID_INPUT",
                "reset needs confirm=true",
                Some("Pass {\"confirm\": true} to wipe every node and topic."),
            ));
        }

        self.reset_store().map_err(store_error)?;
        Ok(ai_ok("reset", json!({ "reset": true })))
    }
}
