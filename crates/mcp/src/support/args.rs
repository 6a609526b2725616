#![forbid(unsafe_code)]

use super::ai::ai_error;
use bubble_core::{NodeId, NodeKind, NodeLookup, NoteKind};
use serde_json::{Map, Value};

pub(crate) type Args = Map<String, Value>;

pub(crate) fn args_object(args: Value) -> Result<Args, Value> {
    match args {
        Value::Object(obj) => Ok(obj),
        _ => Err(ai_error("INVALID_INPUT", "arguments must be an object")),
    }
}

pub(crate) fn require_string(args: &Args, key: &str) -> Result<String, Value> {
    let Some(v) = args.get(key).and_then(|v| v.as_str()) else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} is required")));
    };
    Ok(v.to_string())
}

pub(crate) fn optional_string(args: &Args, key: &str) -> Result<Option<String>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

/// Absent key: `None`. Explicit null: `Some(None)`.
pub(crate) fn optional_nullable_string(
    args: &Args,
    key: &str,
) -> Result<Option<Option<String>>, Value> {
    match args.get(key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(v)) => Ok(Some(Some(v.to_string()))),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string or null"),
        )),
    }
}

pub(crate) fn require_bool(args: &Args, key: &str) -> Result<bool, Value> {
    match args.get(key) {
        Some(Value::Bool(v)) => Ok(*v),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a boolean"),
        )),
        None => Err(ai_error("INVALID_INPUT", &format!("{key} is required"))),
    }
}

pub(crate) fn optional_i64(args: &Args, key: &str) -> Result<Option<i64>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be an integer"),
        )),
    }
}

fn node_id_value(key: &str, value: &Value) -> Result<NodeId, Value> {
    let parsed = match value {
        Value::Number(n) => match n.as_i64() {
            Some(raw) => NodeId::try_new(raw),
            None => return Err(ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
        },
        Value::String(raw) => NodeId::parse(raw),
        _ => {
            return Err(ai_error(
                "INVALID_INPUT",
                &format!("{key} must be a node id"),
            ));
        }
    };
    parsed.map_err(|err| ai_error("INVALID_INPUT", &format!("{key}: {}", err.message())))
}

pub(crate) fn require_node_id(args: &Args, key: &str) -> Result<NodeId, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Err(ai_error("INVALID_INPUT", &format!("{key} is required"))),
        Some(value) => node_id_value(key, value),
    }
}

pub(crate) fn optional_node_id(args: &Args, key: &str) -> Result<Option<NodeId>, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => node_id_value(key, value).map(Some),
    }
}

/// Absent key: `None`. Explicit null: `Some(None)`.
pub(crate) fn optional_nullable_node_id(
    args: &Args,
    key: &str,
) -> Result<Option<Option<NodeId>>, Value> {
    match args.get(key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(value) => node_id_value(key, value).map(|id| Some(Some(id))),
    }
}

pub(crate) fn optional_node_ids(args: &Args, key: &str) -> Result<Vec<NodeId>, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(|v| node_id_value(key, v)).collect(),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be an array of node ids"),
        )),
    }
}

pub(crate) fn require_node_kind(args: &Args, key: &str) -> Result<NodeKind, Value> {
    let raw = require_string(args, key)?;
    NodeKind::parse(&raw).map_err(|err| ai_error("INVALID_KIND", &err.to_string()))
}

pub(crate) fn require_note_kind(args: &Args, key: &str) -> Result<NoteKind, Value> {
    require_node_kind(args, key)?
        .as_note()
        .map_err(|err| ai_error("INVALID_KIND", &err.to_string()))
}

/// `id` and/or `content`; at least one is required.
pub(crate) fn node_lookup(args: &Args) -> Result<NodeLookup, Value> {
    let lookup = NodeLookup {
        id: optional_node_id(args, "id")?,
        content: optional_string(args, "content")?,
    };
    if lookup.is_empty() {
        return Err(ai_error("INVALID_INPUT", "id or content is required"));
    }
    Ok(lookup)
}
