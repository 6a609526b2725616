#![forbid(unsafe_code)]

use bubble_storage::StoreError;
use serde_json::{Value, json};

pub(crate) fn ai_ok_with_warnings(intent: &str, result: Value, warnings: Vec<Value>) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": warnings,
        "error": null
    })
}

pub(crate) fn ai_ok(intent: &str, result: Value) -> Value {
    ai_ok_with_warnings(intent, result, Vec::new())
}

pub(crate) fn ai_error_with(code: &str, message: &str, recovery: Option<&str>) -> Value {
    let mut error_obj = serde_json::Map::new();
    error_obj.insert("code".to_string(), Value::String(code.to_string()));
    error_obj.insert(
        "message".to_string(),
        Value::String(message.trim().to_string()),
    );
    if let Some(recovery) = recovery {
        error_obj.insert(
            "recovery".to_string(),
            Value::String(recovery.trim().to_string()),
        );
    }

    json!({
        "success": false,
        "intent": "error",
        "result": {},
        "warnings": [],
        "error": Value::Object(error_obj)
    })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    ai_error_with(code, message, None)
}

pub(crate) fn format_store_error(err: &StoreError) -> String {
    match err {
        StoreError::Io(e) => format!("IO: {e}"),
        StoreError::Sql(e) => format!("SQL: {e}"),
        StoreError::Json(e) => format!("JSON: {e}"),
        StoreError::InvalidInput(msg) => format!("Invalid input: {msg}"),
        StoreError::InvalidKind(e) => format!("Invalid kind: {e}"),
        StoreError::NotFound => "Node not found".to_string(),
        StoreError::HasChildren { id, children } => {
            format!("Node {id} has {children} child thought(s) or anchored solution(s)")
        }
    }
}

/// Tool payload for a failed store call.
pub(crate) fn store_error(err: StoreError) -> Value {
    let message = format_store_error(&err);
    match err {
        StoreError::NotFound => ai_error_with(
            "NOT_FOUND",
            &message,
            Some("Check the kind and id; use node_list to see what exists."),
        ),
        StoreError::HasChildren { .. } => ai_error_with(
            "HAS_CHILDREN",
            &message,
            Some("Only leaves can be eliminated. Remove the children first or use node_delete."),
        ),
        StoreError::InvalidKind(_) => ai_error("INVALID_KIND", &message),
        StoreError::InvalidInput(_) => ai_error("INVALID_INPUT", &message),
        StoreError::Io(_) | StoreError::Sql(_) | StoreError::Json(_) => {
            ai_error("STORE_ERROR", &message)
        }
    }
}
