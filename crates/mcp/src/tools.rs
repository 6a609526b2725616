#![forbid(unsafe_code)]

use serde_json::{Value, json};

fn note_kind_schema() -> Value {
    json!({ "type": "string", "enum": ["thought", "solution"] })
}

fn node_id_schema(description: &str) -> Value {
    json!({ "type": ["integer", "string"], "description": description })
}

fn lookup_properties() -> Value {
    json!({
        "kind": note_kind_schema(),
        "id": node_id_schema("Node id; wins over content when it resolves."),
        "content": { "type": "string", "description": "Fallback: oldest node with exactly this content." }
    })
}

pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "node_create",
            "description": "Create a thought or solution, optionally under a parent thought, in a topic, and connected to peers.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "content": { "type": "string" },
                    "parent": node_id_schema("Existing thought id."),
                    "topic_name": { "type": "string" },
                    "connect": { "type": "array", "items": { "type": ["integer", "string"] } },
                    "created_at_ms": { "type": "integer" }
                },
                "required": ["kind", "content"]
            }
        }),
        json!({
            "name": "node_get",
            "description": "Fetch one thought or solution by id or content.",
            "inputSchema": {
                "type": "object",
                "properties": lookup_properties(),
                "required": ["kind"]
            }
        }),
        json!({
            "name": "node_update",
            "description": "Patch content, parent or topic_name of a node. Null clears parent/topic_name.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "id": node_id_schema("Node to update."),
                    "content": { "type": "string" },
                    "parent": { "type": ["integer", "string", "null"] },
                    "topic_name": { "type": ["string", "null"] }
                },
                "required": ["kind", "id"]
            }
        }),
        json!({
            "name": "node_delete",
            "description": "Delete one node without any checks or cascade. Children become roots.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "id": node_id_schema("Node to delete.")
                },
                "required": ["kind", "id"]
            }
        }),
        json!({
            "name": "node_list",
            "description": "List thoughts or solutions, optionally within one topic.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "topic_name": { "type": "string" }
                },
                "required": ["kind"]
            }
        }),
        json!({
            "name": "node_children",
            "description": "Child thoughts and anchored solutions of a thought, with counts.",
            "inputSchema": {
                "type": "object",
                "properties": { "id": node_id_schema("Thought id.") },
                "required": ["id"]
            }
        }),
        json!({
            "name": "latest_leaf",
            "description": "Most recent thought without child thoughts, optionally within one topic.",
            "inputSchema": {
                "type": "object",
                "properties": { "topic_name": { "type": "string" } }
            }
        }),
        json!({
            "name": "eliminate",
            "description": "Delete a leaf node and, when auto-eliminate is on, every ancestor left empty. Returns deleted nodes leaf first.",
            "inputSchema": {
                "type": "object",
                "properties": lookup_properties(),
                "required": ["kind"]
            }
        }),
        json!({
            "name": "archive",
            "description": "Detach a solution from its thought without deleting it; the vacated chain may collapse.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": node_id_schema("Solution id."),
                    "content": { "type": "string" }
                }
            }
        }),
        json!({
            "name": "connect_add",
            "description": "Link a node with peers on both sides. Unknown peers are skipped.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "id": node_id_schema("Node to link."),
                    "peers": { "type": "array", "items": { "type": ["integer", "string"] } }
                },
                "required": ["kind", "id", "peers"]
            }
        }),
        json!({
            "name": "connect_remove",
            "description": "Unlink a node from peers on both sides.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "id": node_id_schema("Node to unlink."),
                    "peers": { "type": "array", "items": { "type": ["integer", "string"] } }
                },
                "required": ["kind", "id", "peers"]
            }
        }),
        json!({
            "name": "connect_peers",
            "description": "Resolve the peers of a node to full records.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "kind": note_kind_schema(),
                    "id": node_id_schema("Node id.")
                },
                "required": ["kind", "id"]
            }
        }),
        json!({
            "name": "retype",
            "description": "Recreate a thought, solution or topic under another kind with new content.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": node_id_schema("Record to retype."),
                    "new_kind": { "type": "string", "enum": ["thought", "solution", "topic"] },
                    "new_content": { "type": "string" }
                },
                "required": ["id", "new_kind", "new_content"]
            }
        }),
        json!({
            "name": "topic_ensure",
            "description": "Get or create a topic by name.",
            "inputSchema": {
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            }
        }),
        json!({
            "name": "topic_list",
            "description": "List all topics in creation order.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "auto_eliminate_get",
            "description": "Read the auto-eliminate switch.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "auto_eliminate_set",
            "description": "Flip the auto-eliminate switch. Calls already running keep the value they started with.",
            "inputSchema": {
                "type": "object",
                "properties": { "enabled": { "type": "boolean" } },
                "required": ["enabled"]
            }
        }),
        json!({
            "name": "reset",
            "description": "Delete every node and topic and restart id allocation.",
            "inputSchema": {
                "type": "object",
                "properties": { "confirm": { "type": "boolean" } },
                "required": ["confirm"]
            }
        }),
    ]
}
