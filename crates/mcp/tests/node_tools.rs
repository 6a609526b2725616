#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn create_get_update_round_trip() {
    let mut server = Server::start_initialized("node_round_trip");

    let created = server.call_ok(
        "node_create",
        json!({ "kind": "thought", "content": "why is the build slow", "topic_name": " ci " }),
    );
    let node = &created["node"];
    let id = node_id(node);
    assert_eq!(node["kind"], "thought");
    assert_eq!(node["topic_name"], "ci");
    assert_eq!(node["parent"], json!(null));
    assert!(node["created_at"].as_str().expect("rfc3339").contains('T'));

    let by_content = server.call_ok(
        "node_get",
        json!({ "kind": "thought", "content": "why is the build slow" }),
    );
    assert_eq!(node_id(&by_content["node"]), id);

    let by_string_id = server.call_ok("node_get", json!({ "kind": "thought", "id": id.to_string() }));
    assert_eq!(node_id(&by_string_id["node"]), id);

    let updated = server.call_ok(
        "node_update",
        json!({ "kind": "thought", "id": id, "content": "cache misses", "topic_name": null }),
    );
    assert_eq!(updated["node"]["content"], "cache misses");
    assert_eq!(updated["node"]["topic_name"], json!(null));

    let empty = server.call("node_update", json!({ "kind": "thought", "id": id }));
    assert_eq!(error_code(&empty), Some("INVALID_INPUT"));
}

#[test]
fn parent_must_be_a_thought() {
    let mut server = Server::start_initialized("parent_must_be_thought");
    let solution = server.create("solution", "s", None);

    let payload = server.call(
        "node_create",
        json!({ "kind": "thought", "content": "t", "parent": solution }),
    );
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));
}

#[test]
fn list_children_and_latest_leaf() {
    let mut server = Server::start_initialized("list_children_latest");
    let root = server.call_ok(
        "node_create",
        json!({ "kind": "thought", "content": "root", "topic_name": "work", "created_at_ms": 1000 }),
    );
    let root = node_id(&root["node"]);
    let leaf = server.call_ok(
        "node_create",
        json!({ "kind": "thought", "content": "leaf", "parent": root, "topic_name": "work", "created_at_ms": 2000 }),
    );
    let leaf = node_id(&leaf["node"]);
    let solution = server.create("solution", "fix", Some(root));

    let children = server.call_ok("node_children", json!({ "id": root }));
    assert_eq!(children["child_thoughts"], 1);
    assert_eq!(children["anchored_solutions"], 1);
    assert_eq!(ids(&children["children"]), vec![leaf, solution]);

    let listed = server.call_ok("node_list", json!({ "kind": "thought", "topic_name": "work" }));
    assert_eq!(listed["count"], 2);

    let latest = server.call_ok("latest_leaf", json!({ "topic_name": "work" }));
    assert_eq!(node_id(&latest["node"]), leaf);

    let none = server.call("latest_leaf", json!({ "topic_name": "empty" }));
    assert_eq!(none["result"]["node"], json!(null));
    assert_eq!(none["warnings"].as_array().map(Vec::len), Some(1));

    let topics = server.call_ok("topic_list", json!({}));
    assert_eq!(topics["count"], 1);
    assert_eq!(topics["topics"][0]["name"], "work");
}

#[test]
fn raw_delete_skips_checks() {
    let mut server = Server::start_initialized("raw_delete");
    let root = server.create("thought", "root", None);
    let child = server.create("thought", "child", Some(root));

    let deleted = server.call_ok("node_delete", json!({ "kind": "thought", "id": root }));
    assert_eq!(deleted["deleted"], true);

    let again = server.call_ok("node_delete", json!({ "kind": "thought", "id": root }));
    assert_eq!(again["deleted"], false);

    let child = server.call_ok("node_get", json!({ "kind": "thought", "id": child }));
    assert_eq!(child["node"]["parent"], json!(null));
}

#[test]
fn connect_tools_keep_both_sides() {
    let mut server = Server::start_initialized("connect_tools");
    let a = server.create("thought", "a", None);
    let b = server.create("solution", "b", None);

    let linked = server.call_ok(
        "connect_add",
        json!({ "kind": "thought", "id": a, "peers": [b, 9999] }),
    );
    assert_eq!(linked["node"]["connect"], json!([b]));

    let peers = server.call_ok("connect_peers", json!({ "kind": "solution", "id": b }));
    assert_eq!(ids(&peers["peers"]), vec![a]);

    let unlinked = server.call_ok(
        "connect_remove",
        json!({ "kind": "solution", "id": b, "peers": [a] }),
    );
    assert_eq!(unlinked["node"]["connect"], json!([]));

    let a_view = server.call_ok("node_get", json!({ "kind": "thought", "id": a }));
    assert_eq!(a_view["node"]["connect"], json!([]));

    let missing = server.call("connect_add", json!({ "kind": "thought", "id": b, "peers": [a] }));
    assert_eq!(error_code(&missing), Some("NOT_FOUND"));
}

#[test]
fn retype_and_topic_tools() {
    let mut server = Server::start_initialized("retype_tools");
    let thought = server.create("thought", "maybe", None);

    let retyped = server.call_ok(
        "retype",
        json!({ "id": thought, "new_kind": "solution", "new_content": "definitely" }),
    );
    assert_eq!(retyped["kind"], "solution");
    assert_eq!(retyped["replaced"], true);
    let solution = node_id(&retyped["node"]);

    let topic = server.call_ok(
        "retype",
        json!({ "id": solution, "new_kind": "topic", "new_content": "answers" }),
    );
    assert_eq!(topic["kind"], "topic");
    assert_eq!(topic["node"]["name"], "answers");

    let ensured = server.call_ok("topic_ensure", json!({ "name": "answers" }));
    assert_eq!(ensured["topic"]["id"], topic["node"]["id"]);

    let renamed = server.call(
        "retype",
        json!({ "id": topic["node"]["id"], "new_kind": "topic", "new_content": "other" }),
    );
    assert_eq!(error_code(&renamed), Some("INVALID_INPUT"));

    let bad_kind = server.call(
        "retype",
        json!({ "id": thought, "new_kind": "idea", "new_content": "x" }),
    );
    assert_eq!(error_code(&bad_kind), Some("INVALID_KIND"));
}

#[test]
fn reset_wipes_everything() {
    let mut server = Server::start_initialized("reset_tool");
    server.create("thought", "gone soon", None);
    server.call_ok("topic_ensure", json!({ "name": "t" }));

    server.call_ok("reset", json!({ "confirm": true }));

    let listed = server.call_ok("node_list", json!({ "kind": "thought" }));
    assert_eq!(listed["count"], 0);
    let topics = server.call_ok("topic_list", json!({}));
    assert_eq!(topics["count"], 0);

    let fresh = server.create("thought", "first again", None);
    assert_eq!(fresh, 1);
}
