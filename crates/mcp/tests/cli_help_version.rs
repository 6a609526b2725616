#![forbid(unsafe_code)]

use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn temp_dir(test_name: &str) -> std::path::PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("bubble_mcp_cli_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn cli_help_exits_zero_and_does_not_create_store() {
    let exe = env!("CARGO_BIN_EXE_bubble_mcp");
    let dir = temp_dir("help");

    let output = Command::new(exe)
        .arg("--help")
        .current_dir(&dir)
        .output()
        .expect("run bubble_mcp --help");

    assert!(
        output.status.success(),
        "expected zero exit (stderr={})",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE:"), "help must include USAGE");
    assert!(
        !dir.join(".bubblemind").exists(),
        "--help should not create the store"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cli_version_exits_zero_and_includes_pkg_version() {
    let exe = env!("CARGO_BIN_EXE_bubble_mcp");
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .expect("run bubble_mcp --version");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output must include crate version (got={stdout})"
    );
    assert!(stdout.contains("build="), "version output must include build tag");
}

#[test]
fn cli_rejects_unknown_flags() {
    let exe = env!("CARGO_BIN_EXE_bubble_mcp");
    let output = Command::new(exe)
        .arg("--definitely-not-a-flag")
        .env("RUST_LOG", "off")
        .output()
        .expect("run bubble_mcp");
    assert!(!output.status.success());
}

/// Runs one stdio session to EOF and returns the `node_list` count of thoughts.
fn thoughts_after_session(storage_dir: &Path, envs: &[(&str, &str)], create: bool) -> i64 {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bubble_mcp"));
    cmd.arg("--storage-dir")
        .arg(storage_dir)
        .env_remove("BUBBLE_CONFIG")
        .env_remove("BUBBLE_AUTO_ELIMINATE")
        .env_remove("BUBBLE_RESET_ON_START")
        .env_remove("BUBBLE_RESET_ON_EXIT")
        .env_remove("BUBBLE_LOG")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let mut child = cmd.spawn().expect("spawn bubble_mcp");

    let mut requests = vec![json!({
        "jsonrpc": "2.0", "id": 1, "method": "initialize",
        "params": { "protocolVersion": "2024-11-05", "capabilities": {} }
    })];
    if create {
        requests.push(json!({
            "jsonrpc": "2.0", "id": 2, "method": "tools/call",
            "params": { "name": "node_create", "arguments": { "kind": "thought", "content": "kept?" } }
        }));
    }
    requests.push(json!({
        "jsonrpc": "2.0", "id": 3, "method": "tools/call",
        "params": { "name": "node_list", "arguments": { "kind": "thought" } }
    }));
    {
        let mut stdin = child.stdin.take().expect("stdin");
        for req in &requests {
            writeln!(stdin, "{req}").expect("write request");
        }
    }

    let output = child.wait_with_output().expect("wait bubble_mcp");
    assert!(output.status.success(), "session must exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let list = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find(|resp| resp.get("id").and_then(|v| v.as_i64()) == Some(3))
        .expect("node_list response");
    let text = list["result"]["content"][0]["text"]
        .as_str()
        .expect("tool text");
    let payload: Value = serde_json::from_str(text).expect("tool json");
    payload["result"]["count"].as_i64().expect("count")
}

#[test]
fn reset_switches_are_read_from_the_environment() {
    let dir = temp_dir("reset_env");

    assert_eq!(thoughts_after_session(&dir, &[], true), 1);
    assert_eq!(thoughts_after_session(&dir, &[], false), 1, "store persists");
    assert_eq!(
        thoughts_after_session(&dir, &[("BUBBLE_RESET_ON_START", "on")], false),
        0,
        "BUBBLE_RESET_ON_START wipes the store before serving"
    );

    assert_eq!(
        thoughts_after_session(&dir, &[("BUBBLE_RESET_ON_EXIT", "yes")], true),
        1
    );
    assert_eq!(
        thoughts_after_session(&dir, &[], false),
        0,
        "BUBBLE_RESET_ON_EXIT wipes the store on shutdown"
    );

    let _ = std::fs::remove_dir_all(&dir);
}
