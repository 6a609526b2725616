#![forbid(unsafe_code)]

mod admin;
mod graph;
mod nodes;

use crate::McpServer;
use serde_json::Value;

macro_rules! define_tool_dispatch {
    ($($tool_name:literal => $method:ident),* $(,)?) => {
        pub(crate) fn dispatch_tool(
            server: &mut McpServer,
            name: &str,
            args: Value,
        ) -> Option<Value> {
            let resp = match name {
                $($tool_name => server.$method(args),)*
                _ => return None,
            };
            Some(match resp {
                Ok(v) | Err(v) => v,
            })
        }

        #[cfg(test)]
        pub(crate) fn dispatch_tool_names() -> &'static [&'static str] {
            &[$($tool_name),*]
        }
    };
}

define_tool_dispatch! {
    "node_create" => tool_node_create,
    "node_get" => tool_node_get,
    "node_update" => tool_node_update,
    "node_delete" => tool_node_delete,
    "node_list" => tool_node_list,
    "node_children" => tool_node_children,
    "latest_leaf" => tool_latest_leaf,
    "eliminate" => tool_eliminate,
    "archive" => tool_archive,
    "connect_add" => tool_connect_add,
    "connect_remove" => tool_connect_remove,
    "connect_peers" => tool_connect_peers,
    "retype" => tool_retype,
    "topic_ensure" => tool_topic_ensure,
    "topic_list" => tool_topic_list,
    "auto_eliminate_get" => tool_auto_eliminate_get,
    "auto_eliminate_set" => tool_auto_eliminate_set,
    "reset" => tool_reset,
}
