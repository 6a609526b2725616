#![forbid(unsafe_code)]

mod config;
mod handlers;
mod server;
mod support;
mod tools;

pub(crate) use server::McpServer;
pub(crate) use support::*;

use bubble_core::AutoEliminateSwitch;
use bubble_storage::SqliteStore;
use config::ServerConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "bubblemind-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "bubble_mcp=info,bubble_storage=info";

fn usage() -> &'static str {
    "bubble_mcp - thought/solution graph server (JSON-RPC over stdio)\n\n\
USAGE:\n\
  bubble_mcp [--storage-dir DIR] [--config FILE] [--auto-eliminate on|off]\n\
             [--reset-on-start] [--reset-on-exit] [--log FILTER]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version/build and exit\n\
\n\
ENVIRONMENT:\n\
  BUBBLE_CONFIG, BUBBLE_STORAGE_DIR, BUBBLE_AUTO_ELIMINATE,\n\
  BUBBLE_RESET_ON_START, BUBBLE_RESET_ON_EXIT, BUBBLE_LOG (flags win)\n"
}

fn build_tag() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn version_line() -> String {
    format!("bubble_mcp {SERVER_VERSION} build={}", build_tag())
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    // stdout carries the protocol.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let config = ServerConfig::resolve(&args, |key| std::env::var(key).ok())?;
    init_tracing(config.log_filter.as_deref());
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        auto_eliminate = config.auto_eliminate,
        reset_on_start = config.reset_on_start,
        reset_on_exit = config.reset_on_exit,
        "starting {SERVER_NAME}"
    );

    let mut store = SqliteStore::open(&config.storage_dir)?;
    if config.reset_on_start {
        store.reset()?;
    }

    let mut server = McpServer::new(store, AutoEliminateSwitch::new(config.auto_eliminate));
    let result = server::run_stdio(&mut server);
    if config.reset_on_exit {
        server.reset_store()?;
    }
    tracing::info!("stdin closed, shutting down");
    result
}
