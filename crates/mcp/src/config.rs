#![forbid(unsafe_code)]

use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_STORAGE_DIR: &str = ".bubblemind";

/// Effective runtime settings after all layers are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub(crate) storage_dir: PathBuf,
    pub(crate) auto_eliminate: bool,
    pub(crate) reset_on_start: bool,
    pub(crate) reset_on_exit: bool,
    pub(crate) log_filter: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            auto_eliminate: true,
            reset_on_start: false,
            reset_on_exit: false,
            log_filter: None,
        }
    }
}

/// YAML file layer. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    storage_dir: Option<PathBuf>,
    auto_eliminate: Option<bool>,
    reset_on_start: Option<bool>,
    reset_on_exit: Option<bool>,
    log_filter: Option<String>,
}

#[derive(Debug, Default)]
struct CliConfig {
    config_path: Option<PathBuf>,
    storage_dir: Option<PathBuf>,
    auto_eliminate: Option<bool>,
    reset_on_start: bool,
    reset_on_exit: bool,
    log_filter: Option<String>,
}

impl ServerConfig {
    /// Defaults, then the YAML file, then `BUBBLE_*` variables, then flags.
    pub(crate) fn resolve<F>(args: &[String], env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cli = parse_cli(args)?;
        let mut config = Self::default();

        let config_path = cli
            .config_path
            .clone()
            .or_else(|| non_empty(env("BUBBLE_CONFIG")).map(PathBuf::from));
        if let Some(path) = config_path {
            config.apply_file(load_file(&path)?);
        }

        if let Some(dir) = non_empty(env("BUBBLE_STORAGE_DIR")) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(raw) = non_empty(env("BUBBLE_AUTO_ELIMINATE")) {
            config.auto_eliminate = parse_switch("BUBBLE_AUTO_ELIMINATE", &raw)?;
        }
        if let Some(raw) = non_empty(env("BUBBLE_RESET_ON_START")) {
            config.reset_on_start = parse_switch("BUBBLE_RESET_ON_START", &raw)?;
        }
        if let Some(raw) = non_empty(env("BUBBLE_RESET_ON_EXIT")) {
            config.reset_on_exit = parse_switch("BUBBLE_RESET_ON_EXIT", &raw)?;
        }
        if let Some(filter) = non_empty(env("BUBBLE_LOG")) {
            config.log_filter = Some(filter);
        }

        if let Some(dir) = cli.storage_dir {
            config.storage_dir = dir;
        }
        if let Some(enabled) = cli.auto_eliminate {
            config.auto_eliminate = enabled;
        }
        config.reset_on_start |= cli.reset_on_start;
        config.reset_on_exit |= cli.reset_on_exit;
        if let Some(filter) = cli.log_filter {
            config.log_filter = Some(filter);
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(dir) = file.storage_dir {
            self.storage_dir = dir;
        }
        if let Some(enabled) = file.auto_eliminate {
            self.auto_eliminate = enabled;
        }
        if let Some(flag) = file.reset_on_start {
            self.reset_on_start = flag;
        }
        if let Some(flag) = file.reset_on_exit {
            self.reset_on_exit = flag;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = Some(filter);
        }
    }
}

fn load_file(path: &Path) -> Result<FileConfig, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("config {}: {err}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&raw).map_err(|err| format!("config {}: {err}", path.display()))
}

fn parse_cli(args: &[String]) -> Result<CliConfig, String> {
    let mut cli = CliConfig::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--storage-dir" => cli.storage_dir = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--config" => cli.config_path = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--auto-eliminate" => {
                let raw = flag_value(&mut iter, arg)?;
                cli.auto_eliminate = Some(parse_switch(arg, raw)?);
            }
            "--reset-on-start" => cli.reset_on_start = true,
            "--reset-on-exit" => cli.reset_on_exit = true,
            "--log" => cli.log_filter = Some(flag_value(&mut iter, arg)?.to_string()),
            other => return Err(format!("unknown argument: {other} (see --help)")),
        }
    }
    Ok(cli)
}

fn flag_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_switch(name: &str, raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(format!("{name}: expected on|off, got {raw:?}")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
