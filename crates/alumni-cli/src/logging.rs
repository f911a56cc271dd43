// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! File-backed tracing setup. The terminal belongs to the UI, so log lines
//! go to a file that can be followed with `tail -f`.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(log_path: &Path, default_level: &str) -> Result<()> {
    let (directory, file_name) = split_log_path(log_path)?;
    fs::create_dir_all(directory)
        .with_context(|| format!("create log directory {}", directory.display()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!("install tracing subscriber: {error}"))
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn split_log_path(log_path: &Path) -> Result<(&Path, &str)> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            anyhow!(
                "log path {} has no file name; set [log].file to a file path",
                log_path.display()
            )
        })?;
    let directory = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((directory, file_name))
}
