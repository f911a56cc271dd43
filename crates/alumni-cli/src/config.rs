// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alumni_app::ViewKind;
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const FEATURED_RANGE: (i64, i64) = (1, 12);

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage: Storage::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_view: Option<String>,
    pub featured_count: Option<i64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_view: Some(ViewKind::Dashboard.as_str().to_owned()),
            featured_count: Some(alumni_tui::DEFAULT_FEATURED_COUNT as i64),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("ALUMNI_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set ALUMNI_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(alumni_db::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version; add `version = 1` and keep values under [storage], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Regenerate it with `alumni --print-example-config`",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(db_path) = &self.storage.db_path {
            alumni_db::validate_db_path(db_path)?;
        }

        if let Some(view) = &self.ui.start_view
            && ViewKind::parse(view).is_none()
        {
            bail!(
                "ui.start_view in {} must be one of dashboard, directory, events, profile; got {view:?}",
                path.display()
            );
        }

        if let Some(count) = self.ui.featured_count
            && !(FEATURED_RANGE.0..=FEATURED_RANGE.1).contains(&count)
        {
            bail!(
                "ui.featured_count in {} must be between {} and {}, got {}",
                path.display(),
                FEATURED_RANGE.0,
                FEATURED_RANGE.1,
                count
            );
        }

        if let Some(level) = &self.log.level
            && !LOG_LEVELS.contains(&level.as_str())
        {
            bail!(
                "log.level in {} must be one of {}; got {level:?}",
                path.display(),
                LOG_LEVELS.join(", ")
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} must not be empty; remove it to use the default location",
                path.display()
            );
        }

        Ok(())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.storage.db_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => alumni_db::default_db_path(),
        }
    }

    pub fn start_view(&self) -> ViewKind {
        self.ui
            .start_view
            .as_deref()
            .and_then(ViewKind::parse)
            .unwrap_or(ViewKind::Dashboard)
    }

    pub fn featured_count(&self) -> usize {
        self.ui
            .featured_count
            .map_or(alumni_tui::DEFAULT_FEATURED_COUNT, |count| {
                count.clamp(FEATURED_RANGE.0, FEATURED_RANGE.1) as usize
            })
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }

        let root = dirs::state_dir().or_else(dirs::cache_dir).ok_or_else(|| {
            anyhow!("cannot resolve a log directory; set [log].file in the config")
        })?;
        Ok(root.join(alumni_db::APP_NAME).join("alumni.log"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# alumni config\n# Place this file at: {}\n\nversion = 1\n\n[storage]\n# Optional. Default is ALUMNI_DB_PATH, else the platform data dir (for example ~/.local/share/alumni/alumni.db)\n# db_path = \"/absolute/path/to/alumni.db\"\n\n[ui]\n# dashboard | directory | events | profile\nstart_view = \"dashboard\"\n# Featured alumni and jobs on the dashboard ({}..={})\nfeatured_count = {}\n\n[log]\n# trace | debug | info | warn | error; RUST_LOG overrides\nlevel = \"{}\"\n# file = \"/absolute/path/to/alumni.log\"\n",
            path.display(),
            FEATURED_RANGE.0,
            FEATURED_RANGE.1,
            alumni_tui::DEFAULT_FEATURED_COUNT,
            DEFAULT_LOG_LEVEL,
        )
    }
}
