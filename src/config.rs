// src/config.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::fetch::DEFAULT_SHEET_URL;

pub const CONFIG_FILE_VAR: &str = "EVENTBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sheet export: an http(s) URL, a `file://` URL or a local path.
    pub source: String,
    /// Where the rendered board is written.
    pub output: PathBuf,
    /// Pin "today" instead of using the local clock.
    pub today: Option<NaiveDate>,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SHEET_URL.to_string(),
            output: PathBuf::from("index.html"),
            today: None,
            title: "Eventos".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the YAML file named by `EVENTBOARD_CONFIG`, then `EVENTBOARD_*` variables.
    pub fn from_env() -> Result<Self> {
        let get = |key: &str| env::var(key).ok().filter(|v| !v.is_empty());
        let file = get(CONFIG_FILE_VAR).map(PathBuf::from);
        Self::load(file.as_deref(), get)
    }

    pub fn load(file: Option<&Path>, get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(source) = get("EVENTBOARD_SOURCE") {
            config.source = source;
        }
        if let Some(output) = get("EVENTBOARD_OUTPUT") {
            config.output = PathBuf::from(output);
        }
        if let Some(title) = get("EVENTBOARD_TITLE") {
            config.title = title;
        }
        if let Some(today) = get("EVENTBOARD_TODAY") {
            let day = NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d")
                .with_context(|| format!("EVENTBOARD_TODAY must be YYYY-MM-DD, got {:?}", today))?;
            config.today = Some(day);
        }

        debug!(?config, "loaded config");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
