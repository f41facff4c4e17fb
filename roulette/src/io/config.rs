//! Roulette configuration stored in `roulette.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "roulette.toml";

/// Event configuration (TOML).
///
/// This file is intended to be edited by hand between events: update the
/// participant list, point `rules_file` at the current rules document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouletteConfig {
    /// Ordered participant display names. The order fixes the draw order.
    pub participants: Vec<String>,

    /// Optional rules document printed before the pairing table.
    pub rules_file: Option<String>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            participants: vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Carol".to_string(),
            ],
            rules_file: None,
        }
    }
}

impl RouletteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.participants.len() < 2 {
            return Err(anyhow!(
                "at least two participants are required, found {}",
                self.participants.len()
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.participants {
            if name.trim().is_empty() {
                return Err(anyhow!("participant names must not be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(anyhow!("duplicate participant name '{}'", name));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RouletteConfig::default()` so a fresh
/// checkout can draw without running `init` first.
pub fn load_config(path: &Path) -> Result<RouletteConfig> {
    if !path.exists() {
        let cfg = RouletteConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RouletteConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RouletteConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
