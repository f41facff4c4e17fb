//! Reading the rules document printed before a draw.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the rules document at `path`.
///
/// The file is user-maintained; a configured-but-missing document is an
/// error rather than a silent skip.
pub fn load_rules(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read rules {}", path.display()))
}
