//! Data directory resolution

use crate::types::{Result, TeatrackError};
use directories::BaseDirs;
use std::path::PathBuf;

/// Directory name under the home directory
pub const DATA_DIR_NAME: &str = ".teatrack";

/// Explicit directory if given (flag or `TEATRACK_DIR`), else `~/.teatrack`
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    default_data_dir()
}

pub fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| TeatrackError::Config("Cannot determine home directory".into()))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
