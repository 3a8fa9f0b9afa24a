//! Roster file loading.
//!
//! The server can replace the built-in seed roster with one read from a TOML
//! file, so a deployment can track the hosted backend's temple table without
//! a code change.
//!
//! # File format
//!
//! ```toml
//! [[temples]]
//! id = "mahakaleshwar"
//! name = "Mahakaleshwar Temple"
//! type = "Jyotirlinga"
//! district = "Ujjain"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::api::TempleRef;
use crate::db::repository::{RepositoryError, RepositoryResult};

/// Environment variable naming the roster file.
pub const ROSTER_ENV_VAR: &str = "TEMPLE_ROSTER";

#[derive(Debug, Deserialize)]
struct RosterFile {
    temples: Vec<TempleRef>,
}

/// Parse a TOML roster document.
pub fn parse_roster(contents: &str) -> RepositoryResult<Vec<TempleRef>> {
    let file: RosterFile = toml::from_str(contents)
        .map_err(|e| RepositoryError::Configuration(format!("invalid roster file: {}", e)))?;

    if file.temples.is_empty() {
        return Err(RepositoryError::Validation(
            "roster file contains no temples".to_string(),
        ));
    }

    Ok(file.temples)
}

/// Load a roster from a TOML file on disk.
pub fn load_roster(path: &Path) -> RepositoryResult<Vec<TempleRef>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RepositoryError::Configuration(format!("cannot read roster file {}: {}", path.display(), e))
    })?;
    parse_roster(&contents)
}

/// Load the roster named by `TEMPLE_ROSTER`, if the variable is set.
pub fn roster_from_env() -> RepositoryResult<Option<Vec<TempleRef>>> {
    match std::env::var(ROSTER_ENV_VAR) {
        Ok(path) => load_roster(Path::new(&path)).map(Some),
        Err(_) => Ok(None),
    }
}
