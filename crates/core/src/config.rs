//! Roster configuration
//!
//! The roster can be overridden by a TOML file:
//!
//! ```toml
//! [me]
//! id = "me"
//! name = "Okasha Arshad"
//!
//! [[contacts]]
//! id = "1"
//! name = "Alice Johnson"
//! online = false
//! ```
//!
//! Room and seat counts are fixed and cannot be configured.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Person;
use crate::roster::Roster;

/// File name looked up in the platform config directory
pub const ROSTER_FILE_NAME: &str = "roster.toml";

/// Roster file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub me: Person,
    #[serde(default)]
    pub contacts: Vec<Person>,
}

impl RosterConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Validate and convert into a roster
    pub fn into_roster(self) -> Result<Roster> {
        Roster::new(self.me, self.contacts)
    }
}

/// Where the roster came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Path given on the command line or via environment
    Explicit(PathBuf),
    /// `roster.toml` in the platform config directory
    ConfigDir(PathBuf),
    /// Compiled-in seed roster
    BuiltIn,
}

impl RosterSource {
    /// Pick a roster source. An explicit path always wins; otherwise the
    /// config directory file is used if it exists.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, default_config_dir())
    }

    fn resolve_with(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return RosterSource::Explicit(path);
        }

        match config_dir.map(|dir| dir.join(ROSTER_FILE_NAME)) {
            Some(path) if path.is_file() => RosterSource::ConfigDir(path),
            _ => RosterSource::BuiltIn,
        }
    }

    pub fn load(&self) -> Result<Roster> {
        match self {
            RosterSource::Explicit(path) | RosterSource::ConfigDir(path) => {
                let roster = RosterConfig::load(path)?.into_roster()?;
                tracing::info!(
                    path = %path.display(),
                    people = roster.len(),
                    "Loaded roster from file"
                );
                Ok(roster)
            }
            RosterSource::BuiltIn => {
                tracing::debug!("Using built-in roster");
                Ok(Roster::seed())
            }
        }
    }
}

/// Platform config directory for Seatmap, if one can be determined
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "seatmap", "seatmap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Resolve and load the roster in one step
pub fn load_roster(explicit: Option<PathBuf>) -> Result<Roster> {
    let source = RosterSource::resolve(explicit);
    source.load().map_err(|e| match e {
        Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            Error::InvalidRoster(format!("roster file not found: {:?}", source))
        }
        other => other,
    })
}
