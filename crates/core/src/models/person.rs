//! Person model - anyone who can take a seat

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character shown when a display name yields no initials
pub const FALLBACK_INITIAL: &str = "U";

/// Stable identifier for a person on the roster
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A person who can be selected on the roster and placed in a seat.
///
/// Persons are immutable once created and compare by id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Presence flag shown as a dot on the roster strip
    #[serde(default = "default_online")]
    pub online: bool,
}

fn default_online() -> bool {
    true
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(id),
            name: name.into(),
            online: default_online(),
        }
    }

    pub fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl std::hash::Hash for Person {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Derive the avatar badge text for a display name.
///
/// Takes the first character of each of the first two space-separated
/// tokens, upper-cased. Falls back to [`FALLBACK_INITIAL`] when nothing is
/// left after trimming.
pub fn initials(name: &str) -> String {
    let badge: String = name
        .trim()
        .split(' ')
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if badge.is_empty() {
        FALLBACK_INITIAL.to_string()
    } else {
        badge
    }
}
