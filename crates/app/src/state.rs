//! Application state management

use std::fmt;
use std::sync::{Arc, Mutex};

use seatmap_core::{Roster, Session, SharedSession};

/// Navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tab {
    /// Profile hero for the local user
    Home,
    /// Roster strip and room seating
    #[default]
    Explore,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Home => write!(f, "Home"),
            Tab::Explore => write!(f, "Explore"),
        }
    }
}

/// Main application state
pub struct AppState {
    pub session: SharedSession,
    pub current_tab: Arc<Mutex<Tab>>,
}

impl AppState {
    pub fn new(roster: Roster, tab: Tab) -> Self {
        Self {
            session: SharedSession::new(Session::new(roster)),
            current_tab: Arc::new(Mutex::new(tab)),
        }
    }

    pub fn current_tab(&self) -> Tab {
        *self
            .current_tab
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_current_tab(&self, tab: Tab) {
        *self
            .current_tab
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_display() {
        assert_eq!(format!("{}", Tab::Home), "Home");
        assert_eq!(format!("{}", Tab::Explore), "Explore");
    }

    #[test]
    fn switch_tabs() {
        let state = AppState::new(Roster::seed(), Tab::default());
        assert_eq!(state.current_tab(), Tab::Explore);
        state.set_current_tab(Tab::Home);
        assert_eq!(state.current_tab(), Tab::Home);
    }
}
