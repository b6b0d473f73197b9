//! Seating session state
//!
//! Owns the current layout snapshot, the roster and the selected person for
//! one running instance. Every layout change goes through
//! [`seating::assign_with_outcome`], and replaced snapshots are kept for
//! undo/redo.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::models::{Layout, Person, PersonId, SeatRef};
use crate::roster::Roster;
use crate::seating::{self, AssignOutcome};
use crate::view::{ExploreView, HomeView};

/// Maximum number of snapshots kept for undo
pub const MAX_HISTORY: usize = 64;

/// Single-instance seating state
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    layout: Layout,
    selected: Person,
    undo_stack: Vec<Layout>,
    redo_stack: Vec<Layout>,
}

impl Session {
    /// Start a session with an empty layout and the local user selected
    pub fn new(roster: Roster) -> Self {
        let selected = roster.me().clone();
        Self {
            roster,
            layout: Layout::new(),
            selected,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selected(&self) -> &Person {
        &self.selected
    }

    /// Change the selected person. Unknown ids leave the selection unchanged.
    pub fn select_person(&mut self, id: &PersonId) -> Result<&Person> {
        let person = self
            .roster
            .find(id)
            .cloned()
            .ok_or_else(|| Error::UnknownPerson(id.to_string()))?;

        tracing::debug!(person_id = %person.id, "Selected person");
        self.selected = person;
        Ok(&self.selected)
    }

    /// Assign `person` to a seat, validating the coordinates first
    pub fn assign(&mut self, person: Option<&Person>, at: SeatRef) -> Result<AssignOutcome> {
        if !self.layout.contains(at) {
            return Err(Error::SeatOutOfRange {
                room: at.room,
                seat: at.seat,
            });
        }

        let (next, outcome) = seating::assign_with_outcome(&self.layout, person, at.room, at.seat);

        match &outcome {
            AssignOutcome::Seated { from, to } => {
                tracing::info!(
                    person_id = %person.map(|p| p.id.as_str()).unwrap_or_default(),
                    from = ?from,
                    to = %to,
                    "Seat assigned"
                );
                self.commit(next);
            }
            AssignOutcome::SeatTaken { occupant } => {
                tracing::debug!(seat = %at, occupant = %occupant, "Seat already taken");
            }
            AssignOutcome::AlreadySeated => {
                tracing::debug!(seat = %at, "Person already in seat");
            }
            AssignOutcome::NoSelection => {
                tracing::debug!(seat = %at, "No person selected");
            }
        }

        Ok(outcome)
    }

    /// Assign the currently selected person to a seat
    pub fn assign_selected(&mut self, at: SeatRef) -> Result<AssignOutcome> {
        let person = self.selected.clone();
        self.assign(Some(&person), at)
    }

    /// Empty every seat. Returns false if nothing was seated.
    pub fn reset(&mut self) -> bool {
        if self.layout.occupied_count() == 0 {
            return false;
        }
        let cleared = self.layout.cleared();
        self.commit(cleared);
        tracing::info!("Layout reset");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Restore the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.layout, previous);
                self.redo_stack.push(current);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone snapshot. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.layout, next);
                self.undo_stack.push(current);
                true
            }
            None => false,
        }
    }

    pub fn explore_view(&self) -> ExploreView {
        ExploreView::build(&self.layout, &self.roster, &self.selected)
    }

    pub fn home_view(&self) -> HomeView {
        HomeView::build(&self.layout, &self.roster)
    }

    fn commit(&mut self, next: Layout) {
        let previous = std::mem::replace(&mut self.layout, next);
        self.undo_stack.push(previous);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Roster::seed())
    }
}

/// Session shared between threads.
///
/// Each assignment runs its whole read-copy-write under one lock so
/// concurrent callers cannot both claim the same seat or seat one person
/// twice.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn assign(&self, person: Option<&Person>, at: SeatRef) -> Result<AssignOutcome> {
        self.lock().assign(person, at)
    }

    pub fn assign_selected(&self, at: SeatRef) -> Result<AssignOutcome> {
        self.lock().assign_selected(at)
    }

    pub fn select_person(&self, id: &PersonId) -> Result<Person> {
        self.lock().select_person(id).cloned()
    }

    /// Copy of the current layout
    pub fn snapshot(&self) -> Layout {
        self.lock().layout().clone()
    }
}
