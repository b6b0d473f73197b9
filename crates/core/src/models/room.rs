//! Room and seat models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Person, PersonId};

/// Coordinates of a seat within a layout (zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    pub room: usize,
    pub seat: usize,
}

impl SeatRef {
    pub fn new(room: usize, seat: usize) -> Self {
        Self { room, seat }
    }
}

impl fmt::Display for SeatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.room, self.seat)
    }
}

/// A single seat. Either empty or held by exactly one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub(crate) occupant: Option<Person>,
}

impl Seat {
    pub fn empty() -> Self {
        Self { occupant: None }
    }

    pub fn occupant(&self) -> Option<&Person> {
        self.occupant.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_occupied_by(&self, person_id: &PersonId) -> bool {
        self.occupant.as_ref().is_some_and(|p| &p.id == person_id)
    }
}

/// A room with a fixed row of seats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub(crate) seats: Vec<Seat>,
}

impl Room {
    /// Create a room with `seat_count` empty seats
    pub fn new(id: impl Into<String>, name: impl Into<String>, seat_count: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seats: vec![Seat::empty(); seat_count],
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Indices of seats nobody holds
    pub fn free_seats(&self) -> Vec<usize> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_empty()).count()
    }
}
