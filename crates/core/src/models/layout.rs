//! Layout model - the full set of rooms on the explore screen

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Person, PersonId, Room, Seat, SeatRef};
use crate::error::Error;
use crate::invariants;

/// Number of rooms in the fixed layout
pub const ROOM_COUNT: usize = 3;

/// Seats per room in the fixed layout
pub const SEATS_PER_ROOM: usize = 4;

/// Ordered rooms and their seats.
///
/// A layout is a snapshot: assignment produces a new layout and leaves the
/// previous one untouched. Deserialized layouts are validated: they must
/// have the fixed shape, unique room ids and nobody in two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutRecord")]
pub struct Layout {
    pub(crate) rooms: Vec<Room>,
}

impl Layout {
    /// The fixed startup layout: `ROOM_COUNT` rooms of `SEATS_PER_ROOM` empty seats
    pub fn new() -> Self {
        let rooms = (1..=ROOM_COUNT)
            .map(|n| Room::new(format!("r{}", n), format!("Room {}", n), SEATS_PER_ROOM))
            .collect();
        Self { rooms }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn seat(&self, at: SeatRef) -> Option<&Seat> {
        self.rooms.get(at.room)?.seat(at.seat)
    }

    /// Check whether `at` names a seat in this layout
    pub fn contains(&self, at: SeatRef) -> bool {
        self.seat(at).is_some()
    }

    pub fn occupant(&self, at: SeatRef) -> Option<&Person> {
        self.seat(at)?.occupant()
    }

    /// All seat coordinates in scan order (room order, then seat order)
    pub fn seat_refs(&self) -> impl Iterator<Item = SeatRef> + '_ {
        self.rooms.iter().enumerate().flat_map(|(r, room)| {
            (0..room.seats.len()).map(move |s| SeatRef::new(r, s))
        })
    }

    /// First seat in scan order held by `person_id`
    pub fn seat_of(&self, person_id: &PersonId) -> Option<SeatRef> {
        self.seat_refs()
            .find(|&at| self.seat(at).is_some_and(|seat| seat.is_occupied_by(person_id)))
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms.iter().map(Room::occupied_count).sum()
    }

    pub fn seat_count(&self) -> usize {
        self.rooms.iter().map(|r| r.seats.len()).sum()
    }

    /// Same rooms with every seat emptied
    pub fn cleared(&self) -> Self {
        let rooms = self
            .rooms
            .iter()
            .map(|room| Room::new(room.id.clone(), room.name.clone(), room.seats.len()))
            .collect();
        Self { rooms }
    }

    /// Seat count per room, used to check the topology never changes
    pub(crate) fn shape(&self) -> Vec<usize> {
        self.rooms.iter().map(|r| r.seats.len()).collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of a layout
#[derive(Deserialize)]
struct LayoutRecord {
    rooms: Vec<RoomRecord>,
}

#[derive(Deserialize)]
struct RoomRecord {
    id: String,
    name: String,
    seats: Vec<SeatRecord>,
}

#[derive(Deserialize)]
struct SeatRecord {
    occupant: Option<Person>,
}

impl TryFrom<LayoutRecord> for Layout {
    type Error = Error;

    fn try_from(record: LayoutRecord) -> Result<Self, Self::Error> {
        let rooms: Vec<Room> = record
            .rooms
            .into_iter()
            .map(|room| Room {
                id: room.id,
                name: room.name,
                seats: room
                    .seats
                    .into_iter()
                    .map(|seat| Seat {
                        occupant: seat.occupant,
                    })
                    .collect(),
            })
            .collect();
        let layout = Self { rooms };

        if layout.shape() != Layout::new().shape() {
            return Err(Error::InvalidLayout(format!(
                "expected {} rooms of {} seats, found {:?}",
                ROOM_COUNT,
                SEATS_PER_ROOM,
                layout.shape()
            )));
        }

        let duplicate_room = {
            let mut room_ids = HashSet::new();
            layout
                .rooms
                .iter()
                .find(|r| !room_ids.insert(r.id.as_str()))
                .map(|r| r.id.clone())
        };
        if let Some(id) = duplicate_room {
            return Err(Error::InvalidLayout(format!("duplicate room id {}", id)));
        }

        if let Some((person_id, seats)) = invariants::duplicate_occupants(&layout).first() {
            return Err(Error::InvalidLayout(format!(
                "{} holds {} seats",
                person_id,
                seats.len()
            )));
        }

        Ok(layout)
    }
}
