//! Presentation snapshots
//!
//! Plain, serializable views of the session consumed by front-ends. They
//! carry everything needed to draw the screens (initials badges, seat
//! states, online dots) so renderers hold no logic of their own.

use serde::Serialize;

use crate::models::{Layout, Person, SeatRef};
use crate::roster::Roster;

/// Visual state of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    Empty,
    Occupied,
    /// Held by the currently selected person
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub index: usize,
    pub state: SeatState,
    pub occupant_id: Option<String>,
    pub occupant_name: Option<String>,
    pub initials: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub id: String,
    pub name: String,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntryView {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub online: bool,
    pub selected: bool,
}

/// Everything on the explore screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExploreView {
    pub selected_id: String,
    pub roster: Vec<RosterEntryView>,
    pub rooms: Vec<RoomView>,
}

impl ExploreView {
    pub fn build(layout: &Layout, roster: &Roster, selected: &Person) -> Self {
        let roster_entries = roster
            .entries()
            .map(|p| RosterEntryView {
                id: p.id.to_string(),
                name: p.name.clone(),
                initials: p.initials(),
                online: p.online,
                selected: p.id == selected.id,
            })
            .collect();

        let rooms = layout
            .rooms()
            .iter()
            .map(|room| RoomView {
                id: room.id.clone(),
                name: room.name.clone(),
                seats: room
                    .seats()
                    .iter()
                    .enumerate()
                    .map(|(index, seat)| match seat.occupant() {
                        Some(occupant) => SeatView {
                            index,
                            state: if occupant.id == selected.id {
                                SeatState::Selected
                            } else {
                                SeatState::Occupied
                            },
                            occupant_id: Some(occupant.id.to_string()),
                            occupant_name: Some(occupant.name.clone()),
                            initials: Some(occupant.initials()),
                        },
                        None => SeatView {
                            index,
                            state: SeatState::Empty,
                            occupant_id: None,
                            occupant_name: None,
                            initials: None,
                        },
                    })
                    .collect(),
            })
            .collect();

        Self {
            selected_id: selected.id.to_string(),
            roster: roster_entries,
            rooms,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Profile hero on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub name: String,
    pub initials: String,
    pub online: bool,
    /// Room name and zero-based seat, if the local user is seated
    pub seat: Option<(String, SeatRef)>,
}

impl HomeView {
    pub fn build(layout: &Layout, roster: &Roster) -> Self {
        let me = roster.me();
        let seat = layout.seat_of(&me.id).and_then(|at| {
            layout
                .room(at.room)
                .map(|room| (room.name.clone(), at))
        });

        Self {
            name: me.name.clone(),
            initials: me.initials(),
            online: me.online,
            seat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::assign;

    #[test]
    fn test_empty_explore_view() {
        let roster = Roster::seed();
        let view = ExploreView::build(&Layout::new(), &roster, roster.me());

        assert_eq!(view.selected_id, "me");
        assert_eq!(view.roster.len(), 9);
        assert!(view.roster[0].selected);
        assert_eq!(view.roster[0].initials, "OA");
        assert!(view.roster.iter().skip(1).all(|e| !e.selected && e.online));
        assert_eq!(view.rooms.len(), 3);
        assert!(view
            .rooms
            .iter()
            .flat_map(|r| &r.seats)
            .all(|s| s.state == SeatState::Empty && s.initials.is_none()));
    }

    #[test]
    fn test_seat_states() {
        let roster = Roster::seed();
        let me = roster.me().clone();
        let bob = roster.contacts()[1].clone();

        let layout = assign(&Layout::new(), Some(&me), 0, 0);
        let layout = assign(&layout, Some(&bob), 0, 1);

        let view = ExploreView::build(&layout, &roster, &me);
        let seats = &view.rooms[0].seats;
        assert_eq!(seats[0].state, SeatState::Selected);
        assert_eq!(seats[1].state, SeatState::Occupied);
        assert_eq!(seats[1].initials.as_deref(), Some("BS"));
        assert_eq!(seats[2].state, SeatState::Empty);

        // Selecting Bob flips which seat is highlighted
        let view = ExploreView::build(&layout, &roster, &bob);
        assert_eq!(view.rooms[0].seats[0].state, SeatState::Occupied);
        assert_eq!(view.rooms[0].seats[1].state, SeatState::Selected);
    }

    #[test]
    fn test_json_shape() {
        let roster = Roster::seed();
        let view = ExploreView::build(&Layout::new(), &roster, roster.me());
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(json["selected_id"], "me");
        assert_eq!(json["rooms"][0]["seats"][0]["state"], "empty");
        assert_eq!(json["roster"][1]["name"], "Alice Johnson");
    }

    #[test]
    fn test_home_view() {
        let roster = Roster::seed();
        let home = HomeView::build(&Layout::new(), &roster);
        assert_eq!(home.initials, "OA");
        assert!(home.seat.is_none());

        let layout = assign(&Layout::new(), Some(roster.me()), 2, 3);
        let home = HomeView::build(&layout, &roster);
        assert_eq!(home.seat, Some(("Room 3".to_string(), SeatRef::new(2, 3))));
    }
}
