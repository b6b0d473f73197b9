//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible layout states during
//! development. These checks are compiled out in release builds.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Layout, PersonId, SeatRef};

/// Every person seated more than once, with all the seats they hold.
///
/// Returns an empty list for a consistent layout.
pub fn duplicate_occupants(layout: &Layout) -> Vec<(PersonId, Vec<SeatRef>)> {
    let mut seats_by_person: BTreeMap<&PersonId, Vec<SeatRef>> = BTreeMap::new();

    for at in layout.seat_refs() {
        if let Some(person) = layout.occupant(at) {
            seats_by_person.entry(&person.id).or_default().push(at);
        }
    }

    seats_by_person
        .into_iter()
        .filter(|(_, seats)| seats.len() > 1)
        .map(|(id, seats)| (id.clone(), seats))
        .collect()
}

/// Validate that no person holds more than one seat and room ids are unique
pub fn assert_layout_invariants(layout: &Layout) {
    debug_assert!(
        duplicate_occupants(layout).is_empty(),
        "Layout has people in more than one seat: {:?}",
        duplicate_occupants(layout)
    );

    if cfg!(debug_assertions) {
        let mut room_ids = HashSet::new();
        for room in layout.rooms() {
            assert!(
                room_ids.insert(room.id.as_str()),
                "Layout has duplicate room id {}",
                room.id
            );
        }
    }
}

/// Validate that an assignment did not add or remove rooms or seats
pub fn assert_same_topology(before: &Layout, after: &Layout) {
    debug_assert_eq!(
        before.shape(),
        after.shape(),
        "Assignment changed the room/seat topology"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Room};

    fn seat(layout: &mut Layout, at: SeatRef, person: &Person) {
        layout.rooms[at.room].seats[at.seat].occupant = Some(person.clone());
    }

    #[test]
    fn test_valid_layout() {
        let mut layout = Layout::new();
        seat(&mut layout, SeatRef::new(0, 0), &Person::new("me", "Okasha Arshad"));
        seat(&mut layout, SeatRef::new(2, 1), &Person::new("2", "Bob Smith"));

        assert!(duplicate_occupants(&layout).is_empty());
        assert_layout_invariants(&layout);
    }

    #[test]
    fn test_duplicates_reported() {
        let mut layout = Layout::new();
        let bob = Person::new("2", "Bob Smith");
        seat(&mut layout, SeatRef::new(0, 1), &bob);
        seat(&mut layout, SeatRef::new(1, 3), &bob);

        let dups = duplicate_occupants(&layout);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].0, PersonId::from("2"));
        assert_eq!(dups[0].1, vec![SeatRef::new(0, 1), SeatRef::new(1, 3)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "more than one seat")]
    fn test_duplicate_occupant_panics() {
        let mut layout = Layout::new();
        let me = Person::new("me", "Okasha Arshad");
        seat(&mut layout, SeatRef::new(0, 0), &me);
        seat(&mut layout, SeatRef::new(0, 1), &me);
        assert_layout_invariants(&layout);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate room id r1")]
    fn test_duplicate_room_id_panics() {
        let mut layout = Layout::new();
        layout.rooms[1].id = "r1".to_string();
        assert_layout_invariants(&layout);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "topology")]
    fn test_topology_change_panics() {
        let before = Layout::new();
        let mut after = Layout::new();
        after.rooms.push(Room::new("r4", "Room 4", 4));
        assert_same_topology(&before, &after);
    }
}
