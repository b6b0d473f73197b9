//! Seat assignment
//!
//! A person holds at most one seat across the whole layout. Assigning a
//! person to a new seat vacates their old one in the same update; seats
//! held by someone else cannot be taken.

use crate::invariants;
use crate::models::{Layout, Person, PersonId, SeatRef};

/// What an assignment did to the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The person now sits at `to`, having left `from` if they were seated
    Seated { from: Option<SeatRef>, to: SeatRef },
    /// The target seat belongs to someone else
    SeatTaken { occupant: PersonId },
    /// The person already sits in the target seat
    AlreadySeated,
    /// Nobody was selected
    NoSelection,
}

impl AssignOutcome {
    /// Returns true if the layout changed
    pub fn is_change(&self) -> bool {
        matches!(self, AssignOutcome::Seated { .. })
    }
}

/// Place `person` in seat `(room, seat)` and return the resulting layout.
///
/// No-op cases return a copy of `layout` unchanged.
///
/// # Panics
///
/// Panics if `(room, seat)` does not name a seat in `layout`. Callers holding
/// untrusted coordinates check [`Layout::contains`] first.
pub fn assign(layout: &Layout, person: Option<&Person>, room: usize, seat: usize) -> Layout {
    assign_with_outcome(layout, person, room, seat).0
}

/// Like [`assign`], but also reports which case applied
pub fn assign_with_outcome(
    layout: &Layout,
    person: Option<&Person>,
    room: usize,
    seat: usize,
) -> (Layout, AssignOutcome) {
    let Some(person) = person else {
        return (layout.clone(), AssignOutcome::NoSelection);
    };

    let target = SeatRef::new(room, seat);
    let current = layout.seat_of(&person.id);

    let target_seat = match layout.seat(target) {
        Some(s) => s,
        None => panic!("Seat {} is outside the layout", target),
    };

    if let Some(occupant) = target_seat.occupant() {
        if occupant.id != person.id {
            return (
                layout.clone(),
                AssignOutcome::SeatTaken {
                    occupant: occupant.id.clone(),
                },
            );
        }
    }

    if current == Some(target) {
        return (layout.clone(), AssignOutcome::AlreadySeated);
    }

    let mut next = layout.clone();
    if let Some(from) = current {
        next.rooms[from.room].seats[from.seat].occupant = None;
    }
    next.rooms[target.room].seats[target.seat].occupant = Some(person.clone());

    invariants::assert_same_topology(layout, &next);
    invariants::assert_layout_invariants(&next);

    (
        next,
        AssignOutcome::Seated {
            from: current,
            to: target,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::duplicate_occupants;

    fn me() -> Person {
        Person::new("me", "Okasha Arshad")
    }

    fn bob() -> Person {
        Person::new("2", "Bob Smith")
    }

    #[test]
    fn test_assign_empty_seat() {
        let layout = Layout::new();
        let (next, outcome) = assign_with_outcome(&layout, Some(&me()), 0, 0);

        assert_eq!(
            outcome,
            AssignOutcome::Seated {
                from: None,
                to: SeatRef::new(0, 0)
            }
        );
        assert_eq!(next.occupant(SeatRef::new(0, 0)), Some(&me()));
        // Old snapshot is untouched
        assert_eq!(layout.occupied_count(), 0);
    }

    #[test]
    fn test_no_selection_is_noop() {
        let layout = assign(&Layout::new(), Some(&bob()), 1, 1);
        let (next, outcome) = assign_with_outcome(&layout, None, 0, 0);

        assert_eq!(outcome, AssignOutcome::NoSelection);
        assert_eq!(next, layout);
    }

    #[test]
    fn test_foreign_seat_not_stealable() {
        let layout = assign(&Layout::new(), Some(&bob()), 0, 1);
        let (next, outcome) = assign_with_outcome(&layout, Some(&me()), 0, 1);

        assert_eq!(
            outcome,
            AssignOutcome::SeatTaken {
                occupant: PersonId::from("2")
            }
        );
        assert_eq!(next, layout);
        assert_eq!(next.seat_of(&me().id), None);
    }

    #[test]
    fn test_foreign_seat_keeps_current_seat() {
        let layout = assign(&Layout::new(), Some(&bob()), 0, 1);
        let layout = assign(&layout, Some(&me()), 2, 0);
        let next = assign(&layout, Some(&me()), 0, 1);

        assert_eq!(next, layout);
        assert_eq!(next.seat_of(&me().id), Some(SeatRef::new(2, 0)));
    }

    #[test]
    fn test_reseat_own_seat_is_noop() {
        let layout = assign(&Layout::new(), Some(&me()), 1, 3);
        let (next, outcome) = assign_with_outcome(&layout, Some(&me()), 1, 3);

        assert_eq!(outcome, AssignOutcome::AlreadySeated);
        assert_eq!(next, layout);
    }

    #[test]
    fn test_move_vacates_previous_seat() {
        let layout = assign(&Layout::new(), Some(&bob()), 2, 2);
        let layout = assign(&layout, Some(&me()), 0, 0);
        let (next, outcome) = assign_with_outcome(&layout, Some(&me()), 1, 2);

        assert_eq!(
            outcome,
            AssignOutcome::Seated {
                from: Some(SeatRef::new(0, 0)),
                to: SeatRef::new(1, 2)
            }
        );
        assert!(next.seat(SeatRef::new(0, 0)).unwrap().is_empty());
        assert_eq!(next.occupant(SeatRef::new(1, 2)), Some(&me()));

        for at in next.seat_refs() {
            if at != SeatRef::new(0, 0) && at != SeatRef::new(1, 2) {
                assert_eq!(next.seat(at), layout.seat(at), "seat {} changed", at);
            }
        }
    }

    #[test]
    fn test_assign_is_idempotent() {
        let once = assign(&Layout::new(), Some(&me()), 2, 1);
        let twice = assign(&once, Some(&me()), 2, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_occupancy_over_many_moves() {
        let people = [me(), bob(), Person::new("1", "Alice Johnson")];
        let mut layout = Layout::new();

        for step in 0..60usize {
            let person = &people[step % people.len()];
            let room = (step * 7) % 3;
            let seat = (step * 5) % 4;
            layout = assign(&layout, Some(person), room, seat);
            assert!(duplicate_occupants(&layout).is_empty(), "step {}", step);
        }
    }

    #[test]
    #[should_panic(expected = "outside the layout")]
    fn test_out_of_range_panics() {
        assign(&Layout::new(), Some(&me()), 3, 0);
    }

    #[test]
    fn test_is_change() {
        assert!(AssignOutcome::Seated {
            from: None,
            to: SeatRef::new(0, 0)
        }
        .is_change());
        assert!(!AssignOutcome::AlreadySeated.is_change());
        assert!(!AssignOutcome::NoSelection.is_change());
    }
}
