//! Plain-text rendering of the screens

use seatmap_core::{AssignOutcome, ExploreView, HomeView, Layout, Roster, SeatRef, SeatState};

pub const HELP: &str = "\
Commands:
  tab home|explore   switch screens
  select <id>        pick someone from the roster
  sit <room> <seat>  put the selected person in a seat
  undo | redo        step through seating changes
  reset              empty every room
  roster             list people and their ids
  json               dump the explore screen as JSON
  show               redraw the current screen
  help               this text
  quit               leave";

pub fn render_home(view: &HomeView) -> String {
    let mut out = String::from("== Home ==\n");
    out.push_str(&format!(
        "  ({}) {}{}\n",
        view.initials,
        view.name,
        if view.online { "  * online" } else { "" }
    ));
    match &view.seat {
        Some((room_name, at)) => {
            out.push_str(&format!("  Seated in {}, seat {}\n", room_name, at.seat + 1));
        }
        None => out.push_str("  Not seated yet. Head to the explore tab to pick a seat.\n"),
    }
    out
}

pub fn render_explore(view: &ExploreView) -> String {
    let mut out = String::from("== Explore ==\nOnline Users\n");

    let strip: Vec<String> = view
        .roster
        .iter()
        .map(|entry| {
            let badge = if entry.selected {
                format!("[{}]", entry.initials)
            } else {
                format!(" {} ", entry.initials)
            };
            format!("{}{}", badge, if entry.online { "*" } else { " " })
        })
        .collect();
    out.push_str(&format!("  {}\n", strip.join(" ")));

    if let Some(selected) = view.roster.iter().find(|e| e.selected) {
        out.push_str(&format!("  Selected: {} ({})\n", selected.name, selected.id));
    }

    for room in &view.rooms {
        let cells: Vec<String> = room
            .seats
            .iter()
            .map(|seat| {
                let badge = seat.initials.as_deref().unwrap_or("+");
                let cell = match seat.state {
                    SeatState::Empty | SeatState::Occupied => format!(" {:<2} ", badge),
                    SeatState::Selected => format!(">{:<2}<", badge),
                };
                format!("{} [{}]", seat.index + 1, cell)
            })
            .collect();
        out.push_str(&format!("\n{}\n  {}\n", room.name, cells.join("  ")));
    }

    out
}

pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for person in roster.entries() {
        out.push_str(&format!(
            "  {:<4} {:<3} {}{}\n",
            person.id,
            person.initials(),
            person.name,
            if person.online { "" } else { " (offline)" }
        ));
    }
    out
}

fn seat_label(layout: &Layout, at: SeatRef) -> String {
    let room = layout
        .room(at.room)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| format!("Room {}", at.room + 1));
    format!("{} seat {}", room, at.seat + 1)
}

/// One-line feedback for an assignment attempt
pub fn describe_outcome(
    outcome: &AssignOutcome,
    person_name: &str,
    layout: &Layout,
    roster: &Roster,
) -> String {
    match outcome {
        AssignOutcome::Seated { from: None, to } => {
            format!("{} took {}", person_name, seat_label(layout, *to))
        }
        AssignOutcome::Seated {
            from: Some(from),
            to,
        } => format!(
            "{} moved from {} to {}",
            person_name,
            seat_label(layout, *from),
            seat_label(layout, *to)
        ),
        AssignOutcome::SeatTaken { occupant } => {
            let name = roster
                .find(occupant)
                .map(|p| p.name.as_str())
                .unwrap_or_else(|| occupant.as_str());
            format!("That seat is taken by {}", name)
        }
        AssignOutcome::AlreadySeated => format!("{} is already in that seat", person_name),
        AssignOutcome::NoSelection => "Select someone first".to_string(),
    }
}
