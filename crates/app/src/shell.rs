//! Interactive shell: reads commands, forwards them to the session and
//! redraws the current tab

use std::io::{self, BufRead, Write};

use seatmap_core::Error;

use crate::commands::Command;
use crate::render;
use crate::state::{AppState, Tab};

const PROMPT: &str = "seatmap> ";

/// Result of handling one command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Draw whichever tab is active
pub fn render_current(state: &AppState) -> String {
    let session = state.session.lock();
    match state.current_tab() {
        Tab::Home => render::render_home(&session.home_view()),
        Tab::Explore => render::render_explore(&session.explore_view()),
    }
}

/// Apply one parsed command
pub fn handle(state: &AppState, command: Command) -> Reply {
    match command {
        Command::Tab(tab) => {
            state.set_current_tab(tab);
            tracing::debug!(tab = %tab, "Switched tab");
            Reply::text(render_current(state))
        }
        Command::Select(id) => match state.session.select_person(&id) {
            Ok(_) => Reply::text(render_current(state)),
            Err(e) => Reply::text(e.to_string()),
        },
        Command::Sit(at) => {
            let mut session = state.session.lock();
            let person_name = session.selected().name.clone();
            let result = session.assign_selected(at);
            match result {
                Ok(outcome) => {
                    let message = render::describe_outcome(
                        &outcome,
                        &person_name,
                        session.layout(),
                        session.roster(),
                    );
                    drop(session);
                    if outcome.is_change() {
                        Reply::text(format!("{}\n{}", message, render_current(state)))
                    } else {
                        Reply::text(message)
                    }
                }
                Err(Error::SeatOutOfRange { room, seat }) => {
                    Reply::text(format!("There is no seat {} in room {}", seat + 1, room + 1))
                }
                Err(e) => Reply::text(e.to_string()),
            }
        }
        Command::Undo => {
            let undone = state.session.lock().undo();
            if undone {
                Reply::text(render_current(state))
            } else {
                Reply::text("Nothing to undo")
            }
        }
        Command::Redo => {
            let redone = state.session.lock().redo();
            if redone {
                Reply::text(render_current(state))
            } else {
                Reply::text("Nothing to redo")
            }
        }
        Command::Reset => {
            let cleared = state.session.lock().reset();
            if cleared {
                Reply::text(render_current(state))
            } else {
                Reply::text("All rooms are already empty")
            }
        }
        Command::Roster => Reply::text(render::render_roster(state.session.lock().roster())),
        Command::Json => match state.session.lock().explore_view().to_json() {
            Ok(json) => Reply::text(json),
            Err(e) => Reply::text(e.to_string()),
        },
        Command::Show => Reply::text(render_current(state)),
        Command::Help => Reply::text(render::HELP),
        Command::Quit => Reply {
            text: String::new(),
            quit: true,
        },
    }
}

/// Run the read-eval-print loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(state: &AppState, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", render_current(state))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let reply = match line.parse::<Command>() {
            Ok(command) => handle(state, command),
            Err(e) => Reply::text(e.to_string()),
        };

        if reply.quit {
            break;
        }
        if !reply.text.is_empty() {
            writeln!(output, "{}", reply.text.trim_end())?;
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
