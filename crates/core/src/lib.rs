//! Seatmap Core Library
//!
//! Room seating models, the single-occupancy seat assignment engine,
//! roster seed data and session state for the Seatmap explore screen.

pub mod config;
pub mod error;
pub mod invariants;
pub mod models;
pub mod roster;
pub mod seating;
pub mod session;
pub mod view;

pub use config::{load_roster, RosterConfig, RosterSource};
pub use error::{Error, Result};
pub use models::*;
pub use roster::{Roster, SELF_ID};
pub use seating::{assign, assign_with_outcome, AssignOutcome};
pub use session::{Session, SharedSession, MAX_HISTORY};
pub use view::{ExploreView, HomeView, RoomView, RosterEntryView, SeatState, SeatView};
