//! Data models for Seatmap

mod person;
mod room;
mod layout;

pub use person::*;
pub use room::*;
pub use layout::*;
