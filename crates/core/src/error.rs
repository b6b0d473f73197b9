//! Error types for Seatmap Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Duplicate person id: {0}")]
    DuplicatePerson(String),

    #[error("No seat {seat} in room {room}")]
    SeatOutOfRange { room: usize, seat: usize },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Roster parse error: {0}")]
    RosterParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
