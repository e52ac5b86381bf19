//! Replay Errors
//!
//! Every error here is a precondition violation by the caller; the core
//! itself has no I/O and no recoverable failure path. Indexing is modular
//! by construction, so out-of-bounds reads cannot occur once a session is
//! validly configured.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error("roster must have at least one team and one player per team (teams: {teams}, players_per_team: {players_per_team})")]
    EmptyRoster { teams: usize, players_per_team: usize },

    #[error("team index {team} out of range (roster has {teams} teams)")]
    TeamOutOfRange { team: usize, teams: usize },

    #[error("a replay is already in progress")]
    ReplayInProgress,

    #[error("recorded window not yet filled ({recorded}/{required} frames)")]
    WindowNotFilled { recorded: u64, required: u64 },
}

pub type Result<T> = std::result::Result<T, ReplayError>;
