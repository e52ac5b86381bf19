//! Tracks and the Recording Set
//!
//! One track is a fixed-length circular sequence of frames for exactly one
//! actor. The recording set owns one track for the ball plus one per player,
//! sized once at session start from the live roster; the roster cannot
//! change afterwards. All tracks move in lock-step: every recording tick
//! writes every track at the same slot.

use crate::error::{ReplayError, Result};
use crate::frame::ActorFrame;
use crate::stage::PlayerId;
use crate::window::WINDOW_FRAMES;

/// Fixed-length circular frame storage for one actor.
#[derive(Debug, Clone)]
pub struct Track {
    frames: Vec<ActorFrame>,
}

impl Track {
    fn new() -> Self {
        Self { frames: vec![ActorFrame::default(); WINDOW_FRAMES] }
    }

    /// Store `frame` at `slot`. Slots come from a `RingCursor`, so they are
    /// already reduced into range.
    pub fn write(&mut self, slot: usize, frame: ActorFrame) {
        self.frames[slot] = frame;
    }

    pub fn frame(&self, slot: usize) -> &ActorFrame {
        &self.frames[slot]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// All tracks for one session: the ball plus `teams x players_per_team`
/// player tracks.
#[derive(Debug, Clone)]
pub struct RecordingSet {
    ball: Track,
    players: Vec<Vec<Track>>,
    teams: usize,
    players_per_team: usize,
}

impl RecordingSet {
    /// Size the set from the live roster. The roster is fixed for the
    /// lifetime of the session; an empty roster is a configuration error.
    pub fn new(teams: usize, players_per_team: usize) -> Result<Self> {
        if teams == 0 || players_per_team == 0 {
            return Err(ReplayError::EmptyRoster { teams, players_per_team });
        }
        let players =
            (0..teams).map(|_| (0..players_per_team).map(|_| Track::new()).collect()).collect();
        Ok(Self { ball: Track::new(), players, teams, players_per_team })
    }

    pub fn teams(&self) -> usize {
        self.teams
    }

    pub fn players_per_team(&self) -> usize {
        self.players_per_team
    }

    pub fn write_ball(&mut self, slot: usize, frame: ActorFrame) {
        self.ball.write(slot, frame);
    }

    pub fn write_player(&mut self, id: PlayerId, slot: usize, frame: ActorFrame) {
        self.players[id.team][id.player].write(slot, frame);
    }

    pub fn ball_frame(&self, slot: usize) -> &ActorFrame {
        self.ball.frame(slot)
    }

    pub fn player_frame(&self, id: PlayerId, slot: usize) -> &ActorFrame {
        self.players[id.team][id.player].frame(slot)
    }
}
