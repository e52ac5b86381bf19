//! Stage Interfaces
//!
//! The recorder never reaches into the simulation through ambient globals;
//! everything it touches comes in through these traits, passed per call by
//! the host's fixed-timestep loop. The host engine owns actor transforms,
//! animation parameters, cameras, and the ball's rigid body - this core
//! only reads them on recording ticks and writes them on playback ticks.

use serde::{Deserialize, Serialize};

use crate::frame::{ActorFrame, Pose};

/// Addresses one player actor's recording slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId {
    pub team: usize,
    pub player: usize,
}

impl PlayerId {
    pub fn new(team: usize, player: usize) -> Self {
        Self { team, player }
    }
}

/// Per-tick mode flag owned by the host's match state machine.
///
/// Recording and playback are mutually exclusive per tick; the celebratory
/// pause after a goal runs neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Normal play: capture one frame per actor this tick.
    Live,
    /// Post-goal celebration: neither capture nor playback runs.
    Cheering,
    /// Replay in progress: drive actors from the recorded window.
    Replay,
}

/// Live actor state, read during recording ticks and written back during
/// playback ticks.
pub trait ActorStage {
    /// Current ball transform.
    fn ball_pose(&self) -> Pose;

    /// Snapshot one player's transform and animation channels.
    fn capture_player(&self, id: PlayerId) -> ActorFrame;

    /// Drive the ball's transform from the replay.
    fn set_ball_pose(&mut self, pose: &Pose);

    /// Drive one player's transform and animation channels from the replay.
    fn apply_player(&mut self, id: PlayerId, frame: &ActorFrame);
}

/// Replay camera pairs, one field/goal pair per team.
pub trait ReplayCameras {
    fn set_field_camera(&mut self, team: usize, enabled: bool);
    fn set_goal_camera(&mut self, team: usize, enabled: bool);
}

/// Hooks used exactly once at the end of a replay session to hand the ball
/// back to live physics and restart the match.
pub trait MatchControl {
    fn set_ball_kinematic(&mut self, kinematic: bool);
    fn set_ball_gravity(&mut self, gravity: bool);
    fn kick_off(&mut self);
}
