//! # replay_core - Rolling Goal-Replay Recorder
//!
//! Fixed-capacity, multi-actor replay recorder and player for a tick-driven
//! football simulation. While the match runs live, the controller keeps the
//! most recent five seconds of every actor's observable state (ball plus
//! full roster) in circular per-actor tracks. When a goal triggers a
//! replay, the recorded window is played back over the live actors twice:
//! real-time pacing with a half-rate slow-motion tail, a camera cut between
//! the passes, and a hand-back to live physics at the end.
//!
//! ## Design
//! - Single-threaded and cooperative: everything runs synchronously inside
//!   the host's fixed-timestep update, once per tick. Recording and
//!   playback are mutually exclusive per tick via [`stage::MatchMode`].
//! - No ambient globals: the host engine is reached only through the
//!   collaborator traits in [`stage`], passed per call.
//! - All circular indexing goes through [`ring::RingCursor`]; write and
//!   read cursors are owned by the capture pipeline and playback clock
//!   respectively and never run in the same tick.

pub mod capture;
pub mod error;
pub mod frame;
pub mod playback;
pub mod recorder;
pub mod ring;
pub mod stage;
pub mod track;
pub mod window;

pub use error::{ReplayError, Result};
pub use frame::{ActorFrame, Pose};
pub use recorder::ReplayController;
pub use stage::{ActorStage, MatchControl, MatchMode, PlayerId, ReplayCameras};
pub use window::{REALTIME_FRAMES, SLOWMOTION_FRAMES, WINDOW_FRAMES};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
