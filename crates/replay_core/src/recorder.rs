//! Replay Session Controller
//!
//! Owns the recording set, the capture pipeline and - while a replay is
//! running - the playback clock, and drives the external camera and match
//! control collaborators through the two-pass completion protocol:
//!
//! 1. `begin_replay(team)` arms a session at the window's newest edge and
//!    enables that team's wide field camera.
//! 2. When the first pass completes, the field camera is swapped for the
//!    goal-framed camera.
//! 3. When the second pass completes, the ball is handed back to live
//!    physics and the match resumes with a kickoff.
//!
//! The host's match state machine owns the per-tick mode flag and calls
//! `advance` exactly once per fixed simulation tick. Recording and playback
//! are therefore mutually exclusive per tick by construction.

use log::{debug, info};

use crate::capture::CapturePipeline;
use crate::error::{ReplayError, Result};
use crate::playback::{PassCompletion, PlaybackClock};
use crate::stage::{ActorStage, MatchControl, MatchMode, ReplayCameras};
use crate::track::RecordingSet;
use crate::window::WINDOW_FRAMES;

/// An in-flight replay: the clock plus the team whose goal framed it.
#[derive(Debug)]
struct ActiveReplay {
    clock: PlaybackClock,
    scoring_team: usize,
}

/// Rolling recorder and replay player for one match session.
pub struct ReplayController {
    set: RecordingSet,
    capture: CapturePipeline,
    replay: Option<ActiveReplay>,
}

impl ReplayController {
    /// Size the controller from the live roster. The roster is fixed for
    /// the session; replays address tracks by these dimensions forever
    /// after.
    pub fn new(teams: usize, players_per_team: usize) -> Result<Self> {
        let set = RecordingSet::new(teams, players_per_team)?;
        Ok(Self { set, capture: CapturePipeline::new(), replay: None })
    }

    /// Run one simulation tick in the given mode.
    ///
    /// `Live` captures one frame of every actor, `Replay` presents the next
    /// playback frame, `Cheering` does nothing. A `Replay` tick without an
    /// armed session is a no-op; arming is the host's responsibility via
    /// `begin_replay`.
    pub fn advance(
        &mut self,
        mode: MatchMode,
        stage: &mut impl ActorStage,
        cameras: &mut impl ReplayCameras,
        control: &mut impl MatchControl,
    ) {
        match mode {
            MatchMode::Live => self.capture.tick(&mut self.set, stage),
            MatchMode::Cheering => {}
            MatchMode::Replay => self.replay_tick(stage, cameras, control),
        }
    }

    /// Arm a replay of the current window, framed around `scoring_team`.
    ///
    /// Playback starts at the most recently captured frame and wraps
    /// through the full window twice. Fails if the team index is outside
    /// the roster, if a replay is already running, or if fewer than a full
    /// window of frames has been recorded so far.
    pub fn begin_replay(
        &mut self,
        scoring_team: usize,
        cameras: &mut impl ReplayCameras,
    ) -> Result<()> {
        if scoring_team >= self.set.teams() {
            return Err(ReplayError::TeamOutOfRange { team: scoring_team, teams: self.set.teams() });
        }
        if self.replay.is_some() {
            return Err(ReplayError::ReplayInProgress);
        }
        if !self.capture.window_filled() {
            return Err(ReplayError::WindowNotFilled {
                recorded: self.capture.frames_recorded(),
                required: WINDOW_FRAMES as u64,
            });
        }

        info!(
            "replay armed for team {} at head slot {}",
            scoring_team,
            self.capture.head().slot()
        );
        cameras.set_field_camera(scoring_team, true);
        self.replay = Some(ActiveReplay {
            clock: PlaybackClock::start_at(self.capture.head()),
            scoring_team,
        });
        Ok(())
    }

    fn replay_tick(
        &mut self,
        stage: &mut impl ActorStage,
        cameras: &mut impl ReplayCameras,
        control: &mut impl MatchControl,
    ) {
        let Some(active) = self.replay.as_mut() else {
            return;
        };

        match active.clock.tick(&self.set, stage) {
            None => {}
            Some(PassCompletion::First) => {
                debug!("replay pass 1 complete, cutting to goal camera");
                cameras.set_field_camera(active.scoring_team, false);
                cameras.set_goal_camera(active.scoring_team, true);
            }
            Some(PassCompletion::Second) => {
                info!("replay finished, releasing ball and resuming match");
                control.set_ball_kinematic(false);
                control.set_ball_gravity(true);
                control.kick_off();
                self.replay = None;
            }
        }
    }

    /// True while a replay session is armed.
    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    /// Total frames captured since the session started.
    pub fn frames_recorded(&self) -> u64 {
        self.capture.frames_recorded()
    }

    /// True once a full window of live frames exists to replay.
    pub fn replay_available(&self) -> bool {
        self.capture.window_filled()
    }

    /// Roster dimensions the session was sized with.
    pub fn roster(&self) -> (usize, usize) {
        (self.set.teams(), self.set.players_per_team())
    }
}
