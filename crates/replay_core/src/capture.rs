//! Capture Pipeline
//!
//! Runs once per live simulation tick: advances the shared write cursor by
//! one slot and snapshots every actor into its track at that slot. The
//! window always holds exactly the most recent `WINDOW_FRAMES` ticks; the
//! oldest frame falls off automatically through the circular index. Values
//! are trusted verbatim - no filtering or validation on capture.

use crate::frame::ActorFrame;
use crate::ring::RingCursor;
use crate::stage::{ActorStage, PlayerId};
use crate::track::RecordingSet;
use crate::window::WINDOW_FRAMES;

/// Owner of the write cursor. Nothing else mutates it.
#[derive(Debug, Clone)]
pub struct CapturePipeline {
    write: RingCursor,
    frames_recorded: u64,
}

impl Default for CapturePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CapturePipeline {
    pub fn new() -> Self {
        // Park the cursor on the last slot so the first advance lands the
        // first frame on slot 0 and the head always equals
        // (ticks_recorded - 1) mod WINDOW_FRAMES.
        let write = RingCursor::new(WINDOW_FRAMES).prev();
        Self { write, frames_recorded: 0 }
    }

    /// Record one tick: every actor is written at the same slot, keeping
    /// all tracks in lock-step.
    pub fn tick(&mut self, set: &mut RecordingSet, stage: &impl ActorStage) {
        self.write.advance();
        let slot = self.write.slot();

        for team in 0..set.teams() {
            for player in 0..set.players_per_team() {
                let id = PlayerId::new(team, player);
                set.write_player(id, slot, stage.capture_player(id));
            }
        }
        set.write_ball(slot, ActorFrame::from_pose(stage.ball_pose()));

        self.frames_recorded += 1;
    }

    /// Cursor of the most recently written slot (the head).
    pub fn head(&self) -> RingCursor {
        self.write
    }

    /// Total frames captured since session start.
    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    /// True once the rolling window contains no stale default frames.
    pub fn window_filled(&self) -> bool {
        self.frames_recorded >= WINDOW_FRAMES as u64
    }
}
