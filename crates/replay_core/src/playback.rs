//! Playback Clock
//!
//! Runs once per simulation tick while the match is in replay mode. The
//! read cursor tracks the most recently presented frame and is owned
//! exclusively by this clock. Pacing has two phases per pass:
//!
//! - real-time: the cursor advances one frame per tick and every actor
//!   receives its recorded frame verbatim;
//! - slow-motion tail (the last `SLOWMOTION_FRAMES` ticks of the pass): the
//!   cursor advances only every other tick. On hold ticks the ball is
//!   presented at the midpoint between the current and next frame, so its
//!   motion stays smooth at half rate. Players are never interpolated -
//!   they hold their current frame, which doubles their visible frame
//!   length through the tail.
//!
//! A pass is a fixed `WINDOW_FRAMES` ticks. The first completion loops the
//! window again without touching the cursor; the second ends the session.
//! The session controller reacts to both through `PassCompletion`.

use crate::frame::Pose;
use crate::ring::RingCursor;
use crate::stage::{ActorStage, PlayerId};
use crate::track::RecordingSet;
use crate::window::{PASSES_PER_REPLAY, REALTIME_FRAMES, WINDOW_FRAMES};

/// Raised by `tick` when a full pass through the window finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassCompletion {
    /// First pass done: loop the window again (camera switch point).
    First,
    /// Second pass done: the replay session is over.
    Second,
}

/// Variable-rate cursor over the recorded window.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    read: RingCursor,
    frames_played: usize,
    passes_completed: u8,
    /// Tail toggle: when set, the next tail tick holds the cursor and
    /// blends the ball instead of advancing.
    hold: bool,
}

impl PlaybackClock {
    /// Start a playback run at the window's newest edge.
    ///
    /// `read` denotes the most recently presented slot, so it is parked one
    /// slot behind the head: the first tick then advances onto the head and
    /// presents the newest captured frame first, wrapping through the full
    /// window from there.
    pub fn start_at(head: RingCursor) -> Self {
        Self { read: head.prev(), frames_played: 0, passes_completed: 0, hold: true }
    }

    /// Present the next playback tick onto the live actors.
    pub fn tick(
        &mut self,
        set: &RecordingSet,
        stage: &mut impl ActorStage,
    ) -> Option<PassCompletion> {
        if self.frames_played < REALTIME_FRAMES {
            self.read.advance();
            stage.set_ball_pose(&set.ball_frame(self.read.slot()).pose);
        } else if self.hold {
            let current = &set.ball_frame(self.read.slot()).pose;
            let next = &set.ball_frame(self.read.next_slot()).pose;
            stage.set_ball_pose(&Pose::blend(current, next, 0.5));
            self.hold = false;
        } else {
            self.read.advance();
            stage.set_ball_pose(&set.ball_frame(self.read.slot()).pose);
            self.hold = true;
        }

        // Players take their frame verbatim at the current cursor in both
        // phases; on hold ticks that repeats the previous frame.
        let slot = self.read.slot();
        for team in 0..set.teams() {
            for player in 0..set.players_per_team() {
                let id = PlayerId::new(team, player);
                stage.apply_player(id, set.player_frame(id, slot));
            }
        }

        self.frames_played += 1;
        if self.frames_played >= WINDOW_FRAMES {
            self.passes_completed += 1;
            if self.passes_completed < PASSES_PER_REPLAY {
                // Loop the window: tick counter restarts, cursor continues
                // from wherever it is.
                self.frames_played = 0;
                self.hold = true;
                return Some(PassCompletion::First);
            }
            return Some(PassCompletion::Second);
        }
        None
    }

    /// Playback ticks consumed in the current pass.
    pub fn frames_played(&self) -> usize {
        self.frames_played
    }

    /// Full passes completed so far (0, 1 or 2).
    pub fn passes_completed(&self) -> u8 {
        self.passes_completed
    }

    /// Slot of the most recently presented frame.
    pub fn cursor_slot(&self) -> usize {
        self.read.slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ActorFrame;
    use nalgebra::Vector3;

    /// Sink that logs every pose and player frame applied to it.
    #[derive(Default)]
    struct SinkStage {
        ball_history: Vec<Pose>,
        player_history: Vec<(PlayerId, ActorFrame)>,
    }

    impl ActorStage for SinkStage {
        fn ball_pose(&self) -> Pose {
            Pose::default()
        }

        fn capture_player(&self, _id: PlayerId) -> ActorFrame {
            ActorFrame::default()
        }

        fn set_ball_pose(&mut self, pose: &Pose) {
            self.ball_history.push(*pose);
        }

        fn apply_player(&mut self, id: PlayerId, frame: &ActorFrame) {
            self.player_history.push((id, *frame));
        }
    }

    fn frame_at_x(x: f32) -> ActorFrame {
        let mut frame = ActorFrame::default();
        frame.pose.position = Vector3::new(x, 0.0, 0.0);
        frame
    }

    /// Window where slot k holds x == k for ball and player alike, with
    /// the head on the last slot (a fully, exactly-once filled window).
    fn filled_window() -> (RecordingSet, RingCursor) {
        let mut set = RecordingSet::new(1, 1).unwrap();
        for slot in 0..WINDOW_FRAMES {
            set.write_ball(slot, frame_at_x(slot as f32));
            set.write_player(PlayerId::new(0, 0), slot, frame_at_x(slot as f32));
        }
        let head = RingCursor::new(WINDOW_FRAMES).prev(); // slot 249
        (set, head)
    }

    #[test]
    fn test_first_presented_frame_is_newest() {
        let (set, head) = filled_window();
        let mut clock = PlaybackClock::start_at(head);
        let mut stage = SinkStage::default();

        clock.tick(&set, &mut stage);
        assert_eq!(stage.ball_history[0].position.x, 249.0);
        assert_eq!(stage.player_history[0].1.pose.position.x, 249.0);
    }

    #[test]
    fn test_realtime_phase_advances_one_per_tick() {
        let (set, head) = filled_window();
        let mut clock = PlaybackClock::start_at(head);
        let mut stage = SinkStage::default();

        for _ in 0..REALTIME_FRAMES {
            assert_eq!(clock.tick(&set, &mut stage), None);
        }

        // newest first, then the window wraps to its oldest edge
        assert_eq!(stage.ball_history.len(), REALTIME_FRAMES);
        assert_eq!(stage.ball_history[0].position.x, 249.0);
        for tick in 1..REALTIME_FRAMES {
            assert_eq!(stage.ball_history[tick].position.x, (tick - 1) as f32);
        }
        assert_eq!(clock.cursor_slot(), 198);
        assert_eq!(clock.frames_played(), REALTIME_FRAMES);
    }

    #[test]
    fn test_tail_half_rate_with_ball_blend() {
        let (set, head) = filled_window();
        let mut clock = PlaybackClock::start_at(head);
        let mut stage = SinkStage::default();

        for _ in 0..REALTIME_FRAMES {
            clock.tick(&set, &mut stage);
        }
        let cursor_at_tail_start = clock.cursor_slot(); // 198
        stage.ball_history.clear();
        stage.player_history.clear();

        for _ in 0..(WINDOW_FRAMES - REALTIME_FRAMES - 1) {
            assert_eq!(clock.tick(&set, &mut stage), None);
        }
        assert_eq!(clock.tick(&set, &mut stage), Some(PassCompletion::First));

        // 50 tail ticks advance the cursor exactly 25 positions
        assert_eq!(clock.cursor_slot(), cursor_at_tail_start + 25);

        // ball: hold ticks show the midpoint of current and next frame,
        // advance ticks the next frame verbatim
        for pair in 0..25 {
            let base = cursor_at_tail_start as f32 + pair as f32;
            assert_eq!(stage.ball_history[pair * 2].position.x, base + 0.5);
            assert_eq!(stage.ball_history[pair * 2 + 1].position.x, base + 1.0);
        }

        // players: verbatim at the cursor, so hold ticks repeat the frame
        assert_eq!(stage.player_history[0].1.pose.position.x, cursor_at_tail_start as f32);
        assert_eq!(stage.player_history[1].1.pose.position.x, cursor_at_tail_start as f32 + 1.0);
        assert_eq!(stage.player_history[2].1.pose.position.x, cursor_at_tail_start as f32 + 1.0);
        assert_eq!(stage.player_history[3].1.pose.position.x, cursor_at_tail_start as f32 + 2.0);
    }

    #[test]
    fn test_pass_protocol_and_cursor_continuity() {
        let (set, head) = filled_window();
        let mut clock = PlaybackClock::start_at(head);
        let mut stage = SinkStage::default();

        let mut completions = Vec::new();
        for _ in 0..WINDOW_FRAMES {
            if let Some(done) = clock.tick(&set, &mut stage) {
                completions.push((stage.ball_history.len(), done));
            }
        }
        assert_eq!(completions, vec![(WINDOW_FRAMES, PassCompletion::First)]);
        assert_eq!(clock.frames_played(), 0);
        assert_eq!(clock.passes_completed(), 1);

        let cursor_after_first_pass = clock.cursor_slot(); // 223
        assert_eq!(cursor_after_first_pass, 223);

        // second pass starts in real-time pacing from the same cursor
        clock.tick(&set, &mut stage);
        assert_eq!(clock.cursor_slot(), cursor_after_first_pass + 1);
        assert_eq!(stage.ball_history.last().unwrap().position.x, 224.0);

        for _ in 1..WINDOW_FRAMES - 1 {
            assert_eq!(clock.tick(&set, &mut stage), None);
        }
        assert_eq!(clock.tick(&set, &mut stage), Some(PassCompletion::Second));
        assert_eq!(clock.passes_completed(), 2);
        assert_eq!(stage.ball_history.len(), 2 * WINDOW_FRAMES);
    }

    #[test]
    fn test_blend_wraps_across_window_edge() {
        // Put the head mid-ring so the tail crosses the wrap point.
        let mut set = RecordingSet::new(1, 1).unwrap();
        for slot in 0..WINDOW_FRAMES {
            set.write_ball(slot, frame_at_x(slot as f32));
            set.write_player(PlayerId::new(0, 0), slot, frame_at_x(slot as f32));
        }
        let mut head = RingCursor::new(WINDOW_FRAMES);
        for _ in 0..99 {
            head.advance();
        }

        let mut clock = PlaybackClock::start_at(head);
        let mut stage = SinkStage::default();
        for _ in 0..WINDOW_FRAMES {
            clock.tick(&set, &mut stage);
        }

        // one pass advances 225 slots; the cursor starts one behind the
        // head, so it ends at (98 + 225) % 250 == 73
        assert_eq!(clock.cursor_slot(), 73);
        // somewhere in the run the presented x jumped from 249 back to 0
        let xs: Vec<f32> = stage.ball_history.iter().map(|p| p.position.x).collect();
        assert!(xs.windows(2).any(|w| w[0] == 249.0 && w[1] == 0.0));
    }
}
