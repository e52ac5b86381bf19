/// window.rs
/// Replay Window Constants
///
/// The recorder keeps a rolling window of the most recent frames, captured
/// once per fixed simulation tick. Playback runs the window back in two
/// pacing phases: real-time for the bulk, half-rate for the tail.

/// Fixed simulation tick rate (ticks per second)
pub const TICK_RATE_HZ: usize = 50;

/// Length of the recorded window in seconds
pub const WINDOW_SECONDS: usize = 5;

/// Total frames held per track (the rolling window)
pub const WINDOW_FRAMES: usize = TICK_RATE_HZ * WINDOW_SECONDS;

/// Frames replayed at real-time pacing before the slow-motion tail begins
pub const REALTIME_FRAMES: usize = 200;

/// Frames covered by the half-rate slow-motion tail
pub const SLOWMOTION_FRAMES: usize = WINDOW_FRAMES - REALTIME_FRAMES;

/// Full passes through the window per replay session
pub const PASSES_PER_REPLAY: u8 = 2;

// Compile-time validation
const _: () = assert!(WINDOW_FRAMES == 250);
const _: () = assert!(REALTIME_FRAMES < WINDOW_FRAMES);
const _: () = assert!(REALTIME_FRAMES + SLOWMOTION_FRAMES == WINDOW_FRAMES);
