//! Ring Cursor
//!
//! All circular indexing into the recorded window goes through this type so
//! the modulo arithmetic lives in exactly one place. A cursor identifies a
//! storage slot; `advance` moves it forward one slot with wrap-around,
//! `offset` peeks ahead without moving it.

use serde::{Deserialize, Serialize};

/// Circular index into a fixed-length track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingCursor {
    slot: usize,
    capacity: usize,
}

impl RingCursor {
    /// Create a cursor at slot 0 of a ring with `capacity` slots.
    ///
    /// `capacity` must be non-zero; the recording window is sized from
    /// compile-time constants so this is a configuration invariant, not a
    /// runtime error surface.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self { slot: 0, capacity }
    }

    /// Current storage slot.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Ring capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Move forward one slot, wrapping at the end of the ring.
    pub fn advance(&mut self) {
        self.slot = (self.slot + 1) % self.capacity;
    }

    /// Slot `steps` ahead of this cursor, without moving it.
    pub fn offset(&self, steps: usize) -> usize {
        (self.slot + steps % self.capacity) % self.capacity
    }

    /// Slot immediately after this cursor.
    pub fn next_slot(&self) -> usize {
        self.offset(1)
    }

    /// Cursor one slot behind this one.
    pub fn prev(&self) -> RingCursor {
        RingCursor { slot: (self.slot + self.capacity - 1) % self.capacity, capacity: self.capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_wraps() {
        let mut cursor = RingCursor::new(3);
        assert_eq!(cursor.slot(), 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slot(), 2);
        cursor.advance();
        assert_eq!(cursor.slot(), 0);
    }

    #[test]
    fn test_offset_and_next() {
        let mut cursor = RingCursor::new(250);
        for _ in 0..249 {
            cursor.advance();
        }
        assert_eq!(cursor.slot(), 249);
        assert_eq!(cursor.next_slot(), 0);
        assert_eq!(cursor.offset(0), 249);
        assert_eq!(cursor.offset(2), 1);
        assert_eq!(cursor.offset(250), 249);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let cursor = RingCursor::new(250);
        assert_eq!(cursor.prev().slot(), 249);
        assert_eq!(cursor.prev().prev().slot(), 248);
    }

    #[test]
    #[should_panic(expected = "ring capacity must be non-zero")]
    fn test_zero_capacity_rejected() {
        let _ = RingCursor::new(0);
    }

    proptest! {
        /// Advancing k times from slot 0 always lands on k mod capacity.
        #[test]
        fn prop_advance_is_modular(k in 0usize..10_000, capacity in 1usize..512) {
            let mut cursor = RingCursor::new(capacity);
            for _ in 0..k {
                cursor.advance();
            }
            prop_assert_eq!(cursor.slot(), k % capacity);
        }

        /// offset never leaves the ring and agrees with plain modulo.
        #[test]
        fn prop_offset_is_modular(start in 0usize..512, steps in 0usize..10_000, capacity in 1usize..512) {
            let mut cursor = RingCursor::new(capacity);
            for _ in 0..start {
                cursor.advance();
            }
            prop_assert_eq!(cursor.offset(steps), (start + steps) % capacity);
        }
    }
}
