//! Actor Frames
//!
//! One frame is one actor's observable state at one simulation tick: its
//! world transform plus the animation channels the renderer drives. Frames
//! are raw snapshots - capture trusts the live values verbatim and playback
//! writes them back verbatim (the slow-motion tail blends ball poses only).

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// World-space transform of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: Vector3::zeros(), rotation: UnitQuaternion::identity() }
    }
}

impl Pose {
    pub fn new(position: Vector3<f32>, rotation: UnitQuaternion<f32>) -> Self {
        Self { position, rotation }
    }

    /// Blend between two poses: linear on position, nlerp on rotation.
    pub fn blend(a: &Pose, b: &Pose, t: f32) -> Pose {
        Pose { position: a.position.lerp(&b.position, t), rotation: a.rotation.nlerp(&b.rotation, t) }
    }
}

/// Snapshot of one actor at one recorded tick.
///
/// Player actors use every channel. The ball uses only `pose`; its
/// animation channels stay at their defaults, mirroring how capture reads
/// the live actors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorFrame {
    pub pose: Pose,
    /// Blend weight of the shoot animation layer, in [0, 1].
    pub layer_weight_shoot: f32,
    /// Blend weight of the throw-in animation layer, in [0, 1].
    pub layer_weight_throw_in: f32,
    pub jump: bool,
    pub grounded: bool,
    pub freefall: bool,
    /// Locomotion speed driving the movement blend tree.
    pub speed: f32,
}

impl ActorFrame {
    /// Frame carrying only a transform (ball capture).
    pub fn from_pose(pose: Pose) -> Self {
        Self { pose, ..Default::default() }
    }
}
