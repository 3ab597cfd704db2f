//! Rotation descriptor written for compiled elements.

use super::{Axis, Vec3};
use serde::{Deserialize, Serialize};

/// Single-axis element rotation as it appears in model JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRotation {
    /// Rotation angle in degrees. Not snapped to 22.5 degree steps.
    pub angle: f64,
    /// Axis to rotate around.
    pub axis: Axis,
    /// Pivot point in model coordinates.
    pub origin: Vec3,
    /// Whether the element is scaled back up after rotation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rescale: bool,
}

impl ElementRotation {
    /// Build a descriptor from a cube rotation vector.
    ///
    /// The axis is the first non-zero component in x, y, z order, or
    /// `fallback` when the vector is zero.
    pub fn from_euler(rotation: Vec3, origin: Vec3, fallback: Axis) -> Self {
        let axis = dominant_axis(rotation).unwrap_or(fallback);
        Self {
            angle: rotation[axis.index()],
            axis,
            origin,
            rescale: false,
        }
    }

}

/// First axis with a non-zero rotation component.
pub fn dominant_axis(rotation: Vec3) -> Option<Axis> {
    Axis::ALL.into_iter().find(|axis| rotation[axis.index()] != 0.0)
}

/// Number of axes with a non-zero rotation component.
pub fn rotated_axis_count(rotation: &Vec3) -> usize {
    rotation.iter().filter(|v| **v != 0.0).count()
}
