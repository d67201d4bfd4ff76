//! Minimal vector and angle value types shared with the host interface.
//!
//! These deliberately stay small: the engine only ever stores captured
//! values and compares squared distances for drift correction. All other
//! geometry is the host's concern.

/// A position or velocity in simulation space.
///
/// # Examples
///
/// ```
/// use revenant_core::Vec3;
///
/// let a = Vec3::new(0.0, 0.0, 0.0);
/// let b = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(a.distance_sqr(b), 25.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Construct from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Used for drift checks; avoids the square root since the
    /// correction threshold is itself expressed squared.
    pub fn distance_sqr(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// An orientation as pitch/yaw/roll in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angles {
    /// Rotation around the lateral axis.
    pub pitch: f32,
    /// Rotation around the vertical axis.
    pub yaw: f32,
    /// Rotation around the longitudinal axis.
    pub roll: f32,
}

impl Angles {
    /// Construct from components.
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}
