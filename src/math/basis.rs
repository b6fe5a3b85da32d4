use glam::Vec3;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch never reaches ±90°, where cos(pitch) collapses the basis
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Yaw offset between the stored angle and the rebuild angle.
/// Stored yaw = 0 looks along +Z.
pub const YAW_OFFSET_DEG: f32 = 90.0;

const DEGENERATE_EPSILON: f32 = 1e-6;

/// Orthonormal camera frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Build a frame around a forward vector (normalized here)
    pub fn from_forward(forward: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
        let right = right_from_forward(forward);
        let up = right.cross(forward);
        Self { forward, right, up }
    }

    /// True when all three vectors are unit length and pairwise perpendicular
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.forward)
            && unit(self.right)
            && unit(self.up)
            && self.forward.dot(self.right).abs() <= tolerance
            && self.forward.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }
}

/// Rebuild the camera frame from yaw/pitch in degrees
pub fn basis_from_angles(yaw_deg: f32, pitch_deg: f32) -> Basis {
    let yaw_rad = (yaw_deg + YAW_OFFSET_DEG).to_radians();
    let pitch_rad = pitch_deg.to_radians();

    let (sin_pitch, cos_pitch) = pitch_rad.sin_cos();
    let (sin_yaw, cos_yaw) = yaw_rad.sin_cos();

    let forward = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw);
    let right = right_from_forward(forward);
    let up = right.cross(forward);

    Basis { forward, right, up }
}

/// Inverse of [`basis_from_angles`] for a unit forward vector.
/// Returns (yaw, pitch) in degrees.
pub fn angles_from_forward(forward: Vec3) -> (f32, f32) {
    let yaw = forward.z.atan2(forward.x).to_degrees() - YAW_OFFSET_DEG;
    let pitch = forward.y.clamp(-1.0, 1.0).asin().to_degrees();
    (yaw, pitch)
}

/// normalize(forward × world up), falling back to +X when forward is vertical
pub fn right_from_forward(forward: Vec3) -> Vec3 {
    let cross = forward.cross(WORLD_UP);
    let length = cross.length();

    if !length.is_finite() || length < DEGENERATE_EPSILON {
        log::warn!(
            "Degenerate camera basis (forward = {:?}), falling back to world X",
            forward
        );
        return Vec3::X;
    }

    cross / length
}
