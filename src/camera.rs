use glam::Vec3;

use crate::accumulation::FrameCounters;
use crate::math::Basis;
use crate::types::CameraUniform;

pub const DEFAULT_FOV_DEG: f32 = 45.0;

/// Camera geometry uploaded to the compute pass every tick.
///
/// Fields are read-only outside the crate; movement and look input reach
/// them only through [`OrientationController`](crate::orientation::OrientationController).
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    fov_deg: f32,
}

impl CameraState {
    /// Create a camera at `position` looking along `forward` (normalized here).
    /// `right` and `up` are derived so the stored frame starts orthonormal.
    pub fn new(position: Vec3, forward: Vec3, fov_deg: f32) -> Self {
        let Basis { forward, right, up } = Basis::from_forward(forward);
        Self {
            position,
            forward,
            right,
            up,
            fov_deg,
        }
    }

    pub fn looking_at(position: Vec3, target: Vec3, fov_deg: f32) -> Self {
        Self::new(position, target - position, fov_deg)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn basis(&self) -> Basis {
        Basis {
            forward: self.forward,
            right: self.right,
            up: self.up,
        }
    }

    /// Exact comparison of every stored scalar's bit pattern
    pub fn same_as(&self, other: &CameraState) -> bool {
        self.scalars()
            .iter()
            .zip(other.scalars().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    fn scalars(&self) -> [f32; 13] {
        let [px, py, pz] = self.position.to_array();
        let [fx, fy, fz] = self.forward.to_array();
        let [ux, uy, uz] = self.up.to_array();
        let [rx, ry, rz] = self.right.to_array();
        [px, py, pz, fx, fy, fz, ux, uy, uz, rx, ry, rz, self.fov_deg]
    }

    pub fn to_uniform(&self, counters: &FrameCounters) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            fov_deg: self.fov_deg,
            forward: self.forward.to_array(),
            total_frame_count: counters.total_frame_count as u32,
            right: self.right.to_array(),
            frames_since_last_move: counters.frames_since_last_move,
            up: self.up.to_array(),
            _pad: 0.0,
        }
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub(crate) fn set_basis(&mut self, basis: Basis) {
        self.forward = basis.forward;
        self.right = basis.right;
        self.up = basis.up;
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z, DEFAULT_FOV_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_startup_frame() {
        let camera = CameraState::default();
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.forward(), Vec3::NEG_Z);
        assert_eq!(camera.right(), Vec3::X);
        assert_eq!(camera.up(), Vec3::Y);
        assert_eq!(camera.fov_deg(), 45.0);
    }

    #[test]
    fn looking_at_points_forward_at_target() {
        let camera = CameraState::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 60.0);
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(camera.basis().is_orthonormal(1e-5));
    }

    #[test]
    fn same_as_is_reflexive() {
        let camera = CameraState::default();
        assert!(camera.same_as(&camera));
        assert!(camera.same_as(&camera.clone()));
    }

    #[test]
    fn same_as_detects_fov_change() {
        let a = CameraState::default();
        let b = CameraState::new(Vec3::ZERO, Vec3::NEG_Z, 46.0);
        assert!(!a.same_as(&b));
    }

    #[test]
    fn same_as_distinguishes_signed_zero() {
        let a = CameraState::new(Vec3::new(0.0, 1.0, 2.0), Vec3::NEG_Z, 45.0);
        let b = CameraState::new(Vec3::new(-0.0, 1.0, 2.0), Vec3::NEG_Z, 45.0);
        assert!(!a.same_as(&b));
    }

    #[test]
    fn translate_moves_only_position() {
        let mut camera = CameraState::default();
        camera.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn uniform_carries_fields_and_counters() {
        let camera = CameraState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z, 50.0);
        let counters = FrameCounters {
            total_frame_count: 42,
            frames_since_last_move: 7,
        };
        let uniform = camera.to_uniform(&counters);

        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fov_deg, 50.0);
        assert_eq!(uniform.forward, camera.forward().to_array());
        assert_eq!(uniform.right, camera.right().to_array());
        assert_eq!(uniform.up, camera.up().to_array());
        assert_eq!(uniform.total_frame_count, 42);
        assert_eq!(uniform.frames_since_last_move, 7);
    }

    #[test]
    fn uniform_total_frame_count_wraps() {
        let counters = FrameCounters {
            total_frame_count: u32::MAX as u64 + 3,
            frames_since_last_move: 0,
        };
        let uniform = CameraState::default().to_uniform(&counters);
        assert_eq!(uniform.total_frame_count, 2);
    }
}
