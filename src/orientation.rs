use crate::camera::CameraState;
use crate::core::{Controller, Direction};
use crate::math::{angles_from_forward, basis_from_angles, PITCH_LIMIT_DEG, WORLD_UP};

pub const DEFAULT_BASE_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

const BASIS_TOLERANCE: f32 = 1e-4;

/// Tunable movement/look rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// World units per second
    pub base_speed: f32,
    /// Degrees per pixel of cursor travel
    pub sensitivity: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            base_speed: DEFAULT_BASE_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// First-person fly controller.
///
/// Owns yaw/pitch in degrees and writes position and the orthonormal
/// frame back into a [`CameraState`] once per tick.
#[derive(Debug, Clone)]
pub struct OrientationController {
    settings: ControllerSettings,
    yaw: f32,
    pitch: f32,
    last_cursor: (f64, f64),
    has_sample: bool,
}

impl OrientationController {
    /// Derive yaw/pitch from the camera's forward vector so both agree
    /// before the first tick
    pub fn new(camera: &CameraState, settings: ControllerSettings) -> Self {
        let (yaw, pitch) = angles_from_forward(camera.forward());
        Self {
            settings,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
            last_cursor: (0.0, 0.0),
            has_sample: false,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn has_sample(&self) -> bool {
        self.has_sample
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Apply one tick of movement and look input, then rebuild the frame
    pub fn update(&mut self, camera: &mut CameraState, delta_time: f32, input: &impl Controller) {
        let delta_time = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            0.0
        };

        self.apply_movement(camera, delta_time, input);
        self.apply_look(input.cursor_position());
        self.rebuild_basis(camera);
    }

    fn apply_movement(&self, camera: &mut CameraState, delta_time: f32, input: &impl Controller) {
        let speed = self.settings.base_speed * delta_time;
        if speed == 0.0 {
            return;
        }

        // Vertical travel uses world up so it stays level regardless of pitch
        let steps = [
            (Direction::Forward, camera.forward()),
            (Direction::Backward, -camera.forward()),
            (Direction::Left, -camera.right()),
            (Direction::Right, camera.right()),
            (Direction::Down, -WORLD_UP),
            (Direction::Up, WORLD_UP),
        ];

        for (direction, axis) in steps {
            if input.is_active(direction) {
                camera.translate(axis * speed);
            }
        }
    }

    fn apply_look(&mut self, (x, y): (f64, f64)) {
        if !x.is_finite() || !y.is_finite() {
            log::trace!("Ignoring non-finite cursor sample ({}, {})", x, y);
            return;
        }

        if !self.has_sample {
            self.last_cursor = (x, y);
            self.has_sample = true;
            return;
        }

        // Screen y grows downward, pitch grows upward
        let dx = (x - self.last_cursor.0) as f32 * self.settings.sensitivity;
        let dy = (self.last_cursor.1 - y) as f32 * self.settings.sensitivity;
        self.last_cursor = (x, y);

        // A jump too large for f32 would poison yaw with inf/NaN for good
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("Dropping out-of-range look delta ({}, {})", dx, dy);
            return;
        }

        if dx != 0.0 {
            self.yaw += dx;
            if self.yaw.abs() > 360.0 {
                self.yaw = self.yaw.rem_euclid(360.0);
            }
        }
        if dy != 0.0 {
            self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        }

        if dx != 0.0 || dy != 0.0 {
            log::trace!(
                "Look delta ({:.3}, {:.3}) -> yaw {:.3}, pitch {:.3}",
                dx,
                dy,
                self.yaw,
                self.pitch
            );
        }
    }

    fn rebuild_basis(&self, camera: &mut CameraState) {
        let basis = basis_from_angles(self.yaw, self.pitch);
        if !basis.forward.is_finite() {
            log::warn!(
                "Non-finite camera basis at yaw {}, pitch {}, keeping previous frame",
                self.yaw,
                self.pitch
            );
            return;
        }
        debug_assert!(
            basis.is_orthonormal(BASIS_TOLERANCE),
            "camera basis lost orthonormality at yaw {}, pitch {}: {:?}",
            self.yaw,
            self.pitch,
            basis
        );
        camera.set_basis(basis);
    }
}
