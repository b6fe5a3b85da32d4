use crate::accumulation::{AccumulationGate, FrameCounters, TickReport};
use crate::camera::CameraState;
use crate::core::Controller;
use crate::orientation::{ControllerSettings, OrientationController};

/// Camera, controller and accumulation gate driven together, one tick at a time
#[derive(Debug, Clone)]
pub struct FlyCamera {
    camera: CameraState,
    controller: OrientationController,
    gate: AccumulationGate,
}

impl FlyCamera {
    pub fn new(camera: CameraState, settings: ControllerSettings) -> Self {
        let controller = OrientationController::new(&camera, settings);
        Self {
            camera,
            controller,
            gate: AccumulationGate::new(),
        }
    }

    /// Update orientation from input, then decide whether accumulation restarts
    pub fn tick(&mut self, delta_time: f32, input: &impl Controller) -> TickReport {
        self.controller.update(&mut self.camera, delta_time, input);
        self.gate.advance(&self.camera)
    }

    /// Restart accumulation on the next tick regardless of camera motion
    pub fn invalidate(&mut self) {
        self.gate.invalidate();
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn controller(&self) -> &OrientationController {
        &self.controller
    }

    pub fn counters(&self) -> &FrameCounters {
        self.gate.counters()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraState::default(), ControllerSettings::default())
    }
}
