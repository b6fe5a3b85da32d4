pub mod accumulation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod orientation;
pub mod overlay;
pub mod renderer;
pub mod rig;
pub mod types;

pub use accumulation::{AccumulationGate, FrameCounters, TickReport};
pub use camera::CameraState;
pub use orientation::{ControllerSettings, OrientationController};
pub use rig::FlyCamera;
