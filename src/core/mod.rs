pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::Clock;
pub use controller::{Controller, Direction, InputSnapshot};
pub use input_adapter::WinitController;
