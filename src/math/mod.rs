mod basis;

pub use basis::{
    angles_from_forward, basis_from_angles, right_from_forward, Basis, PITCH_LIMIT_DEG,
    WORLD_UP, YAW_OFFSET_DEG,
};
