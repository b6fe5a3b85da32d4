/// Camera uniform buffer data for GPU.
///
/// Matches `Camera` in `accumulate.wgsl`: every vec3 is followed by a
/// scalar so the struct packs into four 16-byte rows.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub fov_deg: f32,
    pub forward: [f32; 3],
    pub total_frame_count: u32,
    pub right: [f32; 3],
    pub frames_since_last_move: u32,
    pub up: [f32; 3],
    pub _pad: f32,
}
