//! An OpenGL tessellation demo: a fixed icosahedron rendered as patch
//! primitives, with keyboard-adjustable tessellation levels and an orbit
//! camera. See `demos/view.rs` for the windowed frontend.

pub mod assets;
mod camera;
pub mod input;
mod mesh;
mod renderer;
pub mod screenshot;
mod tess;

pub use camera::OrbitCamera;
pub use mesh::GpuMesh;
pub use renderer::{Renderer, BACKGROUND, TESSELLATION_MATERIAL};
pub use tess::TessLevels;

/// A point light read each frame into a shader uniform.
#[derive(Clone, Copy)]
pub struct Light {
    pub position: glam::Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: glam::Vec3::new(10.0, 10.0, 10.0),
        }
    }
}
