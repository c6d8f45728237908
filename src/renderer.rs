use glow::HasContext as _;

use std::path::Path;

use crate::assets::Materials;
use crate::camera::OrbitCamera;
use crate::mesh::GpuMesh;
use crate::tess::TessLevels;
use crate::Light;

pub const BACKGROUND: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
pub const TESSELLATION_EXTENSION: &str = "GL_ARB_tessellation_shader";
pub const TESSELLATION_MATERIAL: &str = "tessellation.mat";

const PATCH_SIZE: i32 = 3;

/// The two rendering paths, decided once at startup: a context without the
/// tessellation stage stays on clear-only frames for the whole session.
pub enum RenderMode {
    Normal { mesh: GpuMesh, materials: Materials },
    Unsupported,
}

pub struct Renderer {
    mode: RenderMode,
}

pub fn tessellation_supported(gl: &glow::Context) -> bool {
    // Core 4.0 contexts may not list the ARB extension even though the
    // stage is available.
    let version = gl.version();
    (!version.is_embedded && version.major >= 4)
        || gl.supported_extensions().contains(TESSELLATION_EXTENSION)
}

impl Renderer {
    /// Detects the tessellation stage, then loads shaders and uploads the
    /// mesh. In unsupported mode neither happens.
    pub fn new(gl: &glow::Context, shader_dir: &Path) -> Self {
        if !tessellation_supported(gl) {
            log::warn!("this graphics card doesn't support tessellation, rendering disabled");
            return Self {
                mode: RenderMode::Unsupported,
            };
        }
        let materials = Materials::load_folder(gl, shader_dir);
        let mesh = GpuMesh::upload(gl);
        Self {
            mode: RenderMode::Normal { mesh, materials },
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self.mode, RenderMode::Normal { .. })
    }

    pub fn render(
        &self,
        gl: &glow::Context,
        camera: &OrbitCamera,
        light: &Light,
        levels: &TessLevels,
        aspect: f32,
    ) {
        unsafe {
            gl.clear_color(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], BACKGROUND[3]);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let (mesh, materials) = match self.mode {
            RenderMode::Normal {
                ref mesh,
                ref materials,
            } => (mesh, materials),
            RenderMode::Unsupported => return,
        };
        let program = materials
            .program(TESSELLATION_MATERIAL)
            .expect("tessellation material not loaded");

        unsafe {
            gl.use_program(Some(program));

            gl.uniform_1_f32(
                gl.get_uniform_location(program, "tess_level_inner").as_ref(),
                levels.inner,
            );
            gl.uniform_1_f32(
                gl.get_uniform_location(program, "tess_level_outer").as_ref(),
                levels.outer,
            );
            gl.uniform_3_f32(
                gl.get_uniform_location(program, "light_position").as_ref(),
                light.position.x,
                light.position.y,
                light.position.z,
            );
            gl.uniform_matrix_4_f32_slice(
                gl.get_uniform_location(program, "view").as_ref(),
                false,
                &camera.view_matrix().to_cols_array(),
            );
            gl.uniform_matrix_4_f32_slice(
                gl.get_uniform_location(program, "proj").as_ref(),
                false,
                &camera.projection_matrix(aspect).to_cols_array(),
            );

            gl.enable(glow::DEPTH_TEST);

            gl.bind_vertex_array(Some(mesh.vao));
            let position = gl
                .get_attrib_location(program, "position")
                .expect("shader has no position attribute");
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(mesh.positions));
            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_f32(
                position,
                3,
                glow::FLOAT,
                false,
                3 * std::mem::size_of::<f32>() as i32,
                0,
            );

            gl.patch_parameter_i32(glow::PATCH_VERTICES, PATCH_SIZE);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.indices));
            gl.draw_elements(glow::PATCHES, mesh.index_count, glow::UNSIGNED_INT, 0);

            gl.disable_vertex_attrib_array(position);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            gl.disable(glow::DEPTH_TEST);
            gl.use_program(None);
        }

        let error = unsafe { gl.get_error() };
        if error != glow::NO_ERROR {
            log::error!("GL error after frame: 0x{:x}", error);
        }
    }
}
