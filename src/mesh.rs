use glow::HasContext as _;

/// Unit-radius icosahedron corners, poles on ±Z.
pub const VERTICES: [[f32; 3]; 12] = [
    [0.000, 0.000, 1.000],
    [0.894, 0.000, 0.447],
    [0.276, 0.851, 0.447],
    [-0.724, 0.526, 0.447],
    [-0.724, -0.526, 0.447],
    [0.276, -0.851, 0.447],
    [0.724, 0.526, -0.447],
    [-0.276, 0.851, -0.447],
    [-0.894, 0.000, -0.447],
    [-0.276, -0.851, -0.447],
    [0.724, -0.526, -0.447],
    [0.000, 0.000, -1.000],
];

pub const FACES: [[u32; 3]; 20] = [
    // 5 faces around the top pole
    [2, 1, 0],
    [3, 2, 0],
    [4, 3, 0],
    [5, 4, 0],
    [1, 5, 0],
    // 5 faces around the bottom pole
    [11, 6, 7],
    [11, 7, 8],
    [11, 8, 9],
    [11, 9, 10],
    [11, 10, 6],
    // upper belt
    [1, 2, 6],
    [2, 3, 7],
    [3, 4, 8],
    [4, 5, 9],
    [5, 1, 10],
    // lower belt
    [2, 7, 6],
    [3, 8, 7],
    [4, 9, 8],
    [5, 10, 9],
    [1, 6, 10],
];

pub struct GpuMesh {
    pub vao: glow::VertexArray,
    pub positions: glow::Buffer,
    pub indices: glow::Buffer,
    pub index_count: i32,
}

impl GpuMesh {
    /// Uploads the icosahedron into static GPU buffers. Called once per
    /// process; the buffers live until context teardown.
    pub fn upload(gl: &glow::Context) -> Self {
        let index_count = (FACES.len() * 3) as i32;
        unsafe {
            let vao = gl.create_vertex_array().expect("failed to create VAO");
            gl.bind_vertex_array(Some(vao));

            let positions = gl.create_buffer().expect("failed to create vertex buffer");
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(positions));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&VERTICES),
                glow::STATIC_DRAW,
            );

            let indices = gl.create_buffer().expect("failed to create index buffer");
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(indices));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&FACES),
                glow::STATIC_DRAW,
            );

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Self {
                vao,
                positions,
                indices,
                index_count,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FACES, VERTICES};

    #[test]
    fn icosahedron_counts() {
        assert_eq!(VERTICES.len(), 12);
        assert_eq!(FACES.len(), 20);
        assert_eq!(FACES.len() * 3, 60);
    }

    #[test]
    fn face_indices_in_range() {
        for face in &FACES {
            for &index in face {
                assert!((index as usize) < VERTICES.len());
            }
        }
    }

    #[test]
    fn vertices_on_unit_sphere() {
        for &[x, y, z] in &VERTICES {
            let radius = (x * x + y * y + z * z).sqrt();
            assert!((radius - 1.0).abs() < 1e-3, "radius was {}", radius);
        }
    }

    #[test]
    fn every_vertex_referenced() {
        let mut seen = [false; 12];
        for face in &FACES {
            for &index in face {
                seen[index as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
