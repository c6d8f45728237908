use glow::HasContext as _;

use std::collections::HashMap;
use std::{fs, path::Path};

const STAGE_KEYS: &[(&str, u32)] = &[
    ("vertex", glow::VERTEX_SHADER),
    ("tess_control", glow::TESS_CONTROL_SHADER),
    ("tess_eval", glow::TESS_EVALUATION_SHADER),
    ("fragment", glow::FRAGMENT_SHADER),
];

/// Shader programs compiled from the `.mat` files of one folder, keyed by
/// material file name. Loaded once at startup; a malformed or missing
/// shader is a fatal error.
pub struct Materials {
    programs: HashMap<String, glow::Program>,
}

impl Materials {
    pub fn load_folder(gl: &glow::Context, dir: &Path) -> Self {
        let entries = fs::read_dir(dir)
            .unwrap_or_else(|e| panic!("cannot read shader folder {}: {}", dir.display(), e));
        let mut programs = HashMap::new();
        for entry in entries {
            let path = entry.expect("failed to list shader folder").path();
            if path.extension().is_some_and(|ext| ext == "mat") {
                let name = path
                    .file_name()
                    .expect("material path has no file name")
                    .to_string_lossy()
                    .into_owned();
                log::info!("Loading material {}", name);
                programs.insert(name, load_material(gl, &path));
            }
        }
        assert!(
            !programs.is_empty(),
            "no .mat files found in {}",
            dir.display()
        );
        Self { programs }
    }

    pub fn program(&self, name: &str) -> Option<glow::Program> {
        self.programs.get(name).copied()
    }
}

/// Parses a material definition: one `stage = file` line per shader stage,
/// `#` comments and blank lines ignored.
fn parse_material(text: &str) -> Vec<(u32, String)> {
    let mut stages = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, file) = line
            .split_once('=')
            .unwrap_or_else(|| panic!("malformed material line {}: {:?}", number + 1, line));
        let key = key.trim();
        let stage = STAGE_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, stage)| stage)
            .unwrap_or_else(|| panic!("unknown shader stage {:?} on line {}", key, number + 1));
        stages.push((stage, file.trim().to_string()));
    }
    assert!(!stages.is_empty(), "material defines no shader stages");
    stages
}

fn load_material(gl: &glow::Context, path: &Path) -> glow::Program {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read material {}: {}", path.display(), e));
    let dir = path.parent().expect("material path has no parent");
    unsafe {
        let program = gl.create_program().expect("failed to create program");
        let mut shaders = Vec::new();
        for (stage, file) in parse_material(&text) {
            let source = fs::read_to_string(dir.join(&file))
                .unwrap_or_else(|e| panic!("cannot read shader {}: {}", file, e));
            let shader = gl.create_shader(stage).expect("failed to create shader");
            gl.shader_source(shader, &source);
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                panic!(
                    "failed to compile {}: {}",
                    file,
                    gl.get_shader_info_log(shader)
                );
            }
            gl.attach_shader(program, shader);
            shaders.push(shader);
        }
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            panic!(
                "failed to link {}: {}",
                path.display(),
                gl.get_program_info_log(program)
            );
        }
        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }
        program
    }
}
