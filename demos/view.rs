use glow::HasContext as _;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext};
use glutin::display::GetGlDisplay as _;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use winit::raw_window_handle::HasWindowHandle as _;

use icotess::{input, screenshot, Light, OrbitCamera, Renderer, TessLevels};

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const WINDOW_TITLE: &str = "Tessellation";
const WINDOW_SIZE: (u32, u32) = (1280, 720);

/// Icosahedron tessellation viewer.
#[derive(argh::FromArgs)]
struct Args {
    /// folder containing the shader materials
    #[argh(option, default = "String::from(\"shaders\")")]
    shaders: String,
}

struct Demo {
    window: winit::window::Window,
    gl: glow::Context,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    renderer: Renderer,
    camera: OrbitCamera,
    light: Light,
    tess: TessLevels,
    state: input::LoopState,
}

impl Demo {
    fn init(event_loop: &winit::event_loop::ActiveEventLoop, shader_dir: &Path) -> Self {
        let window_attributes = winit::window::Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));
        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, |mut configs| {
                configs.next().expect("no GL framebuffer configs available")
            })
            .expect("failed to create window and GL display");
        let window = window.expect("display builder did not produce a window");
        let raw_window_handle = window
            .window_handle()
            .expect("window has no native handle")
            .as_raw();

        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(glutin::context::Version::new(4, 1))))
            .build(Some(raw_window_handle));
        // Fall back to whatever the platform offers, so the unsupported
        // path still gets a window to clear.
        let fallback_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));
        let not_current = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .or_else(|_| gl_display.create_context(&gl_config, &fallback_attributes))
                .expect("failed to create GL context")
        };

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .expect("failed to build surface attributes");
        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attributes)
                .expect("failed to create GL surface")
        };
        let gl_context = not_current
            .make_current(&gl_surface)
            .expect("failed to make GL context current");
        if let Err(e) = gl_surface.set_swap_interval(
            &gl_context,
            SwapInterval::Wait(NonZeroU32::new(1).unwrap()),
        ) {
            log::warn!("failed to enable vsync: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };
        log::info!("OpenGL version: {:?}", gl.version());

        let renderer = Renderer::new(&gl, shader_dir);
        if renderer.is_supported() {
            log::info!("Up/Down arrows adjust tessellation, drag orbits the camera");
        } else {
            window.set_title(&format!("{} - not supported by this GPU", WINDOW_TITLE));
        }

        Self {
            window,
            gl,
            gl_surface,
            gl_context,
            renderer,
            camera: OrbitCamera::looking_from(glam::Vec3::new(2.0, 2.0, 2.0), glam::Vec3::ZERO),
            light: Light::default(),
            tess: TessLevels::default(),
            state: input::LoopState::Running,
        }
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, width, height);
        unsafe {
            self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    fn aspect(&self) -> f32 {
        let size = self.window.inner_size();
        size.width as f32 / size.height.max(1) as f32
    }

    fn apply(&mut self, action: input::Action, target: &winit::event_loop::ActiveEventLoop) {
        match action {
            input::Action::IncreaseTess => {
                self.tess.increase();
                log::debug!("tessellation levels: {:?}", self.tess);
            }
            input::Action::DecreaseTess => {
                self.tess.decrease();
                log::debug!("tessellation levels: {:?}", self.tess);
            }
            input::Action::Screenshot => self.screenshot(),
            input::Action::Quit => {
                self.state = input::LoopState::Terminating;
                target.exit();
            }
        }
    }

    fn screenshot(&self) {
        let size = self.window.inner_size();
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = PathBuf::from(format!("screenshot_{}.png", stamp));
        match screenshot::capture(&self.gl, size.width, size.height, &path) {
            Ok(()) => log::info!("saved {}", path.display()),
            Err(e) => log::error!("screenshot failed: {}", e),
        }
    }

    fn redraw(&mut self) {
        self.renderer
            .render(&self.gl, &self.camera, &self.light, &self.tess, self.aspect());
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .expect("failed to swap buffers");
    }
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let event_loop = winit::event_loop::EventLoop::new().unwrap();
    let mut demo: Option<Demo> = None;

    event_loop
        .run(|event, target| {
            target.set_control_flow(winit::event_loop::ControlFlow::Poll);
            match event {
                winit::event::Event::Resumed => {
                    if demo.is_none() {
                        demo = Some(Demo::init(target, Path::new(&args.shaders)));
                    }
                }
                winit::event::Event::AboutToWait => {
                    if let Some(demo) = &demo {
                        demo.window.request_redraw();
                    }
                }
                winit::event::Event::WindowEvent { event, .. } => {
                    let Some(demo) = demo.as_mut() else { return };
                    match event {
                        winit::event::WindowEvent::CloseRequested => {
                            demo.state = input::LoopState::Terminating;
                            target.exit();
                        }
                        winit::event::WindowEvent::Resized(size) => {
                            demo.resize(size);
                        }
                        winit::event::WindowEvent::KeyboardInput {
                            event:
                                winit::event::KeyEvent {
                                    physical_key: winit::keyboard::PhysicalKey::Code(code),
                                    state,
                                    ..
                                },
                            ..
                        } => {
                            if let Some(action) = input::action_for_key(code, state) {
                                demo.apply(action, target);
                            }
                        }
                        winit::event::WindowEvent::MouseInput { button, state, .. } => {
                            demo.camera.on_mouse_button(button, state);
                        }
                        winit::event::WindowEvent::CursorMoved { position, .. } => {
                            demo.camera.on_cursor_moved(position);
                        }
                        winit::event::WindowEvent::MouseWheel { delta, .. } => {
                            demo.camera.on_wheel(delta);
                        }
                        winit::event::WindowEvent::RedrawRequested => {
                            demo.redraw();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .unwrap();

    if let Some(demo) = demo {
        debug_assert_eq!(demo.state, input::LoopState::Terminating);
    }
}
