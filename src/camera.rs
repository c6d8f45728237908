use std::f32::consts::FRAC_PI_4;

const ORBIT_SENSITIVITY: f32 = 0.005;
const MIN_DISTANCE: f32 = 1.2;
const MAX_DISTANCE: f32 = 50.0;
// Just shy of the poles, where look_at degenerates.
const MAX_PITCH: f32 = 1.55;

/// Camera orbiting a fixed look-at point: drag rotates, wheel zooms.
pub struct OrbitCamera {
    pub target: glam::Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
    dragging: bool,
    cursor: Option<glam::Vec2>,
}

impl OrbitCamera {
    pub fn looking_from(position: glam::Vec3, target: glam::Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            fov_y: FRAC_PI_4,
            dragging: false,
            cursor: None,
        }
    }

    pub fn position(&self) -> glam::Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * glam::Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn view_matrix(&self) -> glam::Mat4 {
        glam::Mat4::look_at_rh(self.position(), self.target, glam::Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> glam::Mat4 {
        glam::Mat4::perspective_rh(self.fov_y, aspect, 0.1, 100.0)
    }

    pub fn orbit_by(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom_by(&mut self, amount: f32) {
        self.distance = (self.distance * (-0.1 * amount).exp()).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn on_mouse_button(&mut self, button: winit::event::MouseButton, state: winit::event::ElementState) {
        if button == winit::event::MouseButton::Left {
            self.dragging = state == winit::event::ElementState::Pressed;
            if !self.dragging {
                self.cursor = None;
            }
        }
    }

    pub fn on_cursor_moved(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        let position = glam::Vec2::new(position.x as f32, position.y as f32);
        if self.dragging {
            if let Some(previous) = self.cursor {
                let delta = position - previous;
                self.orbit_by(delta.x, delta.y);
            }
        }
        self.cursor = Some(position);
    }

    pub fn on_wheel(&mut self, delta: winit::event::MouseScrollDelta) {
        let amount = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, lines) => lines,
            winit::event::MouseScrollDelta::PixelDelta(position) => position.y as f32 / 20.0,
        };
        self.zoom_by(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::OrbitCamera;

    #[test]
    fn looking_from_round_trips() {
        let camera = OrbitCamera::looking_from(glam::Vec3::new(2.0, 2.0, 2.0), glam::Vec3::ZERO);
        let position = camera.position();
        assert!((position - glam::Vec3::new(2.0, 2.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn orbit_preserves_distance() {
        let mut camera = OrbitCamera::looking_from(glam::Vec3::new(2.0, 2.0, 2.0), glam::Vec3::ZERO);
        let before = camera.distance;
        camera.orbit_by(120.0, -45.0);
        assert_eq!(camera.distance, before);
        assert!((camera.position().length() - before).abs() < 1e-4);
    }

    #[test]
    fn pitch_stays_off_the_poles() {
        let mut camera = OrbitCamera::looking_from(glam::Vec3::new(0.0, 1.0, 3.0), glam::Vec3::ZERO);
        camera.orbit_by(0.0, 1e6);
        assert!(camera.pitch <= super::MAX_PITCH);
        camera.orbit_by(0.0, -1e6);
        assert!(camera.pitch >= -super::MAX_PITCH);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::looking_from(glam::Vec3::new(2.0, 2.0, 2.0), glam::Vec3::ZERO);
        for _ in 0..100 {
            camera.zoom_by(10.0);
        }
        assert!(camera.distance >= super::MIN_DISTANCE);
        for _ in 0..100 {
            camera.zoom_by(-10.0);
        }
        assert!(camera.distance <= super::MAX_DISTANCE);
    }

    #[test]
    fn view_matrix_centers_the_target() {
        let camera = OrbitCamera::looking_from(glam::Vec3::new(2.0, 2.0, 2.0), glam::Vec3::ZERO);
        let in_view = camera.view_matrix().transform_point3(camera.target);
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!((in_view.z + camera.distance).abs() < 1e-4);
    }
}
