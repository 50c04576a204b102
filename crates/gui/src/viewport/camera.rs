use glam::{Mat4, Vec3};

use super::mesh::Aabb;

/// Orbit camera for the 3D viewport
pub struct OrbitCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Field of view (radians)
    pub fov: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 6.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    /// Rotate camera by delta angles (degrees)
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw.to_radians();
        self.pitch += delta_pitch.to_radians();
        // Clamp pitch to avoid gimbal flip
        self.pitch = self.pitch.clamp(-1.5, 1.5);
    }

    /// Zoom in/out (positive delta = zoom in)
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(0.5, 100.0);
    }

    /// Pan the camera target in view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let scale = self.distance * 0.5;
        self.target -= right * dx * scale;
        self.target += up * dy * scale;
    }

    /// Move the camera so the given bounds fill the view
    pub fn frame(&mut self, bounds: &Aabb) {
        self.target = bounds.center();
        let radius = bounds.radius().max(0.1);
        let fit = radius / (self.fov * 0.5).sin();
        self.distance = (fit * 1.15).clamp(0.5, 100.0);
    }

    /// Get camera eye position
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let dir = Vec3::new(cp * sy, sp, cp * cy);
        self.target + dir * self.distance
    }

    /// Forward direction (from eye towards target)
    pub fn forward_vector(&self) -> Vec3 {
        (self.target - self.eye_position()).normalize_or_zero()
    }

    /// Right direction in world space
    pub fn right_vector(&self) -> Vec3 {
        self.forward_vector().cross(Vec3::Y).normalize_or_zero()
    }

    /// Up direction in world space
    pub fn up_vector(&self) -> Vec3 {
        self.right_vector().cross(self.forward_vector()).normalize_or_zero()
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
