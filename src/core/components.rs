use bevy::prelude::*;

use crate::core::constants::camera::*;

#[derive(Component)]
pub struct MainCamera;

/// Root entity of the loaded model. The glTF scene is spawned as its child,
/// so the root carries the view transform and despawning it releases the
/// whole hierarchy.
#[derive(Component)]
pub struct ModelRoot;

/// Camera that circles `target` at `radius`, driven by mouse drag and scroll.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32) -> Self {
        Self {
            target: TARGET,
            radius: radius.clamp(MIN_RADIUS, MAX_RADIUS),
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
        }
    }

    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + drag.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, lines: f32) {
        self.radius = (self.radius - lines * ZOOM_SENSITIVITY).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn translation(&self) -> Vec3 {
        let offset = Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_keeps_radius_from_target() {
        let mut camera = OrbitCamera::new(8.0);
        camera.orbit(Vec2::new(137.0, -42.0));

        let distance = camera.translation().distance(camera.target);
        assert!((distance - 8.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = OrbitCamera::new(5.0);
        camera.orbit(Vec2::new(0.0, 1.0e6));
        assert_eq!(camera.pitch, PITCH_LIMIT);

        camera.orbit(Vec2::new(0.0, -1.0e6));
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut camera = OrbitCamera::new(5.0);
        camera.zoom(1.0);
        assert!((camera.radius - (5.0 - ZOOM_SENSITIVITY)).abs() < 1e-6);

        camera.zoom(1.0e6);
        assert_eq!(camera.radius, MIN_RADIUS);
        camera.zoom(-1.0e6);
        assert_eq!(camera.radius, MAX_RADIUS);
    }

    #[test]
    fn camera_looks_at_target() {
        let camera = OrbitCamera::new(4.0);
        let transform = camera.transform();
        let to_target = (camera.target - transform.translation).normalize();

        assert!(transform.forward().dot(to_target) > 0.999);
    }
}
