use bevy::prelude::*;

use crate::core::constants::transform::*;

/// Discrete correction for models authored with a different up axis.
/// Cycles in quarter turns about X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationCorrection {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarters,
}

impl RotationCorrection {
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Quarter,
            Self::Quarter => Self::Half,
            Self::Half => Self::ThreeQuarters,
            Self::ThreeQuarters => Self::None,
        }
    }

    pub fn degrees(self) -> f32 {
        let steps = match self {
            Self::None => 0.0,
            Self::Quarter => 1.0,
            Self::Half => 2.0,
            Self::ThreeQuarters => 3.0,
        };
        steps * CORRECTION_STEP
    }

    pub fn rotation(self) -> Quat {
        Quat::from_rotation_x(self.degrees().to_radians())
    }
}

/// Per-model render state. Replaced with the defaults on every load.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewState {
    pub scale: f32,
    /// Free rotation per axis, in degrees
    pub rotation: Vec3,
    pub correction: RotationCorrection,
    pub wireframe: bool,
    pub show_bounds: bool,
    pub show_axes: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            rotation: Vec3::ZERO,
            correction: RotationCorrection::None,
            wireframe: false,
            show_bounds: false,
            show_axes: true,
        }
    }
}

impl ViewState {
    pub fn rotate(&mut self, delta_degrees: Vec3) {
        self.rotation += delta_degrees;
    }

    /// Unbounded: holding scale-down long enough collapses or mirrors the model.
    pub fn rescale(&mut self, delta: f32) -> f32 {
        self.scale += delta;
        self.scale
    }

    pub fn cycle_correction(&mut self) -> RotationCorrection {
        self.correction = self.correction.next();
        self.correction
    }

    /// Transform applied to the model root: free rotation on top of the
    /// up-axis correction, uniform scale, no translation.
    pub fn model_transform(&self) -> Transform {
        let radians = self.rotation * std::f32::consts::PI / 180.0;
        let free = Quat::from_euler(EulerRot::XYZ, radians.x, radians.y, radians.z);

        Transform {
            translation: Vec3::ZERO,
            rotation: free * self.correction.rotation(),
            scale: Vec3::splat(self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_cycles_through_quarter_turns() {
        let mut view = ViewState::default();
        let mut seen = vec![view.correction.degrees()];
        for _ in 0..4 {
            seen.push(view.cycle_correction().degrees());
        }

        assert_eq!(seen, vec![0.0, 90.0, 180.0, 270.0, 0.0]);
    }

    #[test]
    fn correction_never_leaves_the_quarter_set() {
        let mut correction = RotationCorrection::None;
        for _ in 0..37 {
            correction = correction.next();
            assert!([0.0, 90.0, 180.0, 270.0].contains(&correction.degrees()));
        }
    }

    #[test]
    fn rotation_is_unbounded() {
        let mut view = ViewState::default();
        for _ in 0..10 {
            view.rotate(Vec3::new(90.0, -45.0, 0.0));
        }

        assert_eq!(view.rotation, Vec3::new(900.0, -450.0, 0.0));
    }

    #[test]
    fn scale_has_no_lower_bound() {
        let mut view = ViewState::default();
        view.rescale(2.0);
        assert_eq!(view.scale, 3.0);

        view.rescale(-3.0);
        assert_eq!(view.scale, 0.0);

        view.rescale(-1.5);
        assert_eq!(view.scale, -1.5);
        assert_eq!(view.model_transform().scale, Vec3::splat(-1.5));
    }

    #[test]
    fn quarter_correction_lifts_z_up_models() {
        let view = ViewState {
            correction: RotationCorrection::Quarter,
            ..default()
        };
        let up = view.model_transform().rotation * Vec3::Z;

        assert!((up - Vec3::NEG_Y).length() < 1e-5 || (up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn default_transform_is_identity() {
        assert_eq!(ViewState::default().model_transform(), Transform::IDENTITY);
    }
}
