use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::core::components::*;
use crate::core::constants::{camera, hotkeys, transform};
use crate::core::picker::FilePicker;
use crate::core::resources::ViewerConfig;
use crate::core::view_state::ViewState;
use crate::rendering::model_loader::ModelState;

// === SCENE SETUP CONSTANTS ===
const LIGHT_ROTATION_X: f32 = -0.8;
const LIGHT_ROTATION_Y: f32 = -0.4;

pub fn setup_viewer(mut commands: Commands, config: Res<ViewerConfig>) {
    let orbit = OrbitCamera::new(config.camera_distance);

    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        MainCamera,
        orbit,
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 1.0, 0.95),
            illuminance: 6000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, LIGHT_ROTATION_X, LIGHT_ROTATION_Y, 0.0)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    info!("Viewer setup complete");
}

/// Orbit camera
///
/// Controls:
/// - Left or right mouse + drag: orbit around the target
/// - Mouse wheel: zoom in/out
///
/// Events are drained every frame so input given while the picker is open
/// does not replay once it closes.
pub fn orbit_camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    picker: Option<Res<FilePicker>>,
    model_state: Res<ModelState>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let scroll: f32 = mouse_wheel
        .read()
        .map(|wheel| match wheel.unit {
            MouseScrollUnit::Line => wheel.y,
            MouseScrollUnit::Pixel => wheel.y * camera::PIXEL_SCROLL_FACTOR,
        })
        .sum();

    let picker_open = picker.map_or(true, |picker| picker.visible);
    if picker_open || !model_state.loaded {
        return;
    }

    let Ok((mut camera_transform, mut orbit)) = camera_query.get_single_mut() else {
        return;
    };

    let dragging = mouse_buttons.pressed(MouseButton::Left) || mouse_buttons.pressed(MouseButton::Right);
    if dragging && drag != Vec2::ZERO {
        orbit.orbit(drag);
    }
    if scroll != 0.0 {
        orbit.zoom(scroll);
    }

    if orbit.is_changed() {
        *camera_transform = orbit.transform();
    }
}

/// Held-key rotation and scale, plus the discrete up-axis correction.
pub fn model_transform_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut view_state: ResMut<ViewState>,
) {
    let dt = time.delta_secs();

    let axis = |positive: KeyCode, negative: KeyCode| -> f32 {
        let mut value = 0.0;
        if keyboard.pressed(positive) {
            value += 1.0;
        }
        if keyboard.pressed(negative) {
            value -= 1.0;
        }
        value
    };

    let rotation = Vec3::new(
        axis(hotkeys::ROTATE_X_POS, hotkeys::ROTATE_X_NEG),
        axis(hotkeys::ROTATE_Y_POS, hotkeys::ROTATE_Y_NEG),
        axis(hotkeys::ROTATE_Z_POS, hotkeys::ROTATE_Z_NEG),
    );
    if rotation != Vec3::ZERO {
        view_state.rotate(rotation * transform::ROTATION_RATE * dt);
    }

    let scale = axis(hotkeys::SCALE_UP, hotkeys::SCALE_DOWN);
    if scale != 0.0 {
        view_state.rescale(scale * transform::SCALE_RATE * dt);
    }

    if keyboard.just_pressed(hotkeys::ROTATION_CORRECTION) {
        let correction = view_state.cycle_correction();
        info!("Rotation correction: {}°", correction.degrees());
    }
}

pub fn display_toggle_input(keyboard: Res<ButtonInput<KeyCode>>, mut view_state: ResMut<ViewState>) {
    if keyboard.just_pressed(hotkeys::WIREFRAME_TOGGLE) {
        view_state.wireframe = !view_state.wireframe;
        info!("Wireframe overlay {}", on_off(view_state.wireframe));
    }
    if keyboard.just_pressed(hotkeys::BOUNDS_TOGGLE) {
        view_state.show_bounds = !view_state.show_bounds;
        info!("Bounding box {}", on_off(view_state.show_bounds));
    }
    if keyboard.just_pressed(hotkeys::AXES_TOGGLE) {
        view_state.show_axes = !view_state.show_axes;
        info!("Axis guides {}", on_off(view_state.show_axes));
    }
}

pub fn apply_model_transform(
    view_state: Res<ViewState>,
    mut roots: Query<&mut Transform, (With<ModelRoot>, Without<MainCamera>)>,
) {
    for mut root_transform in roots.iter_mut() {
        let target = view_state.model_transform();
        if *root_transform != target {
            *root_transform = target;
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
