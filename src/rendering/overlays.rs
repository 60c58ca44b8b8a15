use bevy::math::Isometry3d;
use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use std::f32::consts::FRAC_PI_2;

use crate::core::constants::overlays::*;
use crate::core::view_state::ViewState;
use crate::core::viewer::ViewerSet;
use crate::rendering::model_loader::ModelState;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_wireframe, draw_axis_guides, draw_model_bounds).in_set(ViewerSet::Rendering),
        );
    }
}

/// Keeps the `Wireframe` marker on every mesh in line with the toggle.
/// Runs every frame so meshes from a scene that is still spawning pick it up.
pub fn sync_wireframe(
    mut commands: Commands,
    view_state: Res<ViewState>,
    meshes: Query<(Entity, Has<Wireframe>), With<Mesh3d>>,
) {
    for (entity, has_wireframe) in meshes.iter() {
        if view_state.wireframe && !has_wireframe {
            commands.entity(entity).insert(Wireframe);
        } else if !view_state.wireframe && has_wireframe {
            commands.entity(entity).remove::<Wireframe>();
        }
    }
}

/// Ground grid and world axes.
pub fn draw_axis_guides(mut gizmos: Gizmos, view_state: Res<ViewState>) {
    if !view_state.show_axes {
        return;
    }

    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(GRID_CELLS),
        Vec2::splat(GRID_SPACING),
        GRID_COLOR,
    );
    gizmos.axes(Transform::IDENTITY, AXIS_LENGTH);
}

/// World-space box around every mesh of the model.
pub fn draw_model_bounds(
    mut gizmos: Gizmos,
    view_state: Res<ViewState>,
    model_state: Res<ModelState>,
    meshes: Query<(&Aabb, &GlobalTransform), With<Mesh3d>>,
) {
    if !view_state.show_bounds || !model_state.loaded {
        return;
    }

    let boxes = meshes
        .iter()
        .map(|(aabb, global)| (Vec3::from(aabb.min()), Vec3::from(aabb.max()), *global));
    let Some((min, max)) = world_bounds(boxes) else {
        return;
    };

    let size = (max - min).max(Vec3::splat(f32::EPSILON));
    gizmos.cuboid(
        Transform::from_translation((min + max) * 0.5).with_scale(size),
        BOUNDS_COLOR,
    );
}

/// Merges local boxes into one axis-aligned box in world space by
/// transforming all eight corners of each.
pub fn world_bounds(
    boxes: impl IntoIterator<Item = (Vec3, Vec3, GlobalTransform)>,
) -> Option<(Vec3, Vec3)> {
    let mut bounds: Option<(Vec3, Vec3)> = None;

    for (min, max, global) in boxes {
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            let point = global.transform_point(corner);
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(point), hi.max(point)),
                None => (point, point),
            });
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_meshes_no_bounds() {
        assert_eq!(world_bounds(Vec::new()), None);
    }

    #[test]
    fn boxes_are_merged_in_world_space() {
        let unit = (Vec3::splat(-0.5), Vec3::splat(0.5));
        let boxes = vec![
            (unit.0, unit.1, GlobalTransform::IDENTITY),
            (
                unit.0,
                unit.1,
                GlobalTransform::from(Transform::from_xyz(3.0, 0.0, 0.0).with_scale(Vec3::splat(2.0))),
            ),
        ];

        let (min, max) = world_bounds(boxes).unwrap();
        assert!((min - Vec3::new(-0.5, -1.0, -1.0)).length() < 1e-5);
        assert!((max - Vec3::new(4.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn rotated_box_grows_to_cover_corners() {
        let rotated = GlobalTransform::from(Transform::from_rotation(Quat::from_rotation_y(
            std::f32::consts::FRAC_PI_4,
        )));
        let (min, max) = world_bounds([(Vec3::splat(-1.0), Vec3::splat(1.0), rotated)]).unwrap();

        let half_diagonal = 2.0_f32.sqrt();
        assert!((max.x - half_diagonal).abs() < 1e-5);
        assert!((min.z + half_diagonal).abs() < 1e-5);
        assert!((max.y - 1.0).abs() < 1e-5);
    }
}
