use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

use crate::core::frame_pacing::{init_frame_limiter, limit_frame_rate};
use crate::core::picker::FilePicker;
use crate::core::playback::AnimationPlayback;
use crate::core::resources::ViewerConfig;
use crate::core::view_state::ViewState;
use crate::rendering::model_loader::ModelState;
use crate::systems::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ViewerSet {
    Input,
    Logic,
    Rendering,
}

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (ViewerSet::Input, ViewerSet::Logic, ViewerSet::Rendering).chain(),
        )
        .init_resource::<ViewState>()
        .init_resource::<AnimationPlayback>()
        .add_systems(Startup, (init_file_picker, init_frame_limiter, setup_viewer))
        .add_systems(Last, limit_frame_rate)
        .add_systems(
            Update,
            (
                orbit_camera_input.in_set(ViewerSet::Input),
                (model_transform_input, display_toggle_input)
                    .in_set(ViewerSet::Input)
                    .run_if(viewer_active),
                apply_model_transform.in_set(ViewerSet::Rendering),
            ),
        );
    }
}

/// Scans the model directory once at startup. The directory is resolved the
/// same way the asset server resolves its root, so listed names load as-is.
pub fn init_file_picker(mut commands: Commands, config: Res<ViewerConfig>) {
    let dir = FileAssetReader::get_base_path().join(&config.assets_dir);
    info!("Model directory: {}", dir.display());

    commands.insert_resource(FilePicker::new(dir, config.open_picker_on_start));
}

/// Run condition: a model is loaded and the picker is out of the way.
pub fn viewer_active(picker: Option<Res<FilePicker>>, model_state: Res<ModelState>) -> bool {
    model_state.loaded && picker.is_some_and(|picker| !picker.visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_is_built_from_the_inserted_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::File::create(dir.path().join("model.glb")).unwrap();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(ViewerConfig {
                // Absolute, so joining onto the base path yields it unchanged
                assets_dir: dir.path().to_string_lossy().into_owned(),
                open_picker_on_start: false,
                ..default()
            })
            .add_systems(Startup, init_file_picker);

        app.update();

        let picker = app.world().resource::<FilePicker>();
        assert_eq!(picker.dir, dir.path());
        assert_eq!(picker.files, vec!["model.glb"]);
        assert!(!picker.visible);
    }
}
