use bevy::prelude::*;

/// Compiled-in viewer settings, inserted once by `main` before the plugins.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    /// Model directory, relative to the asset base path
    pub assets_dir: String,
    pub open_picker_on_start: bool,
    pub camera_distance: f32,
    pub target_fps: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            open_picker_on_start: true,
            camera_distance: 6.0,
            target_fps: 60.0,
        }
    }
}
