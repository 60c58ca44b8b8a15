use bevy::log::{Level, LogPlugin};
use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;

mod core;
mod rendering;
mod systems;
mod ui;

use crate::core::constants::window;
use crate::core::resources::ViewerConfig;
use crate::core::viewer::ViewerPlugin;
use rendering::animation_systems::PlaybackPlugin;
use rendering::model_loader::ModelLoaderPlugin;
use rendering::overlays::OverlayPlugin;
use ui::UIPlugin;

fn main() {
    let config = ViewerConfig::default();

    App::new()
        .insert_resource(ClearColor(window::CLEAR_COLOR))
        .insert_resource(config.clone())
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window::TITLE.into(),
                        resolution: (window::WIDTH, window::HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.assets_dir.clone(),
                    ..default()
                })
                .set(log_plugin()),
            WireframePlugin,
            ViewerPlugin,
            ModelLoaderPlugin,
            PlaybackPlugin,
            OverlayPlugin,
            UIPlugin,
        ))
        .run();
}

#[cfg(not(quiet_logging))]
fn log_plugin() -> LogPlugin {
    LogPlugin {
        level: Level::INFO,
        filter: "wgpu=error,naga=warn,glb_viewer=debug".to_string(),
        ..default()
    }
}

#[cfg(quiet_logging)]
fn log_plugin() -> LogPlugin {
    LogPlugin {
        level: Level::WARN,
        filter: "wgpu=error,naga=warn".to_string(),
        ..default()
    }
}
