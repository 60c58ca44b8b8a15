// UI module: file picker dialog and heads-up display

pub mod button_styles;
pub mod file_picker;
pub mod hud;

pub use file_picker::*;
pub use hud::*;

use bevy::prelude::*;

use crate::core::viewer::ViewerSet;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_file_picker, setup_hud))
            .add_systems(
                Update,
                (picker_hotkeys, handle_file_entry_clicks, handle_refresh_click)
                    .chain()
                    .in_set(ViewerSet::Input),
            )
            .add_systems(
                Update,
                (sync_picker_visibility, rebuild_file_list, update_hud).in_set(ViewerSet::Rendering),
            );
    }
}
