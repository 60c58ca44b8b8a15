//! Modal file picker listing the `.glb` files of the model directory

use bevy::prelude::*;

use crate::core::constants::{hotkeys, ui::*};
use crate::core::picker::FilePicker;
use crate::rendering::model_loader::ModelSelected;
use crate::ui::button_styles::{spawn_text_button, ButtonStyle};

/// Marker for the full-screen overlay holding the dialog
#[derive(Component)]
pub struct FilePickerDialog;

/// Marker for the node the file entries are rebuilt into
#[derive(Component)]
pub struct FileListContainer;

#[derive(Component, Debug, Clone)]
pub struct FileEntryButton {
    pub index: usize,
}

#[derive(Component)]
pub struct RefreshButton;

/// Spawns the dialog hidden; `sync_picker_visibility` reveals it.
pub fn setup_file_picker(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GlobalZIndex(10),
            Visibility::Hidden,
            FilePickerDialog,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(DIALOG_WIDTH),
                        height: Val::Px(DIALOG_HEIGHT),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(DIALOG_PADDING)),
                        border: UiRect::all(Val::Px(2.0)),
                        row_gap: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderColor(PANEL_BORDER_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Select a model"),
                        TextFont {
                            font_size: DIALOG_TITLE_SIZE,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));

                    // Entries are filled in by `rebuild_file_list`
                    panel.spawn((
                        Node {
                            flex_grow: 1.0,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(4.0),
                            padding: UiRect::all(Val::Px(6.0)),
                            overflow: Overflow::clip_y(),
                            ..default()
                        },
                        BackgroundColor(LIST_COLOR),
                        FileListContainer,
                    ));

                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Row,
                            justify_content: JustifyContent::SpaceBetween,
                            align_items: AlignItems::Center,
                            ..default()
                        })
                        .with_children(|footer| {
                            footer.spawn((
                                Text::new("O: close    F5: refresh"),
                                TextFont {
                                    font_size: HUD_TEXT_SIZE,
                                    ..default()
                                },
                                TextColor(MUTED_TEXT_COLOR),
                            ));
                            spawn_text_button(
                                footer,
                                "Refresh",
                                Node {
                                    width: Val::Px(REFRESH_BUTTON_WIDTH),
                                    height: Val::Px(REFRESH_BUTTON_HEIGHT),
                                    border: UiRect::all(Val::Px(1.0)),
                                    justify_content: JustifyContent::Center,
                                    align_items: AlignItems::Center,
                                    ..default()
                                },
                                &ButtonStyle::ACTION,
                                ENTRY_TEXT_SIZE,
                                RefreshButton,
                            );
                        });
                });
        });
}

/// Dialog hotkeys. Toggling works whether or not a model is loaded.
pub fn picker_hotkeys(keyboard: Res<ButtonInput<KeyCode>>, mut picker: ResMut<FilePicker>) {
    if keyboard.just_pressed(hotkeys::TOGGLE_PICKER) {
        picker.toggle();
        debug!("File picker {}", if picker.visible { "shown" } else { "hidden" });
    }
    if picker.visible && keyboard.just_pressed(hotkeys::CLOSE_PICKER) {
        picker.hide();
    }
    if picker.visible && keyboard.just_pressed(hotkeys::REFRESH_PICKER) {
        picker.refresh();
    }
}

pub fn handle_file_entry_clicks(
    mut entries: Query<(&Interaction, &FileEntryButton, &mut BackgroundColor), Changed<Interaction>>,
    mut picker: ResMut<FilePicker>,
    mut selections: EventWriter<ModelSelected>,
) {
    for (interaction, entry, mut color) in entries.iter_mut() {
        let selected = picker.selected == Some(entry.index);
        *color = BackgroundColor(ButtonStyle::FILE_ENTRY.color_for(*interaction, selected));

        if *interaction == Interaction::Pressed {
            if let Some(file_name) = picker.select(entry.index) {
                info!("Selected {} from the file picker", file_name);
                selections.send(ModelSelected {
                    index: entry.index,
                    file_name,
                });
            }
        }
    }
}

pub fn handle_refresh_click(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<RefreshButton>)>,
    mut picker: ResMut<FilePicker>,
) {
    for (interaction, mut color) in buttons.iter_mut() {
        *color = BackgroundColor(ButtonStyle::ACTION.color_for(*interaction, false));

        if *interaction == Interaction::Pressed {
            picker.refresh();
        }
    }
}

pub fn sync_picker_visibility(
    picker: Res<FilePicker>,
    mut dialogs: Query<&mut Visibility, With<FilePickerDialog>>,
) {
    if !picker.is_changed() {
        return;
    }
    for mut visibility in dialogs.iter_mut() {
        *visibility = if picker.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Rebuilds the entry list from scratch whenever the picker state changes.
pub fn rebuild_file_list(
    mut commands: Commands,
    picker: Res<FilePicker>,
    containers: Query<Entity, With<FileListContainer>>,
) {
    if !picker.is_changed() {
        return;
    }

    for container in containers.iter() {
        commands.entity(container).despawn_descendants();
        commands.entity(container).with_children(|list| {
            if picker.files.is_empty() {
                list.spawn((
                    Text::new(empty_list_message(&picker)),
                    TextFont {
                        font_size: ENTRY_TEXT_SIZE,
                        ..default()
                    },
                    TextColor(MUTED_TEXT_COLOR),
                ));
                return;
            }

            for (index, file_name) in picker.files.iter().enumerate() {
                let selected = picker.selected == Some(index);
                list.spawn((
                    Button,
                    Node {
                        width: Val::Percent(100.0),
                        min_height: Val::Px(ENTRY_HEIGHT),
                        padding: UiRect::horizontal(Val::Px(8.0)),
                        align_items: AlignItems::Center,
                        flex_shrink: 0.0,
                        ..default()
                    },
                    BackgroundColor(ButtonStyle::FILE_ENTRY.color_for(Interaction::None, selected)),
                    FileEntryButton { index },
                ))
                .with_children(|entry| {
                    entry.spawn((
                        Text::new(file_name.clone()),
                        TextFont {
                            font_size: ENTRY_TEXT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
            }
        });
    }
}

pub fn empty_list_message(picker: &FilePicker) -> String {
    format!("No .glb files found in {}", picker.dir.display())
}
