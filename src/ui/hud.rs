use bevy::prelude::*;

use crate::core::constants::ui::*;
use crate::core::picker::FilePicker;
use crate::core::playback::AnimationPlayback;
use crate::core::view_state::ViewState;
use crate::rendering::model_loader::ModelState;

const CONTROL_HINTS: &str = "\
O: open model | Mouse drag: orbit | Wheel: zoom
W/S A/D Q/E: rotate | +/-: scale | R: fix rotation
F: wireframe overlay | B: bounds | G: axes
Space: pause | Left/Right: clip | Up/Down: speed";

#[derive(Component)]
pub struct HudRoot;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudLine {
    Status,
    Clip,
}

#[derive(Component)]
pub struct ProgressBar;

#[derive(Component)]
pub struct ProgressFill;

pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(HUD_PADDING)),
                ..default()
            },
            Visibility::Hidden,
            HudRoot,
        ))
        .with_children(|parent| {
            // Top-left text block
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_self: AlignSelf::FlexStart,
                        padding: UiRect::all(Val::Px(HUD_PADDING)),
                        row_gap: Val::Px(6.0),
                        ..default()
                    },
                    BackgroundColor(HUD_BACKGROUND_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(CONTROL_HINTS),
                        TextFont {
                            font_size: HUD_TEXT_SIZE,
                            ..default()
                        },
                        TextColor(MUTED_TEXT_COLOR),
                    ));
                    for line in [HudLine::Status, HudLine::Clip] {
                        panel.spawn((
                            Text::new(""),
                            TextFont {
                                font_size: HUD_TEXT_SIZE,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                            line,
                        ));
                    }
                });

            // Bottom-centered animation progress bar
            parent
                .spawn((
                    Node {
                        width: Val::Px(PROGRESS_BAR_WIDTH),
                        height: Val::Px(PROGRESS_BAR_HEIGHT),
                        align_self: AlignSelf::Center,
                        ..default()
                    },
                    BackgroundColor(PROGRESS_TRACK_COLOR),
                    Visibility::Hidden,
                    ProgressBar,
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(PROGRESS_FILL_COLOR),
                        ProgressFill,
                    ));
                });
        });
}

pub fn update_hud(
    picker: Res<FilePicker>,
    model_state: Res<ModelState>,
    view_state: Res<ViewState>,
    playback: Res<AnimationPlayback>,
    mut roots: Query<&mut Visibility, (With<HudRoot>, Without<ProgressBar>)>,
    mut bars: Query<&mut Visibility, (With<ProgressBar>, Without<HudRoot>)>,
    mut fills: Query<&mut Node, With<ProgressFill>>,
    mut lines: Query<(&mut Text, &HudLine)>,
) {
    let show_hud = !picker.visible;
    for mut visibility in roots.iter_mut() {
        visibility.set_if_neq(if show_hud { Visibility::Inherited } else { Visibility::Hidden });
    }
    if !show_hud {
        return;
    }

    let show_bar = model_state.loaded && playback.has_clips();
    for mut visibility in bars.iter_mut() {
        visibility.set_if_neq(if show_bar { Visibility::Inherited } else { Visibility::Hidden });
    }
    if show_bar {
        for mut node in fills.iter_mut() {
            node.width = Val::Percent(playback.progress() * 100.0);
        }
    }

    for (mut text, line) in lines.iter_mut() {
        let content = match line {
            HudLine::Status => status_line(model_state.file_name.as_deref(), &view_state),
            HudLine::Clip if show_bar => clip_line(&playback, model_state.clip_name(playback.clip_index)),
            HudLine::Clip => String::new(),
        };
        if text.0 != content {
            text.0 = content;
        }
    }
}

pub fn status_line(file_name: Option<&str>, view: &ViewState) -> String {
    let Some(file_name) = file_name else {
        return "No model loaded".to_string();
    };
    format!(
        "{} | scale {:.2} | rot ({:.0}, {:.0}, {:.0}) | fix {:.0}°",
        file_name,
        view.scale,
        view.rotation.x,
        view.rotation.y,
        view.rotation.z,
        view.correction.degrees()
    )
}

pub fn clip_line(playback: &AnimationPlayback, clip_name: Option<&str>) -> String {
    let mut line = format!(
        "Clip {}/{} {} | frame {}/{} | speed {:.2}x",
        playback.clip_index + 1,
        playback.clip_count(),
        clip_name.unwrap_or("(unnamed)"),
        playback.frame as u32,
        playback.frame_count(),
        playback.speed
    );
    if playback.paused {
        line.push_str(" | PAUSED");
    }
    line
}
