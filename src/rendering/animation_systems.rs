use bevy::prelude::*;
use bevy_animation::prelude::AnimationGraphHandle;

use crate::core::constants::{hotkeys, playback::SPEED_STEP};
use crate::core::playback::AnimationPlayback;
use crate::core::viewer::{viewer_active, ViewerSet};
use crate::rendering::model_loader::ModelState;

pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                playback_input.in_set(ViewerSet::Input).run_if(viewer_active),
                (advance_playback, bind_animation_player)
                    .chain()
                    .in_set(ViewerSet::Logic),
                pose_active_clip.in_set(ViewerSet::Rendering),
            ),
        );
    }
}

/// Pause, clip switching and speed control.
pub fn playback_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    model_state: Res<ModelState>,
    mut playback: ResMut<AnimationPlayback>,
) {
    if !playback.has_clips() {
        return;
    }

    if keyboard.just_pressed(hotkeys::PAUSE) {
        let paused = playback.toggle_pause();
        info!("Animation {}", if paused { "paused" } else { "resumed" });
    }

    let previous_index = playback.clip_index;
    if keyboard.just_pressed(hotkeys::NEXT_CLIP) {
        playback.next_clip();
    }
    if keyboard.just_pressed(hotkeys::PREVIOUS_CLIP) {
        playback.previous_clip();
    }
    if playback.clip_index != previous_index {
        info!(
            "Switched to clip {}/{} ({})",
            playback.clip_index + 1,
            playback.clip_count(),
            model_state.clip_name(playback.clip_index).unwrap_or("unnamed")
        );
    }

    // Held keys step the speed every frame
    let mut delta = 0.0;
    if keyboard.pressed(hotkeys::SPEED_UP) {
        delta += SPEED_STEP;
    }
    if keyboard.pressed(hotkeys::SLOW_DOWN) {
        delta -= SPEED_STEP;
    }
    if delta != 0.0 {
        let speed = playback.adjust_speed(delta);
        debug!("Animation speed {:.2}x", speed);
    }
}

pub fn advance_playback(time: Res<Time>, mut playback: ResMut<AnimationPlayback>) {
    playback.advance(time.delta_secs());
}

/// Attaches the model's animation graph to the `AnimationPlayer` inside the
/// spawned scene. The scene is instantiated a few frames after it is
/// spawned, so this keeps looking until the player shows up.
pub fn bind_animation_player(
    mut commands: Commands,
    mut model_state: ResMut<ModelState>,
    children: Query<&Children>,
    animation_players: Query<&AnimationPlayer>,
) {
    if model_state.player.is_some() {
        return;
    }
    let (Some(root), Some(graph)) = (model_state.root, model_state.graph.clone()) else {
        return;
    };

    let Some(player_entity) = search_for_animation_player(root, &children, &animation_players, 0) else {
        return;
    };

    commands.entity(player_entity).insert(AnimationGraphHandle(graph));
    model_state.player = Some(player_entity);
    model_state.active_node = None;

    info!(
        "Bound {} animation clip(s) to player {:?}",
        model_state.nodes.len(),
        player_entity
    );
}

fn search_for_animation_player(
    entity: Entity,
    children: &Query<&Children>,
    animation_players: &Query<&AnimationPlayer>,
    depth: usize,
) -> Option<Entity> {
    if depth > 16 {
        return None; // Deeper than any sane scene hierarchy
    }

    if animation_players.get(entity).is_ok() {
        return Some(entity);
    }

    children.get(entity).ok()?.iter().find_map(|&child| {
        search_for_animation_player(child, children, animation_players, depth + 1)
    })
}

/// Poses the active clip at the playback counter. The player's own clock is
/// kept paused so the counter is the only thing that moves the animation.
pub fn pose_active_clip(
    mut model_state: ResMut<ModelState>,
    playback: Res<AnimationPlayback>,
    mut animation_players: Query<&mut AnimationPlayer>,
) {
    let Some(player_entity) = model_state.player else {
        return;
    };
    let Some(&node) = model_state.nodes.get(playback.clip_index) else {
        return;
    };
    let Ok(mut player) = animation_players.get_mut(player_entity) else {
        return;
    };

    if model_state.active_node != Some(node) {
        player.stop_all();
        player.play(node).pause();
        model_state.active_node = Some(node);
        debug!("Playing graph node {:?} on player {:?}", node, player_entity);
    }

    if let Some(active) = player.animation_mut(node) {
        active.seek_to(playback.seek_seconds());
    }
}
