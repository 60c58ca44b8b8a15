//! # Model Loader Module
//!
//! Owns the lifecycle of the single model on screen:
//!
//! - **Selection**: a `ModelSelected` event releases the previous model and
//!   requests the new `.glb` from the asset server
//! - **Instantiation**: once the glTF asset is available its scene is spawned
//!   under a `ModelRoot` and an `AnimationGraph` is built from its clips
//! - **Release**: despawning the root and dropping every handle frees the
//!   scene, meshes, materials and animation clips
//!
//! Load success is not checked before the model counts as loaded; a failed
//! load only produces a log entry.

use bevy::asset::{AssetPath, LoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy_animation::graph::AnimationNodeIndex;
use bevy_animation::prelude::AnimationGraph;
use std::path::Path;

use crate::core::components::ModelRoot;
use crate::core::playback::{frame_count_for, AnimationPlayback};
use crate::core::view_state::ViewState;
use crate::core::viewer::ViewerSet;

pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelState>()
            .add_event::<ModelSelected>()
            .add_systems(
                Update,
                (load_selected_model, spawn_loaded_scene)
                    .chain()
                    .in_set(ViewerSet::Logic),
            );
    }
}

/// Sent by the file picker when the user clicks an entry.
#[derive(Event, Debug, Clone)]
pub struct ModelSelected {
    pub index: usize,
    pub file_name: String,
}

/// Everything held on behalf of the currently loaded model.
#[derive(Resource, Debug, Default)]
pub struct ModelState {
    pub loaded: bool,
    pub file_name: Option<String>,
    pub root: Option<Entity>,
    pub gltf: Option<Handle<Gltf>>,
    pub scene_spawned: bool,
    pub load_failed: bool,

    // Animation data, filled in once the asset is ready
    pub clips: Vec<Handle<AnimationClip>>,
    pub clip_names: Vec<Option<String>>,
    pub graph: Option<Handle<AnimationGraph>>,
    pub nodes: Vec<AnimationNodeIndex>,
    pub player: Option<Entity>,
    pub active_node: Option<AnimationNodeIndex>,
}

impl ModelState {
    /// Despawns the model hierarchy and drops all asset handles.
    pub fn release(&mut self, commands: &mut Commands) {
        if let Some(root) = self.root.take() {
            commands.entity(root).despawn_recursive();
        }
        if let Some(file_name) = self.file_name.take() {
            info!("Released model {} ({} animation clip(s))", file_name, self.clips.len());
        }
        *self = Self::default();
    }

    pub fn clip_name(&self, index: usize) -> Option<&str> {
        self.clip_names.get(index).and_then(|name| name.as_deref())
    }
}

/// Handles file picker selections: release the old model, request the new
/// one, reset view and playback state.
pub fn load_selected_model(
    mut commands: Commands,
    mut selections: EventReader<ModelSelected>,
    asset_server: Res<AssetServer>,
    mut model_state: ResMut<ModelState>,
    mut view_state: ResMut<ViewState>,
    mut playback: ResMut<AnimationPlayback>,
) {
    // Only the most recent click in a frame matters
    let Some(selection) = selections.read().last().cloned() else {
        return;
    };

    model_state.release(&mut commands);

    let gltf: Handle<Gltf> = asset_server.load(model_asset_path(&selection.file_name));
    let root = commands
        .spawn((
            ModelRoot,
            Name::new(selection.file_name.clone()),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    *model_state = ModelState {
        loaded: true,
        file_name: Some(selection.file_name.clone()),
        root: Some(root),
        gltf: Some(gltf),
        ..default()
    };
    *view_state = ViewState::default();
    playback.reset_for(Vec::new());

    info!("Loading model #{}: {}", selection.index, selection.file_name);
}

/// Asset path for a scanned file name. Built from a `Path` so a `#` in the
/// name stays part of the file name instead of starting a label.
pub fn model_asset_path(file_name: &str) -> AssetPath<'static> {
    AssetPath::from_path(Path::new(file_name)).into_owned()
}

/// Spawns the glTF scene under the model root once the asset and its
/// animation clips are available, and prepares the animation graph.
pub fn spawn_loaded_scene(
    mut commands: Commands,
    mut model_state: ResMut<ModelState>,
    mut playback: ResMut<AnimationPlayback>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
    clip_assets: Res<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    if model_state.scene_spawned || model_state.load_failed {
        return;
    }
    let (Some(handle), Some(root)) = (model_state.gltf.clone(), model_state.root) else {
        return;
    };
    let file_name = model_state.file_name.clone().unwrap_or_default();

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        error!("Failed to load model {}: {}", file_name, err);
        model_state.load_failed = true;
        return;
    }

    let Some(gltf) = gltf_assets.get(&handle) else {
        return;
    };

    // Labeled clips can land a frame after the glTF itself
    let Some(durations) = gltf
        .animations
        .iter()
        .map(|clip| clip_assets.get(clip).map(|clip| clip.duration()))
        .collect::<Option<Vec<f32>>>()
    else {
        return;
    };

    model_state.scene_spawned = true;

    let Some(scene) = gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()) else {
        warn!("Model {} contains no scenes, nothing to display", file_name);
        return;
    };
    commands.entity(root).with_children(|parent| {
        parent.spawn(SceneRoot(scene));
    });

    model_state.clip_names = gltf
        .animations
        .iter()
        .map(|clip| {
            gltf.named_animations
                .iter()
                .find(|(_, named)| *named == clip)
                .map(|(name, _)| name.to_string())
        })
        .collect();
    model_state.clips = gltf.animations.clone();

    if !gltf.animations.is_empty() {
        let (graph, nodes) = AnimationGraph::from_clips(gltf.animations.iter().cloned());
        model_state.graph = Some(graphs.add(graph));
        model_state.nodes = nodes;
    }

    let frame_counts: Vec<u32> = durations.into_iter().map(frame_count_for).collect();
    debug!("Clip frame counts for {}: {:?}", file_name, frame_counts);
    playback.reset_for(frame_counts);

    info!(
        "Model {} ready: {} scene(s), {} mesh(es), {} animation clip(s)",
        file_name,
        gltf.scenes.len(),
        gltf.meshes.len(),
        gltf.animations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::picker::FilePicker;
    use crate::core::view_state::RotationCorrection;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Gltf>()
            .init_resource::<ModelState>()
            .init_resource::<ViewState>()
            .init_resource::<AnimationPlayback>()
            .add_event::<ModelSelected>()
            .add_systems(Update, load_selected_model);
        app
    }

    fn model_roots(app: &mut App) -> Vec<Entity> {
        let mut query = app.world_mut().query_filtered::<Entity, With<ModelRoot>>();
        query.iter(app.world()).collect()
    }

    fn select(app: &mut App, picker: &mut FilePicker, index: usize) {
        let file_name = picker.select(index).unwrap();
        app.world_mut().send_event(ModelSelected { index, file_name });
        app.update();
    }

    fn picker() -> FilePicker {
        FilePicker {
            visible: true,
            files: vec!["a.glb".to_string(), "b.glb".to_string()],
            ..default()
        }
    }

    #[test]
    fn selecting_a_file_hides_dialog_and_marks_loaded() {
        let mut app = test_app();
        let mut picker = picker();
        assert!(!app.world().resource::<ModelState>().loaded);

        select(&mut app, &mut picker, 1);

        assert!(!picker.visible);
        let state = app.world().resource::<ModelState>();
        assert!(state.loaded);
        assert_eq!(state.file_name.as_deref(), Some("b.glb"));
        assert!(state.gltf.is_some());
        assert_eq!(model_roots(&mut app).len(), 1);
    }

    #[test]
    fn second_selection_releases_first_model() {
        let mut app = test_app();
        let mut picker = picker();

        select(&mut app, &mut picker, 0);
        let first_root = app.world().resource::<ModelState>().root.unwrap();
        let first_handle = app.world().resource::<ModelState>().gltf.clone().unwrap();

        picker.toggle();
        assert!(app.world().resource::<ModelState>().loaded);
        select(&mut app, &mut picker, 1);

        let roots = model_roots(&mut app);
        assert_eq!(roots.len(), 1);
        assert_ne!(roots[0], first_root);
        assert!(!app.world().entities().contains(first_root));

        let state = app.world().resource::<ModelState>();
        assert_eq!(state.file_name.as_deref(), Some("b.glb"));
        assert_ne!(state.gltf.as_ref().unwrap().id(), first_handle.id());
    }

    #[test]
    fn loading_resets_view_and_playback() {
        let mut app = test_app();
        let mut picker = picker();
        {
            let mut view = app.world_mut().resource_mut::<ViewState>();
            view.scale = 4.0;
            view.wireframe = true;
            view.correction = RotationCorrection::Half;
        }
        {
            let mut playback = app.world_mut().resource_mut::<AnimationPlayback>();
            playback.reset_for(vec![10, 20]);
            playback.next_clip();
            playback.adjust_speed(1.0);
        }

        select(&mut app, &mut picker, 0);

        assert_eq!(*app.world().resource::<ViewState>(), ViewState::default());
        assert_eq!(*app.world().resource::<AnimationPlayback>(), AnimationPlayback::default());
    }

    #[test]
    fn hash_in_file_name_is_not_a_label() {
        let path = model_asset_path("robot#2.glb");

        assert_eq!(path.path(), Path::new("robot#2.glb"));
        assert_eq!(path.label(), None);
        assert_eq!(path.get_full_extension().as_deref(), Some("glb"));
    }

    #[test]
    fn selected_file_with_hash_is_requested_whole() {
        let mut app = test_app();
        let mut picker = FilePicker {
            visible: true,
            files: vec!["robot#2.glb".to_string()],
            ..default()
        };

        select(&mut app, &mut picker, 0);

        let state = app.world().resource::<ModelState>();
        let requested = state.gltf.as_ref().and_then(|handle| handle.path()).unwrap();
        assert_eq!(requested.path(), Path::new("robot#2.glb"));
        assert_eq!(requested.label(), None);
    }

    #[test]
    fn frame_without_selection_changes_nothing() {
        let mut app = test_app();
        app.update();

        assert!(!app.world().resource::<ModelState>().loaded);
        assert!(model_roots(&mut app).is_empty());
    }
}
