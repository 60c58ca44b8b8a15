/// Rendering modules for the loaded model, its animation and debug overlays
pub mod animation_systems;
/// Model lifecycle: selection, loading, release
pub mod model_loader;
pub mod overlays;
