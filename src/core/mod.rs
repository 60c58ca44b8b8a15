/// Core viewer modules: state, configuration and the plugin that wires them up
pub mod components;
pub mod constants;
pub mod frame_pacing;
pub mod picker;
pub mod playback;
pub mod resources;
pub mod scanner;
pub mod view_state;
pub mod viewer;
