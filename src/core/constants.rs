// Viewer configuration constants
// All the magic numbers used by the viewer live here, grouped by concern

// === WINDOW AND DISPLAY ===
pub mod window {
    use bevy::prelude::Color;

    pub const TITLE: &str = "3D Model Viewer";
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 720.0;

    // Matches the classic "dark gray" clear color (80, 80, 80)
    pub const CLEAR_COLOR: Color = Color::srgb(0.314, 0.314, 0.314);
}

// === ORBIT CAMERA ===
pub mod camera {
    use bevy::prelude::Vec3;

    pub const TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const INITIAL_YAW: f32 = 0.6;
    pub const INITIAL_PITCH: f32 = 0.35;

    pub const ORBIT_SENSITIVITY: f32 = 0.005; // Radians per pixel of drag
    pub const PITCH_LIMIT: f32 = 1.5; // Maximum pitch angle in radians
    pub const ZOOM_SENSITIVITY: f32 = 0.5; // Units per scroll line
    pub const PIXEL_SCROLL_FACTOR: f32 = 0.02; // Trackpads report pixels, not lines
    pub const MIN_RADIUS: f32 = 0.5;
    pub const MAX_RADIUS: f32 = 200.0;
}

// === ANIMATION PLAYBACK ===
pub mod playback {
    pub const FRAMES_PER_SECOND: f32 = 60.0;
    pub const MIN_SPEED: f32 = 0.1;
    pub const MAX_SPEED: f32 = 3.0;
    pub const DEFAULT_SPEED: f32 = 1.0;
    pub const SPEED_STEP: f32 = 0.01; // Applied every frame the key is held
}

// === MODEL TRANSFORM ===
pub mod transform {
    pub const DEFAULT_SCALE: f32 = 1.0;
    pub const SCALE_RATE: f32 = 1.0; // Scale units per second while held
    pub const ROTATION_RATE: f32 = 90.0; // Degrees per second while held
    pub const CORRECTION_STEP: f32 = 90.0;
}

// === OVERLAYS ===
pub mod overlays {
    use bevy::prelude::Color;

    pub const GRID_CELLS: u32 = 10;
    pub const GRID_SPACING: f32 = 1.0;
    pub const AXIS_LENGTH: f32 = 1.5;

    pub const GRID_COLOR: Color = Color::srgba(0.6, 0.6, 0.6, 0.5);
    pub const BOUNDS_COLOR: Color = Color::srgb(0.0, 0.9, 0.2);
}

// === UI CONSTANTS ===
pub mod ui {
    use bevy::prelude::*;

    // File picker dialog
    pub const DIALOG_WIDTH: f32 = 520.0;
    pub const DIALOG_HEIGHT: f32 = 420.0;
    pub const DIALOG_PADDING: f32 = 16.0;
    pub const DIALOG_TITLE_SIZE: f32 = 22.0;
    pub const ENTRY_HEIGHT: f32 = 30.0;
    pub const ENTRY_TEXT_SIZE: f32 = 16.0;
    pub const REFRESH_BUTTON_WIDTH: f32 = 120.0;
    pub const REFRESH_BUTTON_HEIGHT: f32 = 34.0;

    // Heads-up display
    pub const HUD_PADDING: f32 = 10.0;
    pub const HUD_TEXT_SIZE: f32 = 14.0;
    pub const PROGRESS_BAR_WIDTH: f32 = 400.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 12.0;

    // Colors
    pub const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);
    pub const PANEL_COLOR: Color = Color::srgba(0.15, 0.15, 0.15, 0.95);
    pub const PANEL_BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
    pub const LIST_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);
    pub const HUD_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.7);
    pub const PROGRESS_TRACK_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);
    pub const PROGRESS_FILL_COLOR: Color = Color::srgb(0.2, 0.6, 0.9);
    pub const TEXT_COLOR: Color = Color::WHITE;
    pub const MUTED_TEXT_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);
}

// === HOTKEYS ===
pub mod hotkeys {
    use bevy::prelude::KeyCode;

    // Dialog
    pub const TOGGLE_PICKER: KeyCode = KeyCode::KeyO;
    pub const CLOSE_PICKER: KeyCode = KeyCode::Escape;
    pub const REFRESH_PICKER: KeyCode = KeyCode::F5;

    // Display toggles
    pub const WIREFRAME_TOGGLE: KeyCode = KeyCode::KeyF;
    pub const BOUNDS_TOGGLE: KeyCode = KeyCode::KeyB;
    pub const AXES_TOGGLE: KeyCode = KeyCode::KeyG;

    // Animation
    pub const PAUSE: KeyCode = KeyCode::Space;
    pub const PREVIOUS_CLIP: KeyCode = KeyCode::ArrowLeft;
    pub const NEXT_CLIP: KeyCode = KeyCode::ArrowRight;
    pub const SPEED_UP: KeyCode = KeyCode::ArrowUp;
    pub const SLOW_DOWN: KeyCode = KeyCode::ArrowDown;

    // Model transform
    pub const ROTATE_X_POS: KeyCode = KeyCode::KeyW;
    pub const ROTATE_X_NEG: KeyCode = KeyCode::KeyS;
    pub const ROTATE_Y_POS: KeyCode = KeyCode::KeyD;
    pub const ROTATE_Y_NEG: KeyCode = KeyCode::KeyA;
    pub const ROTATE_Z_POS: KeyCode = KeyCode::KeyE;
    pub const ROTATE_Z_NEG: KeyCode = KeyCode::KeyQ;
    pub const SCALE_UP: KeyCode = KeyCode::Equal;
    pub const SCALE_DOWN: KeyCode = KeyCode::Minus;
    pub const ROTATION_CORRECTION: KeyCode = KeyCode::KeyR;
}
