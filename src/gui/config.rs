use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: i32 = 40;
    pub const GRID_HEIGHT: i32 = 40;

    /// Frames between generation advances while playing.
    pub const UPDATE_CADENCE: u32 = 4;
    /// Regenerate spawns `rand(SPAWN_FACTOR_MIN..SPAWN_FACTOR_MAX) * GRID_WIDTH` cells.
    pub const SPAWN_FACTOR_MIN: i32 = 4;
    pub const SPAWN_FACTOR_MAX: i32 = 10;

    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const WIDGET_GAP: f32 = 20.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const FIELD_BACKGROUND: Color32 = Color32::from_rgb(128, 128, 128);
    pub const CELL_COLOR: Color32 = Color32::from_rgb(255, 255, 0);
    pub const GRIDLINE_COLOR: Color32 = Color32::BLACK;
    pub const GRIDLINE_WIDTH: f32 = 1.;
}
