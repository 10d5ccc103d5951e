use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const CONTROL_PANEL_MIN_HEIGHT: f32 = 560.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_TEXT_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const PANEL_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    pub const FIELD_BACKGROUND_COLOR: Color32 = Color32::from_rgb(30, 30, 30);
    pub const ALIVE_CELL_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(60, 60, 60);

    pub const MAX_STEP_MS: u64 = 2000;
}
