use super::{cell_under_pointer, Config};
use crate::{Pattern, Settings, Simulator};
use anyhow::Result;
use eframe::egui::{vec2, CentralPanel, Context, Frame, Key, Margin, Rect, Vec2};
use egui_file::FileDialog;
use rand_chacha::ChaCha8Rng;
use std::{path::Path, time::Instant};

pub struct App {
    pub(super) simulator: Simulator,     // Game of Life state.
    pub(super) rng: ChaCha8Rng,          // Random source for re-filling the field.
    pub(super) cell_size: f32,           // Side of a cell in pixels.
    pub(super) alive_probability: f64,   // Density used by "Randomize".
    pub(super) step_ms: u64,             // Step interval edited in the control panel.
    pub(super) selected_pattern: usize,  // Index into `BUILTIN_PATTERNS`.
    pub(super) file_dialog: Option<FileDialog>,
    pub(super) message: Option<String>,  // Last pattern loading error.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut rng = settings.rng();
        let simulator = settings.build_simulator(&mut rng, Instant::now())?;
        Ok(Self {
            simulator,
            rng,
            cell_size: settings.cell_size,
            alive_probability: settings.alive_probability,
            step_ms: settings.step_ms,
            selected_pattern: 0,
            file_dialog: None,
            message: None,
            field_rect: None,
        })
    }

    /// Window size that fits the control panel and the whole field.
    pub fn window_size(settings: &Settings) -> Vec2 {
        let field = vec2(
            settings.cols as f32 * settings.cell_size,
            settings.rows as f32 * settings.cell_size,
        );
        vec2(
            Config::CONTROL_PANEL_WIDTH + field.x + 3. * Config::FRAME_MARGIN,
            field.y.max(Config::CONTROL_PANEL_MIN_HEIGHT) + 2. * Config::FRAME_MARGIN,
        )
    }

    pub(super) fn load_pattern(&mut self, pattern: Result<Pattern>) {
        self.message = pattern
            .and_then(|p| self.simulator.load_pattern(&p))
            .err()
            .map(|e| format!("{:#}", e));
    }

    pub(super) fn load_pattern_file(&mut self, path: &Path) {
        self.load_pattern(Pattern::from_file(path));
    }

    /// Pause toggling and cell editing, in this order.
    fn handle_input(&mut self, ctx: &Context, now: Instant) {
        let (pause_requested, pointer, primary, secondary) = ctx.input(|input| {
            (
                input.key_down(Key::Space),
                input.pointer.latest_pos(),
                input.pointer.primary_down(),
                input.pointer.secondary_down(),
            )
        });

        self.simulator.toggle_pause_if_requested(pause_requested, now);

        if !self.simulator.is_paused() || self.file_dialog.is_some() {
            return;
        }
        let cell = pointer
            .zip(self.field_rect)
            .and_then(|(pos, rect)| cell_under_pointer(rect, pos, self.cell_size));
        if let Some((row, col)) = cell {
            if primary {
                self.simulator.apply_edit(row, col, true);
            }
            if secondary {
                self.simulator.apply_edit(row, col, false);
            }
        }
    }

    fn show_file_dialog(&mut self, ctx: &Context) {
        let mut selected = None;
        let mut closed = false;
        if let Some(dialog) = &mut self.file_dialog {
            if dialog.show(ctx).selected() {
                selected = dialog.path().map(Path::to_path_buf);
            }
            closed = !dialog.visible();
        }
        if closed {
            self.file_dialog = None;
        }
        if let Some(path) = selected {
            self.load_pattern_file(&path);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // the field rect is known from the previous frame
        self.handle_input(ctx, now);
        self.simulator.advance(now);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::PANEL_FILL_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui, now);
            });

        self.show_file_dialog(ctx);

        ctx.request_repaint();
    }
}
