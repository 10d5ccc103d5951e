use super::{App, Config};
use crate::{Pattern, Topology, BUILTIN_PATTERNS};
use eframe::egui::{
    pos2, vec2, Button, ComboBox, DragValue, Pos2, Rect, RichText, Sense, Slider, Stroke, Ui,
    Vec2,
};
use egui_file::FileDialog;
use std::time::{Duration, Instant};

/// Translates a pointer position into `(row, col)` by integer division by the cell size.
///
/// Positions left of or above the field give `None`; positions past its right
/// or bottom edge are returned as is and rejected by the simulator.
pub fn cell_under_pointer(field: Rect, pos: Pos2, cell_size: f32) -> Option<(usize, usize)> {
    let offset = pos - field.min;
    if offset.x < 0. || offset.y < 0. {
        return None;
    }
    Some((
        (offset.y / cell_size) as usize,
        (offset.x / cell_size) as usize,
    ))
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui, now: Instant) {
        let text = if self.simulator.is_paused() {
            "Play"
        } else {
            "Pause"
        };
        if ui.add(Self::new_button(text)).clicked() {
            let paused = self.simulator.is_paused();
            self.simulator.set_paused(!paused);
        }
        ui.label(Self::new_text("(or hold Space)"));

        ui.add_enabled_ui(self.simulator.is_paused(), |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.simulator.step(now);
            }
            ui.label(Self::new_text("Left/right click edits cells"));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Step: "));
            let response =
                ui.add(DragValue::new(&mut self.step_ms).range(1..=Config::MAX_STEP_MS));
            ui.label(Self::new_text(" ms"));
            if response.changed() {
                self.simulator
                    .set_step_interval(Duration::from_millis(self.step_ms));
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Topology: "));
            let mut topology = self.simulator.topology();
            ui.radio_value(&mut topology, Topology::Torus, Self::new_text("Torus"));
            ui.radio_value(&mut topology, Topology::Bounded, Self::new_text("Bounded"));
            self.simulator.set_topology(topology);
        });
    }

    fn draw_field_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.simulator
                    .randomize(self.alive_probability, &mut self.rng);
            }
            ui.add(Slider::new(&mut self.alive_probability, 0.0..=1.0));
        });

        if ui.add(Self::new_button("Clear")).clicked() {
            self.simulator.clear();
        }

        ui.horizontal(|ui| {
            ComboBox::from_id_source("builtin_pattern")
                .selected_text(BUILTIN_PATTERNS[self.selected_pattern].0)
                .show_ui(ui, |ui| {
                    for (i, (name, _)) in BUILTIN_PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, *name);
                    }
                });
            if ui.add(Self::new_button("Place")).clicked() {
                let (name, _) = BUILTIN_PATTERNS[self.selected_pattern];
                self.load_pattern(Pattern::builtin(name));
            }
        });

        if ui.add(Self::new_button("Load RLE file")).clicked() {
            let mut dialog = FileDialog::open_file(None);
            dialog.open();
            self.file_dialog = Some(dialog);
        }

        if let Some(message) = &self.message {
            ui.label(
                RichText::new(message)
                    .color(Config::ERROR_TEXT_COLOR)
                    .size(Config::TEXT_SIZE),
            );
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui, now);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_field_controls(ui);
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            ui.label(Self::new_text(&self.simulator.stats()));
        });
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let grid = self.simulator.grid();
        let cs = self.cell_size;
        let size = vec2(grid.cols() as f32 * cs, grid.rows() as f32 * cs);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0., Config::FIELD_BACKGROUND_COLOR);

        for (row, col) in grid.alive_cells() {
            let min = rect.min + vec2(col as f32 * cs + 0.5, row as f32 * cs + 0.5);
            painter.rect_filled(
                Rect::from_min_size(min, Vec2::splat(cs - 1.)),
                0.,
                Config::ALIVE_CELL_COLOR,
            );
        }

        let stroke = Stroke::new(1., Config::GRID_LINE_COLOR);
        for col in 0..=grid.cols() {
            let x = rect.left() + col as f32 * cs;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for row in 0..=grid.rows() {
            let y = rect.top() + row as f32 * cs;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }

        self.field_rect.replace(rect);
    }

    pub fn draw(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui, now);
            ui.add_space(Config::FRAME_MARGIN);
            self.draw_field(ui);
        });
    }
}
