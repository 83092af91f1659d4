use super::{App, Config};
use crate::Cell;
use eframe::egui::{
    pos2, vec2, Button, Checkbox, Rect, RichText, Sense, Slider, Stroke, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'_> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_playback_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.toggle_playing();
            }

            ui.add_enabled_ui(self.is_paused, |ui| {
                if ui.add(Self::new_button("Next step")).clicked() {
                    self.do_one_step = true;
                }
            });
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear();
            }

            if ui.add(Self::new_button("Random")).clicked() {
                self.regenerate();
            }
        });

        ui.label(Self::new_text(
            "Click the field to toggle a cell.\nSpace: play/pause, N: step, C: clear, G: random",
        ));

        ui.label(Self::new_text(&format!(
            "\nGeneration: {}\nPopulation: {}\nPlay time: {:.1} s",
            self.generation,
            self.grid.population(),
            self.play_timer.elapsed().as_secs_f64(),
        )));
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });

        ui.add(Checkbox::new(
            &mut self.show_gridlines,
            Self::new_text("Gridlines"),
        ));

        ui.label(Self::new_text(&format!(
            "Last update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_playback_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_appearance_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let bounds = self.grid.bounds();
        let tile = (size_px / bounds.width() as f32)
            .min(size_px / bounds.height() as f32)
            .floor();
        let canvas = vec2(tile * bounds.width() as f32, tile * bounds.height() as f32);

        let (response, painter) = ui.allocate_painter(canvas, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0., Config::FIELD_BACKGROUND);

        for cell in self.grid.cells() {
            // out-of-range cells stay in the set but have no tile to draw
            if !bounds.contains(cell) {
                continue;
            }
            let min = pos2(
                origin.x + cell.col as f32 * tile,
                origin.y + cell.row as f32 * tile,
            );
            painter.rect_filled(Rect::from_min_size(min, vec2(tile, tile)), 0., Config::CELL_COLOR);
        }

        if self.show_gridlines {
            let stroke = Stroke::new(Config::GRIDLINE_WIDTH, Config::GRIDLINE_COLOR);
            for row in 0..=bounds.height() {
                let y = origin.y + row as f32 * tile;
                painter.line_segment([pos2(origin.x, y), pos2(origin.x + canvas.x, y)], stroke);
            }
            for col in 0..=bounds.width() {
                let x = origin.x + col as f32 * tile;
                painter.line_segment([pos2(x, origin.y), pos2(x, origin.y + canvas.y)], stroke);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let cell = Cell::new(
                    ((pos.x - origin.x) / tile).floor() as i32,
                    ((pos.y - origin.y) / tile).floor() as i32,
                );
                self.grid.toggle(cell);
            }
        }
    }

    pub(super) fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
