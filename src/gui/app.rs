use super::{Config, FpsLimiter, PlayTimer};
use crate::{Bounds, LifeGrid};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, ViewportCommand};
use rand::Rng;
use std::time::Instant;

pub struct App {
    pub(super) grid: LifeGrid,
    pub(super) is_paused: bool,            // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,          // Apply a single generation and stay paused.
    pub(super) ticks_since_advance: u32,   // Frames since the last generation advance.
    pub(super) generation: u64,            // Current generation number.
    pub(super) last_update_duration: f64,  // Duration of the last generation advance in seconds.
    pub(super) show_gridlines: bool,
    pub(super) max_fps: f64,
    pub(super) play_timer: PlayTimer,      // Wall-clock time spent playing.
    pub(super) fps_limiter: FpsLimiter,    // Limits the frame rate to a certain value.
}

impl Default for App {
    fn default() -> Self {
        Self {
            grid: LifeGrid::new(Bounds::new(Config::GRID_WIDTH, Config::GRID_HEIGHT)),
            is_paused: true,
            do_one_step: false,
            ticks_since_advance: 0,
            generation: 0,
            last_update_duration: 0.,
            show_gridlines: true,
            max_fps: Config::MAX_FPS,
            play_timer: PlayTimer::default(),
            fps_limiter: FpsLimiter::default(),
        }
    }
}

impl App {
    pub(super) fn toggle_playing(&mut self) {
        self.is_paused = !self.is_paused;
        if self.is_paused {
            self.play_timer.pause();
        } else {
            self.play_timer.start();
        }
    }

    pub(super) fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.is_paused = true;
        self.do_one_step = false;
        self.ticks_since_advance = 0;
        self.play_timer.reset();
    }

    pub(super) fn regenerate(&mut self) {
        let factor = rand::thread_rng()
            .gen_range(Config::SPAWN_FACTOR_MIN..Config::SPAWN_FACTOR_MAX);
        let count = (factor * Config::GRID_WIDTH) as usize;
        self.grid.randomize(count, None);
        self.generation = 0;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.toggle_playing();
            }
            if input.key_pressed(Key::C) {
                self.clear();
            }
            if input.key_pressed(Key::G) {
                self.regenerate();
            }
            if input.key_pressed(Key::N) && self.is_paused {
                self.do_one_step = true;
            }
        });
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            self.ticks_since_advance = 0;
            return;
        }

        if !self.do_one_step {
            self.ticks_since_advance += 1;
            if self.ticks_since_advance < Config::UPDATE_CADENCE {
                return;
            }
        }
        self.ticks_since_advance = 0;
        self.do_one_step = false;

        let timer = Instant::now();
        self.grid.advance();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // mirror the playback state in the title bar
        let state = if self.is_paused { "Paused" } else { "Playing" };
        ctx.send_viewport_cmd(ViewportCommand::Title(format!("Game of Life - {state}")));

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
