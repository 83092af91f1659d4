#![warn(clippy::all)]

fn main() -> Result<(), eframe::Error> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1200., 860.))
            .with_min_inner_size(vec2(640.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life - Paused",
        options,
        Box::new(|_cc| Ok(Box::new(lifegrid::App::default()))),
    )
}
