mod gui;
mod life;

pub use gui::{App, Config};
pub use life::{next_generation, Bounds, Cell, LifeGrid};
