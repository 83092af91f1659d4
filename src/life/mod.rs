//! Core cellular-automaton state and update rule, independent of the GUI.

mod cell;
mod grid;
mod rules;

#[cfg(test)]
mod tests;

pub use cell::{Bounds, Cell};
pub use grid::LifeGrid;
pub use rules::next_generation;
