use super::{Bounds, Cell};
use std::collections::HashSet;

/// Computes the next generation of `alive` under the standard
/// birth-3 / survive-2-or-3 rule.
///
/// Only the live set and its immediate neighborhood are examined, so the
/// cost of a step is proportional to the population rather than the grid
/// area. Both survivors and births are decided against the old set; the
/// caller replaces its state with the returned set wholesale.
pub fn next_generation(alive: &HashSet<Cell>, bounds: Bounds) -> HashSet<Cell> {
    let mut next = HashSet::with_capacity(alive.len());
    // Every neighbor of a live cell, dead or alive: the only cells whose
    // state can change.
    let mut frontier = HashSet::with_capacity(alive.len() * 4);

    for &cell in alive {
        let mut live_neighbors = 0;
        for n in bounds.neighbors(cell) {
            frontier.insert(n);
            if alive.contains(&n) {
                live_neighbors += 1;
            }
        }
        if live_neighbors == 2 || live_neighbors == 3 {
            next.insert(cell);
        }
    }

    for &cell in &frontier {
        let live_neighbors = bounds.neighbors(cell).filter(|n| alive.contains(n)).count();
        if live_neighbors == 3 {
            next.insert(cell);
        }
    }

    next
}
