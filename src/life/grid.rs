use super::{next_generation, Bounds, Cell};
use std::collections::HashSet;

/// Sparse Game of Life board: the set of live cells plus the nominal bounds.
///
/// Membership is binary and duplicate-free. Mutation is not bounds-checked;
/// out-of-range cells are tolerated in the set and only filtered when they
/// appear as neighbor candidates or get rendered.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    alive: HashSet<Cell>,
    bounds: Bounds,
}

impl LifeGrid {
    /// An empty board with the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            alive: HashSet::new(),
            bounds,
        }
    }

    /// A board pre-populated from an iterator of live cells.
    pub fn from_cells(bounds: Bounds, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            alive: cells.into_iter().collect(),
            bounds,
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Iterates over the live cells in arbitrary order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    pub fn set(&mut self, cell: Cell, state: bool) {
        if state {
            self.alive.insert(cell);
        } else {
            self.alive.remove(&cell);
        }
    }

    /// Flips the cell's membership and returns its new state.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.alive.remove(&cell) {
            false
        } else {
            self.alive.insert(cell);
            true
        }
    }

    pub fn clear(&mut self) {
        self.alive.clear();
    }

    /// Replaces the live set with up to `count` cells drawn uniformly from
    /// the bounds. Duplicate draws collapse, so the resulting population may
    /// be smaller than `count`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, count: usize, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.alive.clear();
        for _ in 0..count {
            self.alive.insert(Cell::new(
                rng.gen_range(0..self.bounds.width()),
                rng.gen_range(0..self.bounds.height()),
            ));
        }
    }

    /// Applies one generation of the update rule, swapping in the freshly
    /// computed set so survivors and births are both judged against the old
    /// one.
    pub fn advance(&mut self) {
        self.alive = next_generation(&self.alive, self.bounds);
    }
}
