/// A lattice cell, addressed by column and row.
///
/// Plain value type: cells are freely copied and compared by value, and the
/// live set hashes them directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Nominal grid dimensions. Used to filter neighbor candidates, to seed
/// random populations and to size the rendered canvas; the live set itself
/// is never clipped against them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    width: i32,
    height: i32,
}

/// Moore neighborhood offsets, (0, 0) excluded.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether `cell` lies inside the nominal lattice.
    ///
    /// Columns are checked against `0..width` and rows against `0..height`,
    /// both upper bounds exclusive.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.width && cell.row >= 0 && cell.row < self.height
    }

    /// The in-bounds Moore neighbors of `cell`: up to 8 cells adjacent
    /// horizontally, vertically or diagonally, never `cell` itself.
    ///
    /// `cell` may lie outside the bounds; only the candidates are filtered.
    pub fn neighbors(self, cell: Cell) -> impl Iterator<Item = Cell> {
        MOORE_OFFSETS
            .iter()
            .map(move |&(dc, dr)| Cell::new(cell.col + dc, cell.row + dr))
            .filter(move |&n| self.contains(n))
    }
}
