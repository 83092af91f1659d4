use super::{next_generation, Bounds, Cell, LifeGrid};
use std::collections::HashSet;

fn bounds() -> Bounds {
    Bounds::new(40, 40)
}

fn cells(coords: &[(i32, i32)]) -> HashSet<Cell> {
    coords.iter().map(|&(c, r)| Cell::new(c, r)).collect()
}

#[test]
fn neighbors_interior() {
    let p = Cell::new(10, 10);
    let got: HashSet<_> = bounds().neighbors(p).collect();
    let expected = cells(&[
        (9, 9),
        (10, 9),
        (11, 9),
        (9, 10),
        (11, 10),
        (9, 11),
        (10, 11),
        (11, 11),
    ]);
    assert_eq!(got, expected);
    assert!(!got.contains(&p));
}

#[test]
fn neighbors_at_corners() {
    let b = bounds();
    let got: HashSet<_> = b.neighbors(Cell::new(0, 0)).collect();
    assert_eq!(got, cells(&[(1, 0), (0, 1), (1, 1)]));

    let got: HashSet<_> = b.neighbors(Cell::new(39, 39)).collect();
    assert_eq!(got, cells(&[(38, 38), (39, 38), (38, 39)]));
}

#[test]
fn neighbors_bound_axes_are_independent() {
    // A wide, short grid: row filtering must follow the height.
    let b = Bounds::new(10, 3);
    let got: HashSet<_> = b.neighbors(Cell::new(5, 2)).collect();
    assert_eq!(got, cells(&[(4, 1), (5, 1), (6, 1), (4, 2), (6, 2)]));

    // Column filtering follows the width even past the height.
    let got: HashSet<_> = b.neighbors(Cell::new(9, 1)).collect();
    assert_eq!(got, cells(&[(8, 0), (9, 0), (8, 1), (8, 2), (9, 2)]));
}

#[test]
fn neighbors_of_out_of_bounds_cell() {
    // The cell itself is unconstrained; only candidates are filtered.
    let got: HashSet<_> = bounds().neighbors(Cell::new(-1, 0)).collect();
    assert_eq!(got, cells(&[(0, 0), (0, 1)]));
}

#[test]
fn empty_grid_stays_empty() {
    assert!(next_generation(&HashSet::new(), bounds()).is_empty());
}

#[test]
fn lone_cell_dies() {
    let alive = cells(&[(10, 10)]);
    assert!(next_generation(&alive, bounds()).is_empty());
}

#[test]
fn block_is_a_fixed_point() {
    let block = cells(&[(10, 10), (11, 10), (10, 11), (11, 11)]);
    assert_eq!(next_generation(&block, bounds()), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = cells(&[(9, 10), (10, 10), (11, 10)]);
    let vertical = cells(&[(10, 9), (10, 10), (10, 11)]);

    let once = next_generation(&horizontal, bounds());
    assert_eq!(once, vertical);
    assert_eq!(next_generation(&once, bounds()), horizontal);
}

#[test]
fn overpopulated_cell_dies() {
    // Center of a plus sign has 4 live neighbors.
    let plus = cells(&[(10, 10), (9, 10), (11, 10), (10, 9), (10, 11)]);
    let next = next_generation(&plus, bounds());
    assert!(!next.contains(&Cell::new(10, 10)));
}

#[test]
fn toggle_twice_restores_membership() {
    let mut grid = LifeGrid::new(bounds());
    let p = Cell::new(3, 4);

    assert!(grid.toggle(p));
    assert!(grid.is_alive(p));
    assert!(!grid.toggle(p));
    assert!(!grid.is_alive(p));
}

#[test]
fn duplicate_set_is_idempotent() {
    let mut grid = LifeGrid::new(bounds());
    let p = Cell::new(3, 4);

    grid.set(p, true);
    grid.set(p, true);
    assert_eq!(grid.population(), 1);
}

#[test]
fn out_of_bounds_mutation_is_tolerated() {
    let mut grid = LifeGrid::new(bounds());
    let p = Cell::new(-5, 1000);

    grid.set(p, true);
    assert!(grid.is_alive(p));
    assert_eq!(grid.population(), 1);
}

#[test]
fn randomize_zero_yields_empty() {
    let mut grid = LifeGrid::new(bounds());
    grid.set(Cell::new(1, 1), true);
    grid.randomize(0, Some(42));
    assert!(grid.is_empty());
}

#[test]
fn randomize_stays_in_bounds() {
    let mut grid = LifeGrid::new(bounds());
    grid.randomize(500, Some(42));
    assert!(grid.population() <= 500);
    assert!(!grid.is_empty());
    assert!(grid.cells().all(|c| grid.bounds().contains(c)));
}

#[test]
fn clear_empties_the_grid() {
    let mut grid = LifeGrid::new(bounds());
    grid.randomize(100, Some(7));
    grid.clear();
    assert!(grid.is_empty());
}

#[test]
fn advance_matches_pure_rule() {
    let mut grid = LifeGrid::from_cells(bounds(), cells(&[(9, 10), (10, 10), (11, 10)]));
    let current: HashSet<Cell> = grid.cells().collect();
    let expected = next_generation(&current, grid.bounds());
    grid.advance();
    assert_eq!(grid.cells().collect::<HashSet<_>>(), expected);
}
