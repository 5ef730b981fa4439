//! Grid maze used as a state space for DFS, BFS and A*
//!
//! Cells are addressed by `(row, column)` with row 0 at the bottom; the
//! rendering prints the highest row first.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Blocked => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridLocation {
    pub row: usize,
    pub column: usize,
}

impl GridLocation {
    pub fn new(row: usize, column: usize) -> Self {
        GridLocation { row, column }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Sum of absolute row and column differences
///
/// Admissible and consistent for unit-cost 4-connected movement.
pub fn manhattan_distance(a: GridLocation, b: GridLocation) -> f64 {
    (a.row.abs_diff(b.row) + a.column.abs_diff(b.column)) as f64
}

/// Largest maze, in cells, that the command line will generate
pub const MAX_CELLS: usize = 1_000_000;

/// Number of cells in a `rows` x `columns` grid, `None` on overflow
pub fn cell_count(rows: usize, columns: usize) -> Option<usize> {
    rows.checked_mul(columns)
}

fn allocation_size(rows: usize, columns: usize) -> usize {
    match cell_count(rows, columns) {
        Some(cells) => cells,
        None => panic!("a {}x{} grid has more cells than fit in memory", rows, columns),
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: GridLocation,
    goal: GridLocation,
}

impl Grid {
    /// A grid with no obstacles
    ///
    /// # Panics
    /// Panics if `start` or `goal` lies outside the grid, or if
    /// `rows * columns` overflows.
    pub fn open(rows: usize, columns: usize, start: GridLocation, goal: GridLocation) -> Self {
        let mut grid = Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; allocation_size(rows, columns)],
            start,
            goal,
        };
        grid.place_markers();
        grid
    }

    /// A grid where each cell is blocked with probability `sparseness`
    ///
    /// The same seed always yields the same grid. Start and goal are never
    /// blocked. Panics like [`Grid::open`].
    pub fn random(
        rows: usize,
        columns: usize,
        sparseness: f64,
        start: GridLocation,
        goal: GridLocation,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..allocation_size(rows, columns))
            .map(|_| {
                if rng.gen::<f64>() < sparseness {
                    Cell::Blocked
                } else {
                    Cell::Empty
                }
            })
            .collect();
        let mut grid = Grid {
            rows,
            columns,
            cells,
            start,
            goal,
        };
        grid.place_markers();
        grid
    }

    /// Seed for [`Grid::random`] when the caller has none
    pub fn fresh_seed() -> u64 {
        rand::random()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> GridLocation {
        self.start
    }

    pub fn goal(&self) -> GridLocation {
        self.goal
    }

    fn offset(&self, loc: GridLocation) -> usize {
        assert!(
            loc.row < self.rows && loc.column < self.columns,
            "location {} is outside the {}x{} grid",
            loc,
            self.rows,
            self.columns
        );
        loc.row * self.columns + loc.column
    }

    pub fn cell(&self, loc: GridLocation) -> Cell {
        self.cells[self.offset(loc)]
    }

    pub fn set_cell(&mut self, loc: GridLocation, cell: Cell) {
        let offset = self.offset(loc);
        self.cells[offset] = cell;
        self.place_markers();
    }

    fn place_markers(&mut self) {
        let start = self.offset(self.start);
        let goal = self.offset(self.goal);
        self.cells[start] = Cell::Start;
        self.cells[goal] = Cell::Goal;
    }

    pub fn is_goal(&self, loc: &GridLocation) -> bool {
        *loc == self.goal
    }

    fn is_open(&self, loc: GridLocation) -> bool {
        self.cell(loc) != Cell::Blocked
    }

    /// Open neighbours in the order up, down, right, left
    pub fn successors(&self, loc: &GridLocation) -> Vec<GridLocation> {
        let mut locations = Vec::with_capacity(4);
        if loc.row + 1 < self.rows {
            locations.push(GridLocation::new(loc.row + 1, loc.column));
        }
        if loc.row > 0 {
            locations.push(GridLocation::new(loc.row - 1, loc.column));
        }
        if loc.column + 1 < self.columns {
            locations.push(GridLocation::new(loc.row, loc.column + 1));
        }
        if loc.column > 0 {
            locations.push(GridLocation::new(loc.row, loc.column - 1));
        }
        locations.retain(|l| self.is_open(*l));
        locations
    }

    /// Remaining-distance estimate from `loc` to this grid's goal
    pub fn heuristic(&self, loc: &GridLocation) -> f64 {
        manhattan_distance(*loc, self.goal)
    }

    /// Mark every location of `path` as part of the route
    pub fn mark(&mut self, path: &[GridLocation]) {
        for loc in path {
            let offset = self.offset(*loc);
            self.cells[offset] = Cell::Path;
        }
        self.place_markers();
    }

    /// Undo [`Grid::mark`] for `path`
    pub fn clear(&mut self, path: &[GridLocation]) {
        for loc in path {
            let offset = self.offset(*loc);
            self.cells[offset] = Cell::Empty;
        }
        self.place_markers();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: String = (0..self.columns)
                .map(|column| self.cell(GridLocation::new(row, column)).as_char())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
