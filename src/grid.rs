use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    r: isize,
    c: isize,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Cell {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }

    pub fn row(&self) -> isize {
        self.r
    }

    pub fn col(&self) -> isize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::new(self.r - 1, self.c),
            Direction::Down => Self::new(self.r + 1, self.c),
            Direction::Left => Self::new(self.r, self.c - 1),
            Direction::Right => Self::new(self.r, self.c + 1),
        }
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c) == 1
    }
}

/// Rectangular matrix of entry costs, a cost of 0 marks a wall.
#[derive(Debug, Clone)]
pub struct Grid {
    costs: Vec<u64>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, Error> {
        let row_n = rows.len();
        let col_n = rows.first().map(|row| row.len()).unwrap_or(0);
        if row_n == 0 || col_n == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut costs = Vec::with_capacity(row_n * col_n);
        for row in rows {
            if row.len() != col_n {
                return Err(Error::InconsistentRow(col_n, row.len()));
            }

            costs.extend(row);
        }

        Ok(Self {
            costs,
            row_n,
            col_n,
        })
    }

    /// (row count, column count)
    pub fn bounds(&self) -> (usize, usize) {
        (self.row_n, self.col_n)
    }

    pub fn cell_n(&self) -> usize {
        self.costs.len()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.index(cell).is_some()
    }

    pub fn cost(&self, cell: &Cell) -> Option<u64> {
        self.index(cell).and_then(|ind| self.costs.get(ind).copied())
    }

    pub fn is_passable(&self, cell: &Cell) -> bool {
        self.cost(cell).is_some_and(|cost| cost != 0)
    }

    pub fn index(&self, cell: &Cell) -> Option<usize> {
        let r = usize::try_from(cell.r).ok()?;
        let c = usize::try_from(cell.c).ok()?;
        if r < self.row_n && c < self.col_n {
            Some(r * self.col_n + c)
        } else {
            None
        }
    }
}
