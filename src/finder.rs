use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, info, trace};

use crate::{
    grid::{Cell, Direction, Grid},
    Error,
};

/// Distance of a cell no path has reached yet.
pub const UNREACHABLE: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Cell>,
    cost: u64,
}

impl Route {
    /// Cells from start to end, both included.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sum of the costs of every cell on the route, start included.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn start(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub fn end(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub fn cell_n(&self) -> usize {
        self.cells.len()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    cell: Cell,
    dist: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.cmp(&other.dist)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for Entry {}

impl Entry {
    fn new(cell: Cell, dist: u64) -> Self {
        Self { cell, dist }
    }
}

/// Scratch tables of one search, keyed by the flat cell index of the grid.
struct Search<'a> {
    grid: &'a Grid,
    dists: Vec<u64>,
    preds: Vec<Option<Cell>>,
    frontier: BinaryHeap<Reverse<Entry>>,
    /// First cell whose distance did not fit below `UNREACHABLE`.
    overflow_cell: Option<Cell>,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            dists: vec![UNREACHABLE; grid.cell_n()],
            preds: vec![None; grid.cell_n()],
            frontier: BinaryHeap::new(),
            overflow_cell: None,
        }
    }

    fn dist(&self, cell: &Cell) -> u64 {
        self.grid
            .index(cell)
            .map(|ind| self.dists[ind])
            .unwrap_or(UNREACHABLE)
    }

    fn pred(&self, cell: &Cell) -> Option<Cell> {
        self.grid.index(cell).and_then(|ind| self.preds[ind])
    }

    fn seed(&mut self, start: &Cell, dist: u64) {
        if let Some(ind) = self.grid.index(start) {
            self.dists[ind] = dist;
            self.frontier.push(Reverse(Entry::new(*start, dist)));
        }
    }

    fn run(&mut self, end: &Cell) {
        let (mut popped_n, mut stale_n, mut pushed_n) = (0usize, 0usize, 1usize);
        while let Some(Reverse(cur_entry)) = self.frontier.pop() {
            popped_n += 1;
            if cur_entry.cell == *end {
                break;
            }

            let cur_dist = self.dist(&cur_entry.cell);
            if cur_entry.dist > cur_dist {
                stale_n += 1;
                continue;
            }

            for next_cell in Direction::all_dirs()
                .iter()
                .map(|dir| cur_entry.cell.neighbor(*dir))
            {
                let Some(next_cost) = self.grid.cost(&next_cell).filter(|cost| *cost != 0) else {
                    continue;
                };
                let Some(next_ind) = self.grid.index(&next_cell) else {
                    continue;
                };

                // A sum reaching the sentinel would read as unreachable.
                let Some(next_dist) = cur_dist
                    .checked_add(next_cost)
                    .filter(|dist| *dist != UNREACHABLE)
                else {
                    self.overflow_cell.get_or_insert(next_cell);
                    continue;
                };
                if next_dist < self.dists[next_ind] {
                    trace!(
                        "Relax {} from {}: {} -> {}.",
                        next_cell,
                        cur_entry.cell,
                        self.dists[next_ind],
                        next_dist
                    );
                    self.dists[next_ind] = next_dist;
                    self.preds[next_ind] = Some(cur_entry.cell);
                    self.frontier.push(Reverse(Entry::new(next_cell, next_dist)));
                    pushed_n += 1;
                }
            }
        }

        debug!(
            "Search done: {} entries pushed, {} popped, {} stale.",
            pushed_n, popped_n, stale_n
        );
    }

    fn route_to(&self, start: &Cell, end: &Cell) -> Result<Route, Error> {
        let mut cells = vec![*end];
        let mut cur_cell = *end;
        while cur_cell != *start {
            cur_cell = self
                .pred(&cur_cell)
                .ok_or(Error::MissingPredecessor(cur_cell))?;
            cells.push(cur_cell);
        }
        cells.reverse();

        Ok(Route {
            cells,
            cost: self.dist(end),
        })
    }
}

/// Finds the cheapest 4-directional route from `start` to `end`.
///
/// Entering a cell costs its value, and the start cell's own cost is
/// counted too. Returns `Ok(None)` when no route exists.
pub fn find_path(grid: &Grid, start: &Cell, end: &Cell) -> Result<Option<Route>, Error> {
    let (row_n, col_n) = grid.bounds();
    if !grid.contains(start) {
        return Err(Error::StartOutOfBounds(*start, row_n, col_n));
    }
    if !grid.contains(end) {
        return Err(Error::EndOutOfBounds(*end, row_n, col_n));
    }

    let start_cost = grid.cost(start).unwrap_or(0);
    if start_cost == 0 {
        return Err(Error::StartBlocked(*start));
    }
    if !grid.is_passable(end) {
        return Err(Error::EndBlocked(*end));
    }

    debug!("Search route from {} to {} in {}x{} grid.", start, end, row_n, col_n);
    let mut search = Search::new(grid);
    search.seed(start, start_cost);
    search.run(end);

    if search.dist(end) == UNREACHABLE {
        if let Some(cell) = search.overflow_cell {
            return Err(Error::CostOverflow(cell));
        }
        info!("No route from {} to {}.", start, end);
        return Ok(None);
    }

    let route = search.route_to(start, end)?;
    info!(
        "Found route of {} cell(s) from {} to {} with cost {}.",
        route.cell_n(),
        start,
        end,
        route.cost()
    );

    Ok(Some(route))
}
