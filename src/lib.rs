use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;

pub mod finder;
pub mod grid;

pub use finder::{find_path, Route, UNREACHABLE};
pub use grid::{Cell, Direction, Grid};

#[derive(Debug)]
pub enum Error {
    MissingLine(&'static str),
    InvalidTokenCount(usize, usize, usize),
    InvalidInteger(usize, String),
    EmptyGrid,
    InconsistentRow(usize, usize),
    StartOutOfBounds(Cell, usize, usize),
    EndOutOfBounds(Cell, usize, usize),
    StartBlocked(Cell),
    EndBlocked(Cell),
    MissingPredecessor(Cell),
    CostOverflow(Cell),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingLine(section) => {
                write!(f, "Input ended before the line of {}.", section)
            }
            Error::InvalidTokenCount(line_no, expect_n, given_n) => write!(
                f,
                "Expect {} value(s) in line {}, given {}.",
                expect_n, line_no, given_n
            ),
            Error::InvalidInteger(line_no, text) => {
                write!(f, "Invalid integer text({}) in line {}.", text, line_no)
            }
            Error::EmptyGrid => write!(f, "Expect at least one row and one column in grid."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::StartOutOfBounds(cell, row_n, col_n) => write!(
                f,
                "Start cell {} is outside of the {}x{} grid.",
                cell, row_n, col_n
            ),
            Error::EndOutOfBounds(cell, row_n, col_n) => write!(
                f,
                "End cell {} is outside of the {}x{} grid.",
                cell, row_n, col_n
            ),
            Error::StartBlocked(cell) => write!(f, "Start cell {} is a wall.", cell),
            Error::EndBlocked(cell) => write!(f, "End cell {} is a wall.", cell),
            Error::MissingPredecessor(cell) => write!(
                f,
                "Cell {} on the found path has no predecessor recorded.",
                cell
            ),
            Error::CostOverflow(cell) => {
                write!(f, "Path cost overflows when entering cell {}.", cell)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Read the problem from this file instead of stdin
    pub input_path: Option<PathBuf>,
    /// Log more about the search, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Print the total cost after the path
    #[arg(long)]
    pub cost: bool,
}

impl CLIArgs {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

impl Problem {
    pub fn solve(&self) -> Result<Option<Route>, Error> {
        find_path(&self.grid, &self.start, &self.end)
    }
}

pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_input(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read problem from given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn read_input<R: BufRead>(reader: R) -> Result<Problem> {
    let mut lines = reader.lines().enumerate();
    let mut next_line = |section: &'static str| -> Result<(usize, String)> {
        let Some((ind, line)) = lines.next() else {
            return Err(Error::MissingLine(section).into());
        };
        let line = line.with_context(|| format!("Failed to read line {}.", ind + 1))?;

        Ok((ind + 1, line))
    };

    let (line_no, text) = next_line("grid size")?;
    let [row_n, col_n] = parse_tokens::<usize, 2>(line_no, &text)?;
    if row_n == 0 || col_n == 0 {
        return Err(Error::EmptyGrid.into());
    }

    let mut rows = Vec::new();
    for _ in 0..row_n {
        let (line_no, text) = next_line("grid row")?;
        rows.push(parse_row(line_no, &text, col_n)?);
    }
    let grid = Grid::from_rows(rows)?;

    let (line_no, text) = next_line("start and end cells")?;
    let [start_r, start_c, end_r, end_c] = parse_tokens::<isize, 4>(line_no, &text)?;

    Ok(Problem {
        grid,
        start: Cell::new(start_r, start_c),
        end: Cell::new(end_r, end_c),
    })
}

fn parse_tokens<T: FromStr, const N: usize>(line_no: usize, text: &str) -> Result<[T; N], Error> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != N {
        return Err(Error::InvalidTokenCount(line_no, N, tokens.len()));
    }

    let values = tokens
        .iter()
        .map(|token| parse_value(line_no, token))
        .collect::<Result<Vec<T>, Error>>()?;
    values
        .try_into()
        .map_err(|_| Error::InvalidTokenCount(line_no, N, tokens.len()))
}

fn parse_row(line_no: usize, text: &str, col_n: usize) -> Result<Vec<u64>, Error> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != col_n {
        return Err(Error::InvalidTokenCount(line_no, col_n, tokens.len()));
    }

    tokens
        .iter()
        .map(|token| parse_value(line_no, token))
        .collect()
}

fn parse_value<T: FromStr>(line_no: usize, token: &str) -> Result<T, Error> {
    token
        .parse::<T>()
        .map_err(|_| Error::InvalidInteger(line_no, token.to_string()))
}

/// Writes one `row column` line per cell of the route, then a `.` line.
pub fn write_route<W: Write>(mut writer: W, route: &Route) -> io::Result<()> {
    for cell in route.cells() {
        writeln!(writer, "{} {}", cell.row(), cell.col())?;
    }
    writeln!(writer, ".")
}
