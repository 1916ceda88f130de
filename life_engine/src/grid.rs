// grid.rs - Grid type for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{GridError, Result};

/// Rectangular matrix of dead/live cells, stored row-major.
///
/// Dimensions are fixed at construction; every operation that produces a new
/// generation keeps them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of `rows x cols` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Grid that fills a `width x height` viewport with square cells of
    /// `cell_size` units. Partial cells at the right and bottom are dropped.
    pub fn for_viewport(width: f32, height: f32, cell_size: f32) -> Self {
        let fit = |extent: f32| {
            if cell_size > 0.0 && extent > 0.0 {
                (extent / cell_size).floor() as usize
            } else {
                0
            }
        };
        Self::new(fit(height), fit(width))
    }

    /// Builds a grid from nested rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    other => {
                        return Err(GridError::InvalidCell {
                            row,
                            col,
                            value: other.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Seeded fill where each cell is alive with probability 1/3.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..rows * cols).map(|_| rng.gen_bool(1.0 / 3.0)).collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Checked cell lookup.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let i = self.index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flips one cell in place and returns its new state.
    pub fn flip(&mut self, row: usize, col: usize) -> Result<bool> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Sets a cell the caller has already bounds-checked.
    pub(crate) fn revive(&mut self, row: usize, col: usize) {
        debug_assert!(self.contains(row, col));
        self.cells[row * self.cols + col] = true;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Nested `0`/`1` rows, the inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&alive| u8::from(alive)).collect())
            .collect()
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

// Text form: one line per row, `#` alive, `.` dead
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the text form. Blank lines and surrounding whitespace are
    /// ignored; `row` in errors is the line number in `s`, `col` the offset
    /// within the trimmed line.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (row, line) in s.lines().map(str::trim).enumerate().filter(|(_, l)| !l.is_empty()) {
            let values = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' => Ok(1u8),
                    '.' => Ok(0u8),
                    other => Err(GridError::InvalidCell {
                        row,
                        col,
                        value: other.to_string(),
                    }),
                })
                .collect::<Result<Vec<u8>>>()?;
            if let Some(first) = rows.first().map(Vec::len) {
                if values.len() != first {
                    return Err(GridError::RaggedRow {
                        row,
                        expected: first,
                        found: values.len(),
                    });
                }
            }
            rows.push(values);
        }
        Self::from_rows(rows.as_slice())
    }
}
