// rules.rs - Neighbor counting and the generational update rule

use std::time::Instant;

use tracing::trace;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Offsets of the Moore neighborhood, the cell itself excluded.
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Conway's rule for one cell: birth on 3, survival on 2 or 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Live cells around `(row, col)`. Cells past the edge count as dead; the
/// board does not wrap.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    if !grid.contains(row, col) {
        return Err(GridError::OutOfBounds {
            row,
            col,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(live_around(grid.cells(), grid.rows(), grid.cols(), row, col))
}

/// Next generation as a new grid; `grid` is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    write_generation(grid, &mut next);
    next
}

/// Writes the next generation of `grid` into `next`, which must have the
/// same dimensions.
pub fn step_into(grid: &Grid, next: &mut Grid) -> Result<()> {
    if next.dimensions() != grid.dimensions() {
        return Err(GridError::DimensionMismatch {
            rows: grid.rows(),
            cols: grid.cols(),
            found_rows: next.rows(),
            found_cols: next.cols(),
        });
    }
    write_generation(grid, next);
    Ok(())
}

/// Copy of `grid` with `(row, col)` flipped.
pub fn toggle_cell(grid: &Grid, row: usize, col: usize) -> Result<Grid> {
    let mut next = grid.clone();
    next.flip(row, col)?;
    Ok(next)
}

pub(crate) fn write_generation(grid: &Grid, next: &mut Grid) {
    let started = Instant::now();
    let (rows, cols) = grid.dimensions();
    let current = grid.cells();
    let out = next.cells_mut();

    for row in 0..rows {
        for col in 0..cols {
            let i = row * cols + col;
            out[i] = next_state(current[i], live_around(current, rows, cols, row, col));
        }
    }
    trace!(
        rows,
        cols,
        elapsed_us = started.elapsed().as_micros() as u64,
        "generation computed"
    );
}

fn live_around(cells: &[bool], rows: usize, cols: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBORS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if r < rows && c < cols && cells[r * cols + c] {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
        }
    }

    #[test]
    fn neighbors_exclude_the_cell_itself() {
        let full = grid("###\n###\n###");
        assert_eq!(count_neighbors(&full, 1, 1), Ok(8));
    }

    #[test]
    fn edges_do_not_wrap() {
        let full = grid("###\n###\n###");
        assert_eq!(count_neighbors(&full, 0, 0), Ok(3));
        assert_eq!(count_neighbors(&full, 0, 1), Ok(5));
        assert_eq!(count_neighbors(&full, 2, 2), Ok(3));

        // a torus would see the opposite corner
        let corners = grid("#..\n...\n..#");
        assert_eq!(count_neighbors(&corners, 0, 0), Ok(0));
    }

    #[test]
    fn out_of_range_cell_is_reported() {
        let g = Grid::new(3, 4);
        assert_eq!(
            count_neighbors(&g, 3, 0),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(count_neighbors(&g, 0, 4).is_err());
        assert!(toggle_cell(&g, 9, 9).is_err());
    }

    #[test]
    fn step_into_requires_matching_buffer() {
        let g = grid(".#.\n.#.\n.#.");
        let mut wrong = Grid::new(2, 3);
        assert!(matches!(
            step_into(&g, &mut wrong),
            Err(GridError::DimensionMismatch { .. })
        ));

        let mut next = Grid::new(3, 3);
        step_into(&g, &mut next).unwrap();
        assert_eq!(next, step(&g));
    }

    #[test]
    fn toggle_leaves_input_untouched() {
        let g = Grid::new(2, 2);
        let toggled = toggle_cell(&g, 1, 0).unwrap();
        assert_eq!(g.population(), 0);
        assert_eq!(toggled.get(1, 0), Ok(true));
        assert_eq!(toggled.population(), 1);
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn generation_timing_is_traced() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&logs);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || CaptureWriter(Arc::clone(&sink)))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            step(&grid("##\n##"));
        });

        let logs = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("generation computed"), "{logs}");
        assert!(logs.contains("elapsed_us="), "{logs}");
    }
}
