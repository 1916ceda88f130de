// patterns.rs - Built-in starting patterns

use crate::grid::Grid;

/// A named pattern drawn as rows of `#` (alive) and `.` (dead).
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rows: &[".#.", "..#", "###"],
    },
    Pattern {
        name: "Blinker",
        rows: &["###"],
    },
    Pattern {
        name: "Toad",
        rows: &[".###", "###."],
    },
    Pattern {
        name: "Beacon",
        rows: &["##..", "##..", "..##", "..##"],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            "..###...###..",
            ".............",
            "#....#.#....#",
            "#....#.#....#",
            "#....#.#....#",
            "..###...###..",
            ".............",
            "..###...###..",
            "#....#.#....#",
            "#....#.#....#",
            "#....#.#....#",
            ".............",
            "..###...###..",
        ],
    },
    Pattern {
        name: "R-pentomino",
        rows: &[".##", "##.", ".#."],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rows: &[
            "........................#...........",
            "......................#.#...........",
            "............##......##............##",
            "...........#...#....##............##",
            "##........#.....#...##..............",
            "##........#...#.##....#.#...........",
            "..........#.....#.......#...........",
            "...........#...#....................",
            "............##......................",
        ],
    },
];

impl Pattern {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Offsets of the live cells relative to the top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(col, _)| (row, col))
        })
    }

    /// Clears `grid` and draws the pattern centered on it. Cells that do not
    /// fit are dropped.
    pub fn apply(&self, grid: &mut Grid) {
        let top = grid.rows().saturating_sub(self.height()) / 2;
        let left = grid.cols().saturating_sub(self.width()) / 2;
        grid.clear();
        self.stamp(grid, top, left);
    }

    /// Draws the pattern with its top-left corner at `(top, left)` without
    /// clearing the rest of the grid.
    pub fn stamp(&self, grid: &mut Grid, top: usize, left: usize) {
        for (row, col) in self.cells() {
            let (Some(row), Some(col)) = (top.checked_add(row), left.checked_add(col)) else {
                continue;
            };
            // Clip at the edges
            if grid.contains(row, col) {
                grid.revive(row, col);
            }
        }
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::step;

    #[test]
    fn populations_match_the_drawings() {
        let expected = [
            ("Glider", 5),
            ("Blinker", 3),
            ("Toad", 6),
            ("Beacon", 8),
            ("Pulsar", 48),
            ("R-pentomino", 5),
            ("Gosper Glider Gun", 36),
        ];
        for (name, population) in expected {
            let pattern = find(name).unwrap();
            assert_eq!(pattern.cells().count(), population, "{name}");
        }
    }

    #[test]
    fn apply_centers_and_clears() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, true).unwrap();
        find("blinker").unwrap().apply(&mut grid);
        assert_eq!(grid.to_string(), ".....\n.....\n.###.\n.....\n.....\n");
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = Grid::new(6, 10);
        find("Gosper Glider Gun").unwrap().apply(&mut grid);
        assert!(grid.population() > 0);
        assert!(grid.population() < 36);
    }

    #[test]
    fn stamp_clips_at_every_edge() {
        let mut grid = Grid::new(3, 3);
        // glider hanging off the bottom-right corner keeps only its top cell
        find("Glider").unwrap().stamp(&mut grid, 2, 1);
        assert_eq!(grid.to_string(), "...\n...\n..#\n");

        // fully off the grid, including offsets near usize::MAX
        find("Blinker").unwrap().stamp(&mut grid, 3, 0);
        find("Blinker").unwrap().stamp(&mut grid, 0, usize::MAX - 1);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn pulsar_has_period_three() {
        let mut grid = Grid::new(17, 17);
        find("Pulsar").unwrap().apply(&mut grid);
        let start = grid.clone();
        let one = step(&start);
        let three = step(&step(&one));
        assert_ne!(one, start);
        assert_eq!(three, start);
    }
}
