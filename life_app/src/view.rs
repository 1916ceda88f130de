// view.rs - Grid geometry and painting

use egui::{Painter, Pos2, Rect, Stroke, Vec2};
use life_engine::Grid;

use crate::config::{AppConfig, Config};

/// Screen rectangle of cell `(row, col)` for a grid drawn at `origin`.
pub fn cell_rect(origin: Pos2, cell_size: f32, row: usize, col: usize) -> Rect {
    let min = origin + Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

/// Cell under `pos`, or `None` when the point is off the grid.
pub fn cell_at(
    origin: Pos2,
    cell_size: f32,
    pos: Pos2,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if cell_size <= 0.0 || offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / cell_size).floor() as usize;
    let col = (offset.x / cell_size).floor() as usize;
    (row < rows && col < cols).then_some((row, col))
}

pub fn grid_size(grid: &Grid, cell_size: f32) -> Vec2 {
    Vec2::new(grid.cols() as f32, grid.rows() as f32) * cell_size
}

pub fn paint_grid(painter: &Painter, origin: Pos2, grid: &Grid, config: &AppConfig) {
    painter.rect_filled(
        Rect::from_min_size(origin, grid_size(grid, config.cell_size)),
        0.0,
        config.dead_color,
    );

    let dead_border = Stroke::new(Config::CELL_STROKE, Config::GRID_LINE_COLOR);
    let live_border = Stroke::new(Config::CELL_STROKE, config.live_color);

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            let rect = cell_rect(origin, config.cell_size, row, col);
            if alive {
                painter.rect_filled(rect, 0.0, config.live_color);
                painter.rect_stroke(rect, 0.0, live_border);
            } else {
                painter.rect_stroke(rect, 0.0, dead_border);
            }
        }
    }
}
