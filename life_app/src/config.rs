// config.rs - Window, drawing and timing settings

use std::time::Duration;

use anyhow::ensure;
use egui::Color32;
use life_engine::Grid;

/// Drawing constants that are not worth exposing as settings.
pub struct Config;

impl Config {
    pub const CELL_STROKE: f32 = 0.1;
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(209, 213, 219);
    pub const OVERLAY_MARGIN: f32 = 8.0;
    pub const LOG_FILTER: &'static str = "info,life_app=debug,life_engine=info";
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub cell_size: f32,
    pub tick_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_owned(),
            window_size: [800.0, 600.0],
            cell_size: 10.0,
            tick_interval: Duration::from_millis(100),
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.cell_size > 0.0,
            "cell size must be positive, got {}",
            self.cell_size
        );
        ensure!(!self.tick_interval.is_zero(), "tick interval must be non-zero");
        let [width, height] = self.window_size;
        ensure!(
            width >= self.cell_size && height >= self.cell_size,
            "window {width}x{height} cannot hold a single {} unit cell",
            self.cell_size
        );
        Ok(())
    }

    /// Empty grid covering the window, sized once at startup.
    pub fn initial_grid(&self) -> Grid {
        let [width, height] = self.window_size;
        Grid::for_viewport(width, height, self.cell_size)
    }
}
