// app.rs - egui front end: grid painting, cell editing and run controls

use egui::{Align2, Id, Key, Modifiers, Sense};
use life_engine::{Life, LifeError, RunState, PATTERNS};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{AppConfig, Config};
use crate::view;

pub struct LifeApp {
    life: Life,
    clock: Clock,
    config: AppConfig,
    selected_pattern: usize,
    // Dropped last so the clock can abort its task first
    _runtime: Runtime,
}

impl LifeApp {
    pub fn new(config: AppConfig, runtime: Runtime) -> Self {
        let grid = config.initial_grid();
        info!(rows = grid.rows(), cols = grid.cols(), "grid created");

        Self {
            life: Life::new(grid),
            clock: Clock::new(runtime.handle().clone(), config.tick_interval),
            config,
            selected_pattern: 0,
            _runtime: runtime,
        }
    }

    fn toggle_running(&mut self, ctx: &egui::Context) {
        match self.life.toggle_running() {
            RunState::Running => {
                let ctx = ctx.clone();
                self.clock.start(move || ctx.request_repaint());
                info!(generation = self.life.generation(), "simulation started");
            }
            RunState::Stopped => {
                self.clock.stop();
                info!(generation = self.life.generation(), "simulation paused");
            }
        }
    }

    fn log_rejected(result: Result<(), LifeError>) {
        if let Err(err) = result {
            warn!("{err}");
        }
    }

    fn handle_click(&mut self, row: usize, col: usize) {
        match self.life.toggle_cell(row, col) {
            Ok(_) => {}
            Err(err @ LifeError::EditWhileRunning { .. }) => debug!("{err}"),
            Err(err) => warn!("click ignored: {err}"),
        }
    }

    fn grid_panel(&mut self, ui: &mut egui::Ui) {
        let size = view::grid_size(self.life.grid(), self.config.cell_size);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        view::paint_grid(&painter, origin, self.life.grid(), &self.config);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let grid = self.life.grid();
                let cell =
                    view::cell_at(origin, self.config.cell_size, pos, grid.rows(), grid.cols());
                if let Some((row, col)) = cell {
                    self.handle_click(row, col);
                }
            }
        }
    }

    fn controls(&mut self, ctx: &egui::Context) {
        egui::Area::new(Id::new("controls"))
            .anchor(
                Align2::RIGHT_TOP,
                [-Config::OVERLAY_MARGIN, Config::OVERLAY_MARGIN],
            )
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let label = if self.life.is_running() {
                            "⏸ Pause"
                        } else {
                            "▶ Start"
                        };
                        if ui.button(label).clicked() {
                            self.toggle_running(ctx);
                        }

                        // Grid replacements are locked while running
                        let editable = !self.life.is_running();
                        if ui.add_enabled(editable, egui::Button::new("⏹ Clear")).clicked() {
                            Self::log_rejected(self.life.clear());
                        }

                        if ui.add_enabled(editable, egui::Button::new("🎲 Random")).clicked() {
                            Self::log_rejected(self.life.randomize(rand::random()));
                        }
                    });

                    ui.horizontal(|ui| {
                        let editable = !self.life.is_running();
                        ui.add_enabled_ui(editable, |ui| {
                            egui::ComboBox::from_id_source("pattern_selector")
                                .selected_text(PATTERNS[self.selected_pattern].name)
                                .show_ui(ui, |ui| {
                                    for (i, pattern) in PATTERNS.iter().enumerate() {
                                        ui.selectable_value(
                                            &mut self.selected_pattern,
                                            i,
                                            pattern.name,
                                        );
                                    }
                                });

                            if ui.button("Apply").clicked() {
                                let pattern = &PATTERNS[self.selected_pattern];
                                Self::log_rejected(self.life.apply_pattern(pattern));
                            }
                        });
                    });

                    ui.label(format!("Generation: {}", self.life.generation()));
                    ui.label(format!("Live cells: {}", self.life.population()));
                });
            });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // At most one generation per frame; stalled ticks are coalesced
        if self.clock.take_tick() {
            self.life.advance();
        }

        // Consumed here so a focused button does not also see it
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Space)) {
            self.toggle_running(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.config.dead_color))
            .show(ctx, |ui| self.grid_panel(ui));

        self.controls(ctx);
    }
}
