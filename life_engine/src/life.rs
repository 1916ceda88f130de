// life.rs - Simulation controller: current generation, run state and edits

use std::mem;

use tracing::debug;

use crate::error::LifeError;
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        }
    }
}

/// Owns the grid between generations.
///
/// Stepping is double-buffered: the next generation is written into a
/// scratch grid of the same size and the two are swapped.
#[derive(Debug, Clone)]
pub struct Life {
    current: Grid,
    next: Grid,
    state: RunState,
    generation: u64,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        let next = Grid::new(grid.rows(), grid.cols());
        Self {
            current: grid,
            next,
            state: RunState::Stopped,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Flips one cell. Edits are only accepted while stopped.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        if self.is_running() {
            return Err(LifeError::EditWhileRunning { row, col });
        }
        let alive = self.current.flip(row, col)?;
        debug!(row, col, alive, "cell toggled");
        Ok(alive)
    }

    pub fn toggle_running(&mut self) -> RunState {
        self.state = self.state.toggled();
        debug!(state = ?self.state, generation = self.generation, "run state changed");
        self.state
    }

    /// Advances one generation.
    pub fn advance(&mut self) {
        rules::write_generation(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Kills every cell. Like cell edits, only accepted while stopped.
    pub fn clear(&mut self) -> Result<(), LifeError> {
        self.ensure_stopped()?;
        self.current.clear();
        self.generation = 0;
        debug!("grid cleared");
        Ok(())
    }

    /// Replaces the grid with a seeded random fill.
    pub fn randomize(&mut self, seed: u64) -> Result<(), LifeError> {
        self.ensure_stopped()?;
        self.current = Grid::random(self.current.rows(), self.current.cols(), seed);
        self.generation = 0;
        debug!(seed, population = self.population(), "grid randomized");
        Ok(())
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        self.ensure_stopped()?;
        pattern.apply(&mut self.current);
        self.generation = 0;
        debug!(pattern = pattern.name, "pattern applied");
        Ok(())
    }

    fn ensure_stopped(&self) -> Result<(), LifeError> {
        if self.is_running() {
            return Err(LifeError::ResetWhileRunning);
        }
        Ok(())
    }
}
