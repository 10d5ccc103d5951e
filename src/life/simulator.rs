use super::Grid;
use crate::{NiceInt, Pattern, Topology};
use anyhow::Result;
use rand::Rng;
use std::time::{Duration, Instant};

/// Minimum time between two generations unless configured otherwise.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);
/// Minimum time between two accepted pause toggles.
pub const TOGGLE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Game of Life state driven by an external frame callback.
///
/// Two grids of equal size are kept: the current one and a scratch buffer
/// that receives the next generation. After each generation their roles are
/// swapped by flipping `current`, so no cells are copied and nothing is
/// reallocated.
pub struct Simulator {
    grids: [Grid; 2],
    current: usize,                 // Index of the grid holding the current generation.
    topology: Topology,             // How neighbours are looked up at the edges.
    step_interval: Duration,        // Fixed step between generations.
    last_update: Instant,           // When the last generation was computed.
    last_toggle: Option<Instant>,   // When pause was last toggled.
    is_paused: bool,
    generation: u64,
    last_update_duration: Duration, // Wall time spent computing the last generation.
}

impl Simulator {
    /// Fills a `rows x cols` grid, each cell alive with probability `alive_probability`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
        now: Instant,
    ) -> Self {
        Self::from_grid(Grid::random(rows, cols, alive_probability, rng), now)
    }

    /// Starts the simulation from a prepared grid.
    pub fn from_grid(grid: Grid, now: Instant) -> Self {
        let scratch = Grid::blank(grid.rows(), grid.cols());
        Self {
            grids: [grid, scratch],
            current: 0,
            topology: Topology::default(),
            step_interval: DEFAULT_STEP_INTERVAL,
            last_update: now,
            last_toggle: None,
            is_paused: false,
            generation: 0,
            last_update_duration: Duration::ZERO,
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    /// The current generation, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grids[self.current]
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grids[self.current]
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid().population()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn set_step_interval(&mut self, step_interval: Duration) {
        self.step_interval = step_interval;
    }

    /// Flips the pause flag if `pause_requested` and the previous flip is at
    /// least [`TOGGLE_DEBOUNCE`] old, so a held key toggles only once.
    pub fn toggle_pause_if_requested(&mut self, pause_requested: bool, now: Instant) {
        if !pause_requested {
            return;
        }
        let debounced = self
            .last_toggle
            .map_or(true, |t| now.saturating_duration_since(t) >= TOGGLE_DEBOUNCE);
        if debounced {
            self.is_paused = !self.is_paused;
            self.last_toggle = Some(now);
        }
    }

    /// Sets a single cell while paused; ignored while running or out of bounds.
    pub fn apply_edit(&mut self, row: usize, col: usize, alive: bool) {
        if !self.is_paused || !self.grid().contains(row, col) {
            return;
        }
        self.grid_mut().set(row, col, alive);
    }

    /// Computes the next generation if running and the fixed step has elapsed.
    ///
    /// Returns whether a generation was computed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.is_paused || now.saturating_duration_since(self.last_update) < self.step_interval
        {
            return false;
        }
        self.step(now);
        true
    }

    /// Computes exactly one generation, ignoring pause and the fixed step.
    pub fn step(&mut self, now: Instant) {
        let timer = Instant::now();
        {
            let [a, b] = &mut self.grids;
            let (src, dst) = if self.current == 0 {
                (&*a, b)
            } else {
                (&*b, a)
            };
            src.next_generation_into(dst, self.topology);
        }
        self.current ^= 1;
        self.last_update_duration = timer.elapsed();

        self.last_update = now;
        self.generation += 1;
    }

    /// Alive neighbours of `(row, col)` in the current generation.
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        self.grid().neighbor_count(row, col, self.topology)
    }

    /// Kills every cell and restarts the generation counter.
    pub fn clear(&mut self) {
        self.grid_mut().clear();
        self.generation = 0;
    }

    /// Refills the field randomly and restarts the generation counter.
    pub fn randomize<R: Rng + ?Sized>(&mut self, alive_probability: f64, rng: &mut R) {
        self.grid_mut().randomize(alive_probability, rng);
        self.generation = 0;
    }

    /// Replaces the field with `pattern` placed in the middle of an empty grid.
    ///
    /// The field is left untouched if the pattern does not fit.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        let (rows, cols) = (self.grid().rows(), self.grid().cols());
        let mut grid = Grid::blank(rows, cols);
        let top = rows.saturating_sub(pattern.height()) / 2;
        let left = cols.saturating_sub(pattern.width()) / 2;
        grid.place(pattern, top, left)?;
        *self.grid_mut() = grid;
        self.generation = 0;
        Ok(())
    }

    /// Returns multiline string reporting the simulation state.
    ///
    /// Cheap enough to be called every frame.
    pub fn stats(&self) -> String {
        let grid = self.grid();
        format!(
            "Generation: {}\nPopulation: {}\nField: {} x {} ({})\nStep interval: {} ms\nLast field update: {:.3} ms",
            NiceInt::from(self.generation),
            NiceInt::from_usize(grid.population()),
            grid.cols(),
            grid.rows(),
            self.topology.name(),
            self.step_interval.as_millis(),
            self.last_update_duration.as_secs_f64() * 1e3,
        )
    }
}
