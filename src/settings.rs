use crate::{Grid, Pattern, Simulator, Topology};
use anyhow::{ensure, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

/// Runtime options of the application.
#[derive(Parser, Clone, Debug)]
#[command(
    name = "torus_life",
    about = "Conway's Game of Life on a wrap-around grid",
    version
)]
pub struct Settings {
    /// Number of grid rows
    #[arg(long, default_value_t = 60)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 80)]
    pub cols: usize,

    /// Side of a cell in pixels
    #[arg(long, default_value_t = 10.)]
    pub cell_size: f32,

    /// Probability of a cell being alive in the initial random field
    #[arg(long, default_value_t = 0.1)]
    pub alive_probability: f64,

    /// Minimum time between two generations, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub step_ms: u64,

    /// Seed of the random field (a random seed is used if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// RLE file to start from instead of a random field
    #[arg(long)]
    pub pattern: Option<PathBuf>,

    /// Behaviour of the grid edges
    #[arg(long, value_enum, default_value_t = Topology::Torus)]
    pub topology: Topology,

    /// Run this many generations without a window and print the result
    #[arg(long, value_name = "GENERATIONS")]
    pub headless: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 60,
            cols: 80,
            cell_size: 10.,
            alive_probability: 0.1,
            step_ms: 100,
            seed: None,
            pattern: None,
            topology: Topology::Torus,
            headless: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows >= 1 && self.cols >= 1,
            "Grid must have at least one row and one column, got {}x{}",
            self.cols,
            self.rows
        );
        ensure!(
            (0.0..=1.0).contains(&self.alive_probability),
            "Alive probability must be within [0, 1], got {}",
            self.alive_probability
        );
        ensure!(self.step_ms >= 1, "Step interval must be at least 1 ms");
        ensure!(
            self.cell_size.is_finite() && self.cell_size >= 2.,
            "Cell size must be at least 2 pixels, got {}",
            self.cell_size
        );
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Random source for the field; seeded if `seed` is set.
    pub fn rng(&self) -> ChaCha8Rng {
        if let Some(x) = self.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        }
    }

    /// Builds the initial simulation: the pattern file if given, a random field otherwise.
    pub fn build_simulator(&self, rng: &mut ChaCha8Rng, now: Instant) -> Result<Simulator> {
        self.validate()?;
        let simulator = match &self.pattern {
            Some(path) => {
                let pattern = Pattern::from_file(path)?;
                let mut simulator = Simulator::from_grid(Grid::blank(self.rows, self.cols), now);
                simulator.load_pattern(&pattern)?;
                simulator
            }
            None => Simulator::random(self.rows, self.cols, self.alive_probability, rng, now),
        };
        Ok(simulator
            .with_topology(self.topology)
            .with_step_interval(self.step_interval()))
    }
}
