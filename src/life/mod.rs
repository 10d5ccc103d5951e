mod grid;
mod simulator;

#[cfg(test)]
mod tests;

pub use grid::Grid;
pub use simulator::{Simulator, DEFAULT_STEP_INTERVAL, TOGGLE_DEBOUNCE};
