mod gui;
mod life;
mod settings;
mod utils;

pub use gui::{App, Config};
pub use life::{Grid, Simulator, DEFAULT_STEP_INTERVAL, TOGGLE_DEBOUNCE};
pub use settings::Settings;
pub use utils::{
    parse_rle, NiceInt, Pattern, Topology, BUILTIN_PATTERNS, MAX_PATTERN_CELLS,
};
