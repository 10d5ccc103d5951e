mod format_int;
mod parse_rle;
mod pattern;
mod topology;

pub use format_int::NiceInt;
pub use parse_rle::parse_rle;
pub use pattern::{Pattern, BUILTIN_PATTERNS, MAX_PATTERN_CELLS};
pub use topology::Topology;
