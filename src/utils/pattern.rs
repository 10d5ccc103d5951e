use super::parse_rle;
use anyhow::{ensure, Context, Result};
use std::path::Path;

/// A rectangular block of cells that can be placed onto a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>, // row-major
}

/// Largest pattern, in cells, that is accepted from a file.
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// Well-known patterns shipped with the application, in RLE format.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("Glider", "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!"),
    ("Blinker", "x = 3, y = 1, rule = B3/S23\n3o!"),
    ("Toad", "x = 4, y = 2, rule = B3/S23\nb3o$3o!"),
    ("Beacon", "x = 4, y = 4, rule = B3/S23\n2o$2o$2b2o$2b2o!"),
    ("R-pentomino", "x = 3, y = 3, rule = B3/S23\nb2o$2o$bo!"),
    (
        "Pulsar",
        "x = 13, y = 13, rule = B3/S23\n\
         2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$\n\
         2b3o3b3o2b$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
    ),
    (
        "Gosper glider gun",
        "x = 36, y = 9, rule = B3/S23\n\
         24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\n\
         2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    ),
];

impl Pattern {
    /// Creates a pattern from row-major cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        ensure!(width >= 1 && height >= 1, "Pattern must not be empty");
        let size = checked_size(width, height)?;
        ensure!(
            cells.len() == size,
            "Expected {} cells for a {}x{} pattern, got {}",
            size,
            width,
            height,
            cells.len()
        );
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_rle(data: &[u8]) -> Result<Self> {
        parse_rle(data)
    }

    /// Reads and parses an RLE file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        parse_rle(&data).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Looks up one of [`BUILTIN_PATTERNS`] by name.
    pub fn builtin(name: &str) -> Result<Self> {
        let (_, rle) = BUILTIN_PATTERNS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .with_context(|| format!("Unknown pattern {:?}", name))?;
        parse_rle(rle.as_bytes())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// Coordinates `(row, col)` of every alive cell.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Number of cells in a `width x height` pattern, at most [`MAX_PATTERN_CELLS`].
pub(super) fn checked_size(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&size| size <= MAX_PATTERN_CELLS)
        .with_context(|| {
            format!(
                "Pattern of {}x{} cells exceeds the limit of {} cells",
                width, height, MAX_PATTERN_CELLS
            )
        })
}
