use crate::{Pattern, Topology};
use anyhow::{ensure, Result};
use rand::Rng;
use std::fmt;

/// Rectangular field of cells, addressed by `(row, col)` in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a grid where every cell is alive with probability `alive_probability`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        let mut result = Self::blank(rows, cols);
        result.randomize(alive_probability, rng);
        result
    }

    /// Builds a grid from lines of `#` (alive) and `.` (dead).
    ///
    /// Panics if `lines` is empty or the lines differ in length.
    #[cfg(test)]
    pub(crate) fn from_rows(lines: &[&str]) -> Self {
        let cols = lines.first().map_or(0, |line| line.len());
        let mut result = Self::blank(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), cols, "row {} has a different length", row);
            for (col, symbol) in line.bytes().enumerate() {
                result.set(row, col, symbol == b'#');
            }
        }
        result
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.cols]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[col + row * self.cols] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, alive_probability: f64, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(alive_probability);
        }
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates `(row, col)` of every alive cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Counts alive cells among the 8 neighbours of `(row, col)`.
    ///
    /// On a torus the offsets wrap modulo the grid dimensions, so a grid
    /// thinner than 3 cells sees the same cell through several offsets.
    pub fn neighbor_count(&self, row: usize, col: usize, topology: Topology) -> usize {
        let mut count = 0;
        for dr in 0..3 {
            for dc in 0..3 {
                if dr == 1 && dc == 1 {
                    continue;
                }
                let neighbor = match topology {
                    Topology::Torus => Some((
                        (row + dr + self.rows - 1) % self.rows,
                        (col + dc + self.cols - 1) % self.cols,
                    )),
                    Topology::Bounded => (row + dr)
                        .checked_sub(1)
                        .zip((col + dc).checked_sub(1))
                        .filter(|&(r, c)| self.contains(r, c)),
                };
                if let Some((r, c)) = neighbor {
                    count += self.get(r, c) as usize;
                }
            }
        }
        count
    }

    /// Writes the generation following `self` into `dst`.
    ///
    /// `dst` must have the same dimensions; its previous content is overwritten.
    pub fn next_generation_into(&self, dst: &mut Grid, topology: Topology) {
        assert_eq!((self.rows, self.cols), (dst.rows, dst.cols));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.neighbor_count(row, col, topology);
                dst.cells[col + row * self.cols] = match (self.get(row, col), neighbors) {
                    (true, 2) | (true, 3) => true, // survival
                    (false, 3) => true,            // birth
                    _ => false,
                };
            }
        }
    }

    /// Copies the cells of `pattern` with its top left corner at `(top, left)`.
    pub fn place(&mut self, pattern: &Pattern, top: usize, left: usize) -> Result<()> {
        ensure!(
            top + pattern.height() <= self.rows && left + pattern.width() <= self.cols,
            "Pattern of {}x{} cells does not fit into the {}x{} grid at ({}, {})",
            pattern.width(),
            pattern.height(),
            self.cols,
            self.rows,
            top,
            left
        );
        for row in 0..pattern.height() {
            for col in 0..pattern.width() {
                self.set(top + row, left + col, pattern.get(row, col));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
