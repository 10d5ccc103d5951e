/// Describes how the edges of the grid behave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Topology {
    /// Opposite edges of the grid are stitched together.
    #[default]
    Torus,
    /// Cells outside of the grid are permanently dead.
    Bounded,
}

impl Topology {
    pub fn name(self) -> &'static str {
        match self {
            Self::Torus => "torus",
            Self::Bounded => "bounded",
        }
    }
}
