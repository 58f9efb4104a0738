/// A horizontal axis of the floor plan.
///
/// Walls run along one of these axes and openings are positioned along the
/// axis their host wall runs along. `Width` is the x axis, `Depth` the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanAxis {
    Width,
    Depth,
}

impl PlanAxis {
    /// The other horizontal axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Width => Self::Depth,
            Self::Depth => Self::Width,
        }
    }

    /// Component index into a point or vector (`0` for x, `1` for y).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Width => 0,
            Self::Depth => 1,
        }
    }
}
