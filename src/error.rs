use crate::maze::Direction;

/// Errors reported by the maze core.
///
/// All of these are recoverable from the caller's point of view: the grid and
/// navigator state is left untouched when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate access fell outside `[0, width) x [0, height)`.
    OutOfBounds { x: u16, y: u16 },
    /// A move was attempted across a present wall.
    WallBlocked(Direction),
    /// Start and treasure markers would conflict on the same cell.
    InvalidMarker(&'static str),
    /// The requested dimensions are too small to generate a maze.
    DegenerateGrid { width: u16, height: u16 },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside of the maze", x, y)
            }
            MazeError::WallBlocked(direction) => {
                write!(f, "can't walk {} through a wall", direction)
            }
            MazeError::InvalidMarker(reason) => write!(f, "{}", reason),
            MazeError::DegenerateGrid { width, height } => {
                write!(f, "can't generate a {}x{} maze", width, height)
            }
        }
    }
}

impl std::error::Error for MazeError {}
