pub mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// A cell position as `(x, y)`, where `x` is the column and `y` is the row.
pub type Coord = (u16, u16);

/// The four compass directions an agent can face or move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed neighbor scan order used by the generators. Keeping this order
    /// stable makes every generator reproducible under a seed.
    pub const SCAN: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// The four-boolean wall report for a cell. `true` means a wall is present on
/// that side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Survey {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Survey {
    /// No walls on any side.
    pub const OPEN: Survey = Survey {
        north: false,
        south: false,
        east: false,
        west: false,
    };
    /// Walls on all four sides.
    pub const CLOSED: Survey = Survey {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    pub fn is_walled(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, walled: bool) {
        match direction {
            Direction::North => self.north = walled,
            Direction::South => self.south = walled,
            Direction::East => self.east = walled,
            Direction::West => self.west = walled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        for direction in Direction::SCAN {
            let parsed: Direction = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_survey_flags() {
        let mut survey = Survey::OPEN;
        survey.set(Direction::East, true);
        assert!(survey.is_walled(Direction::East));
        assert!(!survey.is_walled(Direction::West));
        assert!(Survey::CLOSED.is_walled(Direction::North));
    }
}
