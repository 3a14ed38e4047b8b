use super::{Direction, Survey};

/// One grid position: four wall flags plus generation-time and marker flags.
///
/// The `visited` flag is scratch state for the generators. It carries no
/// meaning once generation completes; generators reset it before handing the
/// grid back, and the navigator never consults it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub(crate) walls: Survey,
    pub(crate) visited: bool,
    pub(crate) is_start: bool,
    pub(crate) is_treasure: bool,
}

impl Cell {
    /// A cell with no walls.
    pub const OPEN: Cell = Cell {
        walls: Survey::OPEN,
        visited: false,
        is_start: false,
        is_treasure: false,
    };
    /// A cell with all four walls up.
    pub const CLOSED: Cell = Cell {
        walls: Survey::CLOSED,
        visited: false,
        is_start: false,
        is_treasure: false,
    };

    /// The wall flags of this cell.
    pub fn walls(&self) -> Survey {
        self.walls
    }

    pub fn is_walled(&self, direction: Direction) -> bool {
        self.walls.is_walled(direction)
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_treasure(&self) -> bool {
        self.is_treasure
    }
}
