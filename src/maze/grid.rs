use crate::error::MazeError;

use super::{Cell, Coord, Direction};

/// The full 2-D collection of cells for one maze instance.
///
/// Cells live in a flat array indexed by `y * width + x`, so every cell has a
/// stable integer identity that the generators can key on. The shape is fixed
/// at construction; only wall and marker flags change afterwards.
#[derive(Debug)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
    start: Option<Coord>,
    treasure: Option<Coord>,
}

impl Grid {
    /// Creates a grid with no walls anywhere. Starting point for wall-adding
    /// generators.
    pub fn open(width: u16, height: u16) -> Result<Self, MazeError> {
        Self::filled(width, height, Cell::OPEN)
    }

    /// Creates a grid with all four walls up on every cell. Starting point
    /// for passage-carving generators.
    pub fn closed(width: u16, height: u16) -> Result<Self, MazeError> {
        Self::filled(width, height, Cell::CLOSED)
    }

    fn filled(width: u16, height: u16, cell: Cell) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::DegenerateGrid { width, height });
        }
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
            start: None,
            treasure: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height
    }

    // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
    fn ravel_index(&self, (x, y): Coord) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Bounds-checked cell access. Every other grid operation goes through
    /// this check; no operation reads or writes an out-of-range cell.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, MazeError> {
        if !self.contains(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
            });
        }
        Ok(&self.data[self.ravel_index(coord)])
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, MazeError> {
        if !self.contains(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
            });
        }
        let idx = self.ravel_index(coord);
        Ok(&mut self.data[idx])
    }

    /// The in-bounds neighbor of `coord` one step in `direction`, if any.
    pub fn neighbor(&self, (x, y): Coord, direction: Direction) -> Option<Coord> {
        let neighbor = match direction {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y.checked_add(1)?),
            Direction::East => (x.checked_add(1)?, y),
            Direction::West => (x.checked_sub(1)?, y),
        };
        self.contains(neighbor).then_some(neighbor)
    }

    /// Raises one wall flag on one cell. The matching flag on the adjacent
    /// cell is the caller's responsibility; the generators always update both
    /// sides together.
    pub fn add_wall(&mut self, coord: Coord, direction: Direction) -> Result<(), MazeError> {
        self.cell_mut(coord)?.walls.set(direction, true);
        Ok(())
    }

    /// Clears one wall flag on one cell. Symmetric propagation to the
    /// neighbor is the caller's responsibility, as with [`Grid::add_wall`].
    pub fn remove_wall(&mut self, coord: Coord, direction: Direction) -> Result<(), MazeError> {
        self.cell_mut(coord)?.walls.set(direction, false);
        Ok(())
    }

    /// Marks the cell where the agent awakes. Fails if the treasure already
    /// sits there. At most one start marker exists; re-marking moves it.
    pub fn mark_start(&mut self, coord: Coord) -> Result<(), MazeError> {
        if self.cell(coord)?.is_treasure {
            return Err(MazeError::InvalidMarker("can't start in the treasure"));
        }
        if let Some(previous) = self.start.take() {
            let idx = self.ravel_index(previous);
            self.data[idx].is_start = false;
        }
        let idx = self.ravel_index(coord);
        self.data[idx].is_start = true;
        self.start = Some(coord);
        Ok(())
    }

    /// Marks the goal cell. Fails if the start already sits there. At most
    /// one treasure marker exists; re-marking moves it.
    pub fn mark_treasure(&mut self, coord: Coord) -> Result<(), MazeError> {
        if self.cell(coord)?.is_start {
            return Err(MazeError::InvalidMarker(
                "can't have the treasure at the start",
            ));
        }
        if let Some(previous) = self.treasure.take() {
            let idx = self.ravel_index(previous);
            self.data[idx].is_treasure = false;
        }
        let idx = self.ravel_index(coord);
        self.data[idx].is_treasure = true;
        self.treasure = Some(coord);
        Ok(())
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn treasure(&self) -> Option<Coord> {
        self.treasure
    }

    /// Clears the generation scratch flag on every cell.
    pub(crate) fn reset_visited(&mut self) {
        for cell in &mut self.data {
            cell.visited = false;
        }
    }

    /// Number of open internal passages, counting each shared wall once (the
    /// East and South sides of every cell that has an in-bounds neighbor
    /// there). A perfect maze has exactly `width * height - 1` of these.
    pub fn passages(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = &self[(x, y)];
                if x + 1 < self.width && !cell.is_walled(Direction::East) {
                    count += 1;
                }
                if y + 1 < self.height && !cell.is_walled(Direction::South) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.data[self.ravel_index(coord)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(coord);
        &mut self.data[idx]
    }
}
