use rand::{Rng, rngs::StdRng};

use crate::error::MazeError;
use crate::maze::{Direction, Grid};

use super::{get_rng, wall_up};

/// Builds a maze by recursive division: start from an open grid, split each
/// region with a full wall line pierced by a single gap, and recurse into the
/// two halves until a dimension drops below 2.
///
/// Unlike the carving generators the result is not a spanning tree, but every
/// division wall keeps exactly one gap so the maze stays fully connected.
/// All four outer borders are closed explicitly at the end.
pub(super) fn recursive_division(
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::open(width, height)?;
    let mut rng = get_rng(seed);

    divide(&mut grid, (0, 0), width, height, &mut rng)?;
    close_border(&mut grid)?;
    Ok(grid)
}

fn divide(
    grid: &mut Grid,
    (x, y): (u16, u16),
    width: u16,
    height: u16,
    rng: &mut StdRng,
) -> Result<(), MazeError> {
    if width < 2 || height < 2 {
        return Ok(());
    }

    // A wide region is cut vertically, a tall one horizontally, a square one
    // either way.
    let horizontal = match width.cmp(&height) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => rng.random_bool(0.5),
    };

    if horizontal {
        let diff = rng.random_range(0..height - 1);
        let wall_row = y + diff;
        let gap_x = x + rng.random_range(0..width);

        for wall_x in x..x + width {
            if wall_x == gap_x {
                continue;
            }
            wall_up(grid, (wall_x, wall_row), Direction::South)?;
        }

        divide(grid, (x, y), width, diff + 1, rng)?;
        divide(grid, (x, wall_row + 1), width, height - diff - 1, rng)
    } else {
        let diff = rng.random_range(0..width - 1);
        let wall_col = x + diff;
        let gap_y = y + rng.random_range(0..height);

        for wall_y in y..y + height {
            if wall_y == gap_y {
                continue;
            }
            wall_up(grid, (wall_col, wall_y), Direction::East)?;
        }

        divide(grid, (x, y), diff + 1, height, rng)?;
        divide(grid, (wall_col + 1, y), width - diff - 1, height, rng)
    }
}

// Border walls face outward, so there is no neighbor side to sync.
fn close_border(grid: &mut Grid) -> Result<(), MazeError> {
    let (width, height) = (grid.width(), grid.height());
    for x in 0..width {
        grid.add_wall((x, 0), Direction::North)?;
        grid.add_wall((x, height - 1), Direction::South)?;
    }
    for y in 0..height {
        grid.add_wall((0, y), Direction::West)?;
        grid.add_wall((width - 1, y), Direction::East)?;
    }
    Ok(())
}
