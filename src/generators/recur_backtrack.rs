use rand::Rng;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid};

use super::{carve, get_rng};

/// Carves a perfect maze by randomized depth-first search with backtracking.
///
/// Uses an explicit stack instead of native recursion so the depth is bounded
/// by the heap, not the call stack (worst case the stack holds every cell).
pub(super) fn recursive_backtrack(
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::closed(width, height)?;
    let mut rng = get_rng(seed);

    let start: Coord = (rng.random_range(0..width), rng.random_range(0..height));
    grid[start].visited = true;

    // The stack holds the current path from the start; the top is the cell
    // being carved from.
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let unvisited = Direction::SCAN
            .iter()
            .filter_map(|&direction| {
                grid.neighbor(cell, direction)
                    .filter(|&neighbor| !grid[neighbor].visited)
                    .map(|neighbor| (direction, neighbor))
            })
            .collect::<Vec<_>>();

        match unvisited.as_slice() {
            [] => {
                // Dead end, backtrack.
                stack.pop();
            }
            options => {
                let (direction, neighbor) = options[rng.random_range(0..options.len())];
                carve(&mut grid, cell, direction)?;
                grid[neighbor].visited = true;
                stack.push(neighbor);
            }
        }
    }

    grid.reset_visited();
    Ok(grid)
}
