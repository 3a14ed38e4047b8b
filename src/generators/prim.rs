use rand::Rng;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid};

use super::{carve, cell_index, get_rng};

/// Carves a perfect maze with randomized Prim's algorithm.
///
/// The `visited` scratch flag marks cells already included in the maze. The
/// frontier is a flat vector sampled uniformly with the seeded rng, with a
/// membership bitmap to keep each cell in it at most once. When a frontier
/// cell joins the maze it connects to the first included neighbor in the
/// fixed scan order, so a given seed always carves the same layout.
pub(super) fn randomized_prim(
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::closed(width, height)?;
    let mut rng = get_rng(seed);

    let start: Coord = (rng.random_range(0..width), rng.random_range(0..height));
    grid[start].visited = true;

    let mut frontier: Vec<Coord> = Vec::new();
    let mut in_frontier = vec![false; width as usize * height as usize];
    for direction in Direction::SCAN {
        if let Some(neighbor) = grid.neighbor(start, direction) {
            in_frontier[cell_index(neighbor, width)] = true;
            frontier.push(neighbor);
        }
    }

    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.random_range(0..frontier.len()));

        // A frontier cell always has at least one included neighbor; connect
        // to the first one the scan order finds.
        let link = Direction::SCAN.iter().find(|&&direction| {
            grid.neighbor(cell, direction)
                .is_some_and(|neighbor| grid[neighbor].visited)
        });
        if let Some(&direction) = link {
            carve(&mut grid, cell, direction)?;
        }
        grid[cell].visited = true;

        for direction in Direction::SCAN {
            if let Some(neighbor) = grid.neighbor(cell, direction) {
                let idx = cell_index(neighbor, width);
                if !grid[neighbor].visited && !in_frontier[idx] {
                    in_frontier[idx] = true;
                    frontier.push(neighbor);
                }
            }
        }
    }

    grid.reset_visited();
    Ok(grid)
}
