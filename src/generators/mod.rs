use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;
mod recur_backtrack;
mod recur_div;

use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Stable integer identity of a cell, used by the generators to key flat
/// bookkeeping arrays.
fn cell_index((x, y): Coord, width: u16) -> usize {
    y as usize * width as usize + x as usize
}

/// Removes the wall between `from` and its neighbor in `direction`, clearing
/// the flag on both sides so the symmetry invariant holds.
fn carve(grid: &mut Grid, from: Coord, direction: Direction) -> Result<(), MazeError> {
    let neighbor = grid
        .neighbor(from, direction)
        .ok_or(MazeError::OutOfBounds {
            x: from.0,
            y: from.1,
        })?;
    grid.remove_wall(from, direction)?;
    grid.remove_wall(neighbor, direction.opposite())
}

/// Raises the wall between `from` and its neighbor in `direction` on both
/// sides. Counterpart of [`carve`] for the wall-adding generator.
fn wall_up(grid: &mut Grid, from: Coord, direction: Direction) -> Result<(), MazeError> {
    let neighbor = grid
        .neighbor(from, direction)
        .ok_or(MazeError::OutOfBounds {
            x: from.0,
            y: from.1,
        })?;
    grid.add_wall(from, direction)?;
    grid.add_wall(neighbor, direction.opposite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Kruskal,
    Prim,
    RecurDiv,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtrack" => Ok(Generator::RecurBacktrack),
            "kruskal" => Ok(Generator::Kruskal),
            "prim" => Ok(Generator::Prim),
            "division" => Ok(Generator::RecurDiv),
            other => Err(format!(
                "unknown generator: {} (expected backtrack, kruskal, prim, or division)",
                other
            )),
        }
    }
}

/// Generates a fully carved `width` x `height` maze with the chosen
/// algorithm. Pass a seed to make the layout reproducible.
pub fn generate(
    generator: Generator,
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let grid = match generator {
        Generator::RecurBacktrack => recursive_backtrack(width, height, seed)?,
        Generator::Kruskal => randomized_kruskal(width, height, seed)?,
        Generator::Prim => randomized_prim(width, height, seed)?,
        Generator::RecurDiv => recursive_division(width, height, seed)?,
    };
    tracing::debug!(
        "[generate] carved a {}x{} maze with {} ({} passages)",
        width,
        height,
        generator,
        grid.passages()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carve_clears_both_sides() {
        let mut grid = Grid::closed(3, 3).unwrap();
        carve(&mut grid, (1, 1), Direction::North).unwrap();
        assert!(!grid[(1, 1)].is_walled(Direction::North));
        assert!(!grid[(1, 0)].is_walled(Direction::South));
    }

    #[test]
    fn test_carve_off_the_edge_fails() {
        let mut grid = Grid::closed(3, 3).unwrap();
        assert_eq!(
            carve(&mut grid, (0, 0), Direction::West).unwrap_err(),
            MazeError::OutOfBounds { x: 0, y: 0 }
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        for generator in [
            Generator::RecurBacktrack,
            Generator::Kruskal,
            Generator::Prim,
            Generator::RecurDiv,
        ] {
            let a = generate(generator, 8, 6, Some(7)).unwrap();
            let b = generate(generator, 8, 6, Some(7)).unwrap();
            for y in 0..6 {
                for x in 0..8 {
                    assert_eq!(a[(x, y)].walls(), b[(x, y)].walls(), "{}", generator);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_dimensions_fail_fast() {
        for generator in [
            Generator::RecurBacktrack,
            Generator::Kruskal,
            Generator::Prim,
            Generator::RecurDiv,
        ] {
            assert_eq!(
                generate(generator, 0, 4, None).unwrap_err(),
                MazeError::DegenerateGrid {
                    width: 0,
                    height: 4
                }
            );
        }
    }
}
