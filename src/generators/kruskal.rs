use rand::seq::SliceRandom;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid};

use super::{carve, cell_index, get_rng};

/// Disjoint sets over flat cell indices, with union by rank and path
/// compression. Every cell starts as its own singleton set; two cells stay
/// connected forever once united.
struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size as u32).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn connected(&mut self, x: u32, y: u32) -> bool {
        self.find(x) == self.find(y)
    }

    fn unite(&mut self, x: u32, y: u32) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x as usize].cmp(&self.rank[root_y as usize]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y as usize] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x as usize] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y as usize] = root_x;
                self.rank[root_x as usize] += 1;
            }
        }
        true
    }
}

/// Carves a perfect maze with randomized Kruskal's algorithm: enumerate every
/// internal wall in random order and knock it down unless the two cells it
/// separates are already connected.
pub(super) fn randomized_kruskal(
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::closed(width, height)?;
    let mut rng = get_rng(seed);

    let mut uf = UnionFind::new(width as usize * height as usize);

    // The East and South sides of every cell cover each internal wall exactly
    // once.
    let mut edges: Vec<(Coord, Direction)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|coord| {
            [
                (coord.0 + 1 < width).then_some((coord, Direction::East)),
                (coord.1 + 1 < height).then_some((coord, Direction::South)),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(&mut rng);

    for (from, direction) in edges {
        let neighbor = grid
            .neighbor(from, direction)
            .ok_or(MazeError::OutOfBounds {
                x: from.0,
                y: from.1,
            })?;
        let a = cell_index(from, width) as u32;
        let b = cell_index(neighbor, width) as u32;

        // Knocking down a wall between connected cells would create a cycle.
        if !uf.connected(a, b) {
            uf.unite(a, b);
            carve(&mut grid, from, direction)?;
        }
    }

    Ok(grid)
}
