use std::collections::{HashMap, HashSet, VecDeque};

use mazewalk::maze::{Coord, Direction, Grid};

/// Applies one step in `direction` to a coordinate known to stay in bounds.
pub fn step((x, y): Coord, direction: Direction) -> Coord {
    match direction {
        Direction::North => (x, y - 1),
        Direction::South => (x, y + 1),
        Direction::East => (x + 1, y),
        Direction::West => (x - 1, y),
    }
}

fn open_neighbors(grid: &Grid, coord: Coord) -> Vec<(Direction, Coord)> {
    Direction::SCAN
        .iter()
        .filter_map(|&direction| {
            if grid[coord].is_walled(direction) {
                return None;
            }
            grid.neighbor(coord, direction)
                .map(|neighbor| (direction, neighbor))
        })
        .collect()
}

/// Number of cells reachable from `start` through open passages.
pub fn reachable_count(grid: &Grid, start: Coord) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(coord) = queue.pop_front() {
        for (_, neighbor) in open_neighbors(grid, coord) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    seen.len()
}

/// Breadth-first shortest move sequence from `start` to `goal`, if one
/// exists.
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Direction>> {
    let mut came_from: HashMap<Coord, (Coord, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    came_from.insert(start, (start, Direction::North));

    while let Some(coord) = queue.pop_front() {
        if coord == goal {
            let mut path = Vec::new();
            let mut at = goal;
            while at != start {
                let (previous, direction) = came_from[&at];
                path.push(direction);
                at = previous;
            }
            path.reverse();
            return Some(path);
        }
        for (direction, neighbor) in open_neighbors(grid, coord) {
            came_from.entry(neighbor).or_insert_with(|| {
                queue.push_back(neighbor);
                (coord, direction)
            });
        }
    }
    None
}

/// Asserts that every shared wall agrees on both sides.
pub fn assert_symmetric_walls(grid: &Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            for direction in Direction::SCAN {
                if let Some(neighbor) = grid.neighbor((x, y), direction) {
                    assert_eq!(
                        grid[(x, y)].is_walled(direction),
                        grid[neighbor].is_walled(direction.opposite()),
                        "wall between ({}, {}) and {:?} is asymmetric",
                        x,
                        y,
                        neighbor
                    );
                }
            }
        }
    }
}
