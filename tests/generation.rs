mod common;

use common::{assert_symmetric_walls, reachable_count};
use mazewalk::generators::{Generator, generate};

const ALL_GENERATORS: [Generator; 4] = [
    Generator::RecurBacktrack,
    Generator::Kruskal,
    Generator::Prim,
    Generator::RecurDiv,
];

const PERFECT_GENERATORS: [Generator; 3] = [
    Generator::RecurBacktrack,
    Generator::Kruskal,
    Generator::Prim,
];

#[test]
fn every_generator_produces_a_fully_connected_maze() {
    for generator in ALL_GENERATORS {
        for (width, height) in [(2, 2), (3, 5), (8, 8), (13, 4)] {
            for seed in 0..5 {
                let grid = generate(generator, width, height, Some(seed)).unwrap();
                assert_eq!(
                    reachable_count(&grid, (0, 0)),
                    width as usize * height as usize,
                    "{} left unreachable cells in a {}x{} maze (seed {})",
                    generator,
                    width,
                    height,
                    seed
                );
            }
        }
    }
}

#[test]
fn every_generator_keeps_walls_symmetric() {
    for generator in ALL_GENERATORS {
        for seed in 0..5 {
            let grid = generate(generator, 9, 6, Some(seed)).unwrap();
            assert_symmetric_walls(&grid);
        }
    }
}

#[test]
fn perfect_generators_carve_a_spanning_tree() {
    for generator in PERFECT_GENERATORS {
        for (width, height) in [(2, 2), (5, 5), (10, 3)] {
            for seed in 0..5 {
                let grid = generate(generator, width, height, Some(seed)).unwrap();
                assert_eq!(
                    grid.passages(),
                    width as usize * height as usize - 1,
                    "{} carved the wrong number of passages in a {}x{} maze",
                    generator,
                    width,
                    height
                );
            }
        }
    }
}

#[test]
fn border_walls_survive_carving() {
    use mazewalk::maze::Direction;

    for generator in ALL_GENERATORS {
        let grid = generate(generator, 6, 6, Some(17)).unwrap();
        for x in 0..6 {
            assert!(grid[(x, 0)].is_walled(Direction::North), "{}", generator);
            assert!(grid[(x, 5)].is_walled(Direction::South), "{}", generator);
        }
        for y in 0..6 {
            assert!(grid[(0, y)].is_walled(Direction::West), "{}", generator);
            assert!(grid[(5, y)].is_walled(Direction::East), "{}", generator);
        }
    }
}

#[test]
fn degenerate_dimensions_terminate_immediately() {
    for generator in ALL_GENERATORS {
        // 1x1 and 1xN grids can't be divided or carved beyond a corridor.
        let trivial = generate(generator, 1, 1, Some(0)).unwrap();
        assert_eq!(trivial.passages(), 0);

        let corridor = generate(generator, 1, 5, Some(0)).unwrap();
        assert_eq!(reachable_count(&corridor, (0, 0)), 5, "{}", generator);
    }
}
