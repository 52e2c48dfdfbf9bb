//! Shortest route from entrance to exit

use std::collections::VecDeque;
use std::iter;

use itertools::Itertools;

use crate::{Direction, Grid, Point};

/// Solution to the maze
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MazeSolution {
    /// Cells on the route, including entrance & exit
    pub path: Vec<Point>,
}

impl MazeSolution {
    /// Number of moves between cells on the route
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("The shortest path is {} steps.", self.steps())
    }
}

/// Find the shortest route from the entrance to the exit
///
/// Breadth-first search over open walls, starting at the upper left cell.
/// Neighbours are visited in [Direction::ALL] order, which decides the
/// route when several are equally short. Any wall layout is accepted,
/// including ones with loops or closed-off areas.
///
/// Returns `None`, if the exit cannot be reached.
pub fn solve(grid: &Grid) -> Option<MazeSolution> {
    let start = grid.entrance();
    let goal = grid.exit();

    let mut visited = vec![false; grid.width() * grid.height()];
    let mut parent: Vec<Option<Point>> = vec![None; grid.width() * grid.height()];
    let mut queue = VecDeque::from([start]);
    visited[grid.index(start)] = true;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for direction in Direction::ALL {
            if grid.has_wall(current, direction) {
                continue;
            }
            // Border openings lead outside the grid
            let Some(next) = grid.neighbour(current, direction) else {
                continue;
            };
            let idx = grid.index(next);
            if !visited[idx] {
                visited[idx] = true;
                parent[idx] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !visited[grid.index(goal)] {
        return None;
    }

    let mut path = iter::successors(Some(goal), |p| parent[grid.index(*p)]).collect_vec();
    path.reverse();
    Some(MazeSolution { path })
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::maze_generator::generate;
    use crate::maze_solver::solve;
    use crate::{Direction, Grid, Point};

    fn open_all(grid: &mut Grid) {
        let points = grid.points().collect::<Vec<_>>();
        for p in points {
            grid.remove_wall(p, Direction::Right).unwrap();
            grid.remove_wall(p, Direction::Bottom).unwrap();
        }
    }

    /// Length in moves of the shortest simple route, by trying all of them
    fn shortest_by_exhaustion(grid: &Grid) -> Option<usize> {
        fn walk(
            grid: &Grid,
            p: Point,
            seen: &mut [bool],
            len: usize,
            best: &mut Option<usize>,
        ) {
            if p == grid.exit() {
                *best = Some(best.map_or(len, |b| b.min(len)));
                return;
            }
            for d in Direction::ALL {
                if grid.has_wall(p, d) {
                    continue;
                }
                if let Some(next) = grid.neighbour(p, d) {
                    let idx = grid.index(next);
                    if !seen[idx] {
                        seen[idx] = true;
                        walk(grid, next, seen, len + 1, best);
                        seen[idx] = false;
                    }
                }
            }
        }
        let mut seen = vec![false; grid.width() * grid.height()];
        seen[0] = true;
        let mut best = None;
        walk(grid, grid.entrance(), &mut seen, 0, &mut best);
        best
    }

    fn is_valid_route(grid: &Grid, path: &[Point]) -> bool {
        path.first() == Some(&grid.entrance())
            && path.last() == Some(&grid.exit())
            && path.windows(2).all(|w| {
                Direction::ALL
                    .into_iter()
                    .any(|d| grid.neighbour(w[0], d) == Some(w[1]) && !grid.has_wall(w[0], d))
            })
    }

    #[test]
    fn single_cell_route() {
        let grid = generate(1, 1, &mut StdRng::seed_from_u64(0)).unwrap();
        let solution = solve(&grid).unwrap();
        assert_eq!(solution.path, vec![Point::new(0, 0)]);
        assert_eq!(solution.steps(), 0);
    }

    #[test]
    fn two_cell_route() {
        let grid = generate(2, 1, &mut StdRng::seed_from_u64(0)).unwrap();
        let solution = solve(&grid).unwrap();
        assert_eq!(solution.path, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(solution.steps(), 1);
    }

    #[test]
    fn closed_grid_has_no_route() {
        let grid = Grid::new(2, 1).unwrap();
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn separated_regions_have_no_route() {
        let mut grid = Grid::new(3, 3).unwrap();
        open_all(&mut grid);
        for y in 0..3 {
            grid.add_wall(Point::new(1, y), Direction::Right).unwrap();
        }
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn border_openings_are_not_passages() {
        // Every outward wall open, but no wall between the cells
        let mut grid = Grid::new(2, 1).unwrap();
        for p in [Point::new(0, 0), Point::new(1, 0)] {
            grid.remove_wall(p, Direction::Top).unwrap();
            grid.remove_wall(p, Direction::Bottom).unwrap();
        }
        grid.remove_wall(Point::new(0, 0), Direction::Left).unwrap();
        grid.remove_wall(Point::new(1, 0), Direction::Right).unwrap();
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn ties_follow_direction_order() {
        let mut grid = Grid::new(2, 2).unwrap();
        open_all(&mut grid);
        let solution = solve(&grid).unwrap();
        // Right is tried before bottom
        assert_eq!(
            solution.path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn serpentine_route() {
        let mut grid = Grid::new(5, 5).unwrap();
        for y in 0..5 {
            for x in 0..4 {
                grid.remove_wall(Point::new(x, y), Direction::Right).unwrap();
            }
            if y < 4 {
                let x = if y % 2 == 0 { 4 } else { 0 };
                grid.remove_wall(Point::new(x, y), Direction::Bottom).unwrap();
            }
        }
        let solution = solve(&grid).unwrap();
        assert_eq!(solution.steps(), 24);
        assert_eq!(shortest_by_exhaustion(&grid), Some(24));
        assert!(is_valid_route(&grid, &solution.path));

        // Shortcut down the left column
        for y in 0..4 {
            grid.remove_wall(Point::new(0, y), Direction::Bottom).unwrap();
        }
        let solution = solve(&grid).unwrap();
        assert_eq!(solution.steps(), 8);
        assert_eq!(shortest_by_exhaustion(&grid), Some(8));
        assert!(is_valid_route(&grid, &solution.path));
        let left_column = (0..5).map(|y| Point::new(0, y)).collect::<Vec<_>>();
        assert_eq!(&solution.path[..5], &left_column[..]);
    }

    #[test]
    fn open_grid_route_is_manhattan() {
        let mut grid = Grid::new(4, 4).unwrap();
        open_all(&mut grid);
        let solution = solve(&grid).unwrap();
        assert_eq!(solution.steps(), 6);
        assert_eq!(shortest_by_exhaustion(&grid), Some(6));
        assert!(is_valid_route(&grid, &solution.path));
    }

    #[test]
    fn generated_maze_route() {
        let grid = generate(30, 20, &mut StdRng::seed_from_u64(7)).unwrap();
        let solution = solve(&grid).unwrap();
        assert!(is_valid_route(&grid, &solution.path));
        let mut unique = solution.path.clone();
        unique.sort_by_key(|p| (p.y, p.x));
        unique.dedup();
        assert_eq!(unique.len(), solution.path.len());
    }

    #[test]
    fn shortest_on_random_walls() {
        fn prop(width: u8, height: u8, seed: u64) -> TestResult {
            let width = (width % 4) as usize + 1;
            let height = (height % 4) as usize + 1;
            let mut random = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(width, height).unwrap();
            let points = grid.points().collect::<Vec<_>>();
            for p in points {
                for d in [Direction::Right, Direction::Bottom] {
                    if grid.neighbour(p, d).is_some() && random.gen_bool(0.6) {
                        grid.remove_wall(p, d).unwrap();
                    }
                }
            }

            let expected = shortest_by_exhaustion(&grid);
            match solve(&grid) {
                Some(solution) => TestResult::from_bool(
                    Some(solution.steps()) == expected && is_valid_route(&grid, &solution.path),
                ),
                None => TestResult::from_bool(expected.is_none()),
            }
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
