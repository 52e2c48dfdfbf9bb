//! Maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Direction, Grid, MazeError, Point};

/// Maze generator with its own random number generator
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create generator, seeded from `seed` or from system entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate perfect maze of given size, see [generate]
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Grid, MazeError> {
        generate(width, height, &mut self.random)
    }
}

/// Generate perfect maze
///
/// Passages are carved with randomized depth-first backtracking, after
/// which the entrance top wall and the exit bottom wall are opened.
///
/// ## Arguments
/// - `width`: Number of cell columns, at least 1.
/// - `height`: Number of cell rows, at least 1.
/// - `random`: Source of randomness. The same random sequence always
///   produces the same maze.
///
/// Returns [MazeError::InvalidDimensions], if either dimension is zero.
///
/// # Examples
/// ```
/// use backtrack_maze::generate;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let grid = generate(10, 6, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(grid.open_passages(), 10 * 6 - 1);
/// ```
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    random: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    carve_passages(&mut grid, random)?;

    let entrance = grid.entrance();
    let exit = grid.exit();
    grid.remove_wall(entrance, Direction::Top)?;
    grid.remove_wall(exit, Direction::Bottom)?;

    Ok(grid)
}

/// Visit every cell once, starting from the entrance.
///
/// The stack holds the current route from the entrance. The newest cell
/// moves to a random unvisited neighbour, removing the wall in between;
/// cells without unvisited neighbours are popped. Walls are only removed
/// towards unvisited cells, so no loops are created.
fn carve_passages<R: Rng + ?Sized>(grid: &mut Grid, random: &mut R) -> Result<(), MazeError> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let start = grid.entrance();
    visited[grid.index(start)] = true;
    let mut stack: Vec<Point> = vec![start];

    while let Some(&current) = stack.last() {
        let candidates: Vec<(Direction, Point)> = Direction::ALL
            .into_iter()
            .filter_map(|d| grid.neighbour(current, d).map(|next| (d, next)))
            .filter(|&(_, next)| !visited[grid.index(next)])
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (direction, next) = candidates[random.gen_range(0..candidates.len())];
        grid.remove_wall(current, direction)?;
        visited[grid.index(next)] = true;
        stack.push(next);
    }
    Ok(())
}
