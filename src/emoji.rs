//! Emoji drawing of mazes
//!
//! A grid of `width x height` cells is drawn as a square lattice of
//! `(2 * width + 1) x (2 * height + 1)` emojis. Cell `(x, y)` sits at row
//! `2y + 1`, column `2x + 1`; the squares between cells are their shared
//! walls, and the even-even squares are always wall.
//!
//! ```text
//! 🟫🟩🟫🟫🟫
//! 🟫🟩🟩🟩🟫
//! 🟫🟫🟫🟩🟫
//! ```

use itertools::Itertools;

use crate::{Direction, Grid, MazeError, Point};

pub const S_WALL: char = '🟫';
pub const S_VALID: char = '🟩';
pub const S_PATH: char = '🟨';

/// Lattice position of a cell side, relative to the cell square
fn side_square(point: Point, direction: Direction) -> (usize, usize) {
    let row = 2 * point.y + 1;
    let col = 2 * point.x + 1;
    match direction {
        Direction::Top => (row - 1, col),
        Direction::Right => (row, col + 1),
        Direction::Bottom => (row + 1, col),
        Direction::Left => (row, col - 1),
    }
}

/// Draw grid into square lattice, optionally marking a route
///
/// Route cells, the openings between them and the entrance/exit openings
/// at the route ends are drawn with [S_PATH]. Points outside the grid are
/// skipped, and so are openings between points that are not neighbours.
pub fn to_squares(grid: &Grid, path: Option<&[Point]>) -> Vec<Vec<char>> {
    let mut squares: Vec<Vec<char>> = (0..2 * grid.height() + 1)
        .map(|_| (0..2 * grid.width() + 1).map(|_| S_WALL).collect())
        .collect();

    for p in grid.points() {
        squares[2 * p.y + 1][2 * p.x + 1] = S_VALID;
        for d in Direction::ALL {
            if !grid.has_wall(p, d) {
                let (row, col) = side_square(p, d);
                squares[row][col] = S_VALID;
            }
        }
    }

    if let Some(path) = path {
        for p in path.iter().filter(|&&p| grid.contains(p)) {
            squares[2 * p.y + 1][2 * p.x + 1] = S_PATH;
        }
        for (&a, &b) in path.iter().tuple_windows() {
            let adjacent = Direction::ALL
                .into_iter()
                .any(|d| grid.neighbour(a, d) == Some(b));
            if adjacent {
                squares[a.y + b.y + 1][a.x + b.x + 1] = S_PATH;
            }
        }
        let ends = [
            (path.first(), Direction::Top),
            (path.last(), Direction::Bottom),
        ];
        for (end, d) in ends {
            if let Some(&p) = end {
                if grid.neighbour(p, d).is_none() && !grid.has_wall(p, d) {
                    let (row, col) = side_square(p, d);
                    squares[row][col] = S_PATH;
                }
            }
        }
    }

    squares
}

/// Draw grid as emoji text, one lattice row per line
pub fn to_emojis(grid: &Grid, path: Option<&[Point]>) -> String {
    to_squares(grid, path)
        .iter()
        .map(|row| row.iter().join(""))
        .join("\n")
}

/// Parse grid from emoji text
///
/// Both [S_VALID] and [S_PATH] are read as open. Returns error, if rows
/// have different lengths, the lattice is not odd-sized, a cell square is
/// a wall, or an unknown character is met.
///
/// # Examples
/// ```
/// use backtrack_maze::{emoji::parse_emojis, Direction, Point};
///
/// let emojis = "
/// 🟫🟩🟫🟫🟫
/// 🟫🟩🟩🟩🟫
/// 🟫🟫🟫🟩🟫";
/// let grid = parse_emojis(emojis.trim()).unwrap();
/// assert_eq!((grid.width(), grid.height()), (2, 1));
/// assert!(!grid.has_wall(Point::new(0, 0), Direction::Right));
/// ```
pub fn parse_emojis(emojis: &str) -> Result<Grid, MazeError> {
    let squares: Vec<Vec<char>> = emojis
        .lines()
        .map(|row| row.trim_end().chars().collect())
        .collect();

    let rows = squares.len();
    let cols = squares.first().map_or(0, |row| row.len());
    if let Some((y, row)) = squares.iter().find_position(|row| row.len() != cols) {
        return Err(MazeError::Parse(format!(
            "Row {} has {} squares, expected {}",
            y,
            row.len(),
            cols
        )));
    }
    if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(MazeError::Parse(format!(
            "Lattice of {}x{} squares, both sides must be odd and at least 3",
            cols, rows
        )));
    }

    let open = |row: usize, col: usize| -> Result<bool, MazeError> {
        match squares[row][col] {
            S_VALID | S_PATH => Ok(true),
            S_WALL => Ok(false),
            val => Err(MazeError::Parse(format!(
                "Unexpected character `{}` at y={}, x={}",
                val, row, col
            ))),
        }
    };

    let mut grid = Grid::new((cols - 1) / 2, (rows - 1) / 2)?;
    let points = grid.points().collect_vec();
    for p in points {
        if !open(2 * p.y + 1, 2 * p.x + 1)? {
            return Err(MazeError::Parse(format!("Cell {} is drawn as wall", p)));
        }
        for d in Direction::ALL {
            let (row, col) = side_square(p, d);
            if open(row, col)? {
                grid.remove_wall(p, d)?;
            }
        }
    }
    // Lattice corners carry no wall flags and are always drawn as wall
    for row in (0..rows).step_by(2) {
        for col in (0..cols).step_by(2) {
            if open(row, col)? {
                return Err(MazeError::Parse(format!("Corner at y={row}, x={col} must be wall")));
            }
        }
    }

    Ok(grid)
}
