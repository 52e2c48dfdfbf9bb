//! Generate perfect mazes and find the shortest way through them
//!
//! Mazes are grown with an iterative randomized backtracker, which yields a
//! spanning tree over the grid cells: exactly one simple path connects any
//! two cells. The entrance is the top side of the upper left cell and the
//! exit is the bottom side of the lower right cell.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use backtrack_maze::{generate, solve, Point};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut random = StdRng::seed_from_u64(13);
//! let grid = generate(8, 5, &mut random).unwrap();
//! let solution = solve(&grid).unwrap();
//!
//! assert_eq!(solution.path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(solution.path.last(), Some(&Point::new(7, 4)));
//! solution.print_report();
//! ```
//!
//! ## Hand-built grid
//! ```
//! use backtrack_maze::{solve, Direction, Grid, Point};
//!
//! let mut grid = Grid::new(2, 2).unwrap();
//! grid.remove_wall(Point::new(0, 0), Direction::Bottom).unwrap();
//! grid.remove_wall(Point::new(0, 1), Direction::Right).unwrap();
//!
//! let solution = solve(&grid).unwrap();
//! assert_eq!(
//!     solution.path,
//!     vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
//! );
//! ```

use std::fmt;

use thiserror::Error;

pub mod emoji;
pub mod maze_generator;
pub mod maze_solver;

pub use maze_generator::{generate, MazeGenerator};
pub use maze_solver::{solve, MazeSolution};

/// Location of a cell in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side of a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Canonical order, clockwise from the top.
    ///
    /// Both the generator and the solver enumerate neighbours in this order,
    /// so it decides which maze a given random sequence produces and how
    /// ties between equally short routes are broken.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Coordinate change `(dx, dy)` when stepping through this side
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The side of the neighbouring cell that shares this wall
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Four wall flags of a single cell, `true` meaning the side is blocked
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    const CLOSED: Cell = Cell { walls: [true; 4] };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }
}

/// Line segment in grid units, `(0, 0)` being the upper left corner of the
/// upper left cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Segment {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Rectangular grid of cells with wall flags
///
/// Walls between two cells are always updated on both cells, so
/// neighbouring cells never disagree about their shared side.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Create grid where every cell has all four walls
    ///
    /// Returns [MazeError::InvalidDimensions], if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::CLOSED; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Upper left cell, opened to the outside through its top wall
    pub fn entrance(&self) -> Point {
        Point::new(0, 0)
    }

    /// Lower right cell, opened to the outside through its bottom wall
    pub fn exit(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Flat row-major index of an in-bounds point
    pub(crate) fn index(&self, point: Point) -> usize {
        point.y * self.width + point.x
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.contains(point) {
            self.cells.get(self.index(point))
        } else {
            None
        }
    }

    /// Whether the given side of a cell is blocked.
    ///
    /// Points outside the grid are treated as solid.
    pub fn has_wall(&self, point: Point, direction: Direction) -> bool {
        self.cell(point).map_or(true, |cell| cell.has_wall(direction))
    }

    /// Adjacent cell in `direction`, if it is inside the grid
    pub fn neighbour(&self, point: Point, direction: Direction) -> Option<Point> {
        if !self.contains(point) {
            return None;
        }
        let (dx, dy) = direction.delta();
        let x = point.x.checked_add_signed(dx)?;
        let y = point.y.checked_add_signed(dy)?;
        let next = Point::new(x, y);
        self.contains(next).then_some(next)
    }

    /// All cell locations in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// Open a side of a cell, and the matching side of its neighbour.
    ///
    /// On the outer border only the cell itself is changed.
    pub fn remove_wall(&mut self, point: Point, direction: Direction) -> Result<(), MazeError> {
        self.set_wall(point, direction, false)
    }

    /// Close a side of a cell, and the matching side of its neighbour.
    pub fn add_wall(&mut self, point: Point, direction: Direction) -> Result<(), MazeError> {
        self.set_wall(point, direction, true)
    }

    fn set_wall(
        &mut self,
        point: Point,
        direction: Direction,
        present: bool,
    ) -> Result<(), MazeError> {
        if !self.contains(point) {
            return Err(MazeError::OutOfBounds(point));
        }
        let idx = self.index(point);
        self.cells[idx].walls[direction.index()] = present;

        if let Some(next) = self.neighbour(point, direction) {
            let idx = self.index(next);
            self.cells[idx].walls[direction.opposite().index()] = present;
        }
        Ok(())
    }

    /// Number of open walls between pairs of cells inside the grid
    ///
    /// Openings on the outer border are not counted. A perfect maze has
    /// `width * height - 1` passages.
    pub fn open_passages(&self) -> usize {
        self.points()
            .flat_map(|p| [(p, Direction::Right), (p, Direction::Bottom)])
            .filter(|&(p, d)| self.neighbour(p, d).is_some() && !self.has_wall(p, d))
            .count()
    }

    /// Wall line segments for drawing the maze
    ///
    /// Every cell contributes its top and left wall, if present. The bottom
    /// border follows, with a gap under the exit when its bottom wall is
    /// open, and finally the right border, which is always closed.
    pub fn wall_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();

        for p in self.points() {
            if self.has_wall(p, Direction::Top) {
                segments.push(Segment {
                    x1: p.x,
                    y1: p.y,
                    x2: p.x + 1,
                    y2: p.y,
                });
            }
            if self.has_wall(p, Direction::Left) {
                segments.push(Segment {
                    x1: p.x,
                    y1: p.y,
                    x2: p.x,
                    y2: p.y + 1,
                });
            }
        }

        let exit = self.exit();
        let exit_gap = !self.has_wall(exit, Direction::Bottom);
        for x in 0..self.width {
            if exit_gap && x == exit.x {
                continue;
            }
            segments.push(Segment {
                x1: x,
                y1: self.height,
                x2: x + 1,
                y2: self.height,
            });
        }
        for y in 0..self.height {
            segments.push(Segment {
                x1: self.width,
                y1: y,
                x2: self.width,
                y2: y + 1,
            });
        }

        segments
    }
}

/// Errors from building or reading grids
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum MazeError {
    /// Width or height was zero
    #[error("Invalid maze dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    /// Coordinate outside the grid
    #[error("Point {0} is outside the grid")]
    OutOfBounds(Point),
    /// Maze drawing could not be read
    #[error("Could not read maze: {0}")]
    Parse(String),
}
