//! CLI for maze generation

use anyhow::Context;
use backtrack_maze::{emoji, solve, MazeGenerator};
use clap::{builder::RangedU64ValueParser, Parser};

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 19, value_parser = dimension_parser())]
    height: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = 15, value_parser = dimension_parser())]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the shortest route from entrance to exit
    #[arg(short, long)]
    show_path: bool,

    /// Print wall line segments instead of the emoji drawing
    #[arg(long, conflicts_with = "show_path")]
    segments: bool,
}

/// Maze sides are limited to 5..=80 cells
fn dimension_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(5..=80)
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate_maze(args.width, args.height)?;

    if args.segments {
        for segment in grid.wall_segments() {
            println!("{}", segment);
        }
        return Ok(());
    }

    let solution = if args.show_path {
        Some(solve(&grid).context("Generated maze has no route to the exit")?)
    } else {
        None
    };
    println!(
        "{}",
        emoji::to_emojis(&grid, solution.as_ref().map(|s| s.path.as_slice()))
    );
    Ok(())
}
