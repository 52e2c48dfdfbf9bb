//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use backtrack_maze::{emoji, solve};
use clap::Parser;

/// The shortest way from the entrance to the exit of an emoji maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the maze with the route drawn in
    #[arg(short, long)]
    show_path: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let emojis = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let grid = emoji::parse_emojis(emojis.trim())?;

    let Some(solution) = solve(&grid) else {
        bail!(
            "No route from entrance {} to exit {}",
            grid.entrance(),
            grid.exit()
        );
    };

    if args.show_path {
        println!("{}", emoji::to_emojis(&grid, Some(&solution.path)));
    }
    solution.print_report();
    Ok(())
}
