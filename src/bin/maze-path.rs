use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use maze_path::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let problem = match &args.input_path {
        Some(path) => maze_path::read_input_file(path)?,
        None => maze_path::read_input(io::stdin().lock())
            .context("Failed to read problem from stdin.")?,
    };

    let route = problem.solve().with_context(|| {
        format!(
            "Failed to search path from {} to {}.",
            problem.start, problem.end
        )
    })?;
    if let Some(route) = route {
        let mut writer = BufWriter::new(io::stdout().lock());
        maze_path::write_route(&mut writer, &route).context("Failed to write path.")?;
        if args.cost {
            writeln!(writer, "cost {}", route.cost()).context("Failed to write cost.")?;
        }
        writer.flush().context("Failed to write path.")?;
    } else {
        println!(
            "There's no path from {} to {}.",
            problem.start, problem.end
        );
    }

    Ok(())
}
