use std::{fs, io, path::PathBuf, process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Color;
use env_logger::Env;
use log::info;
use universe::{DEFAULT_GRID_SIZE, UniverseFactory, parse_pattern};

use crate::{
    app::{DEFAULT_DELAY, Options},
    render::{Settings, TerminalRenderer},
};

mod app;
mod render;

/// Conway's Game of Life on a grid whose edges wrap around.
#[derive(Debug, Parser)]
#[command(name = "cgol", version, about, long_about = None)]
struct Cli {
    /// Side length of the square grid.
    #[arg(short, long, value_name = "CELLS", default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,
    /// Pause between generations.
    #[arg(
        short,
        long,
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_DELAY.as_millis() as u64
    )]
    delay_ms: u64,
    /// Stop after this many generations.
    #[arg(short = 'n', long, value_name = "COUNT")]
    generations: Option<usize>,
    /// Seed for the random starting state.
    #[arg(short, long, conflicts_with = "pattern")]
    seed: Option<u64>,
    /// Plaintext starting state (`#` or `o` alive, `.` dead) instead of a random one.
    #[arg(short, long, value_name = "FILE")]
    pattern: Option<PathBuf>,
    #[arg(long, value_name = "COLOR", default_value = "green", value_parser = parse_color)]
    alive_color: Color,
    #[arg(long, value_name = "COLOR", default_value = "dark_grey", value_parser = parse_color)]
    dead_color: Color,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::try_from(s).map_err(|()| format!("unknown color {s:?}"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut factory = match cli.seed {
        Some(seed) => UniverseFactory::seeded(seed),
        None => UniverseFactory::new(),
    };
    let universe = match &cli.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Error reading pattern {}", path.display()))?;
            let cells = parse_pattern(&text)
                .with_context(|| format!("Error parsing pattern {}", path.display()))?;
            factory.create(cli.grid_size, cells)
        }
        None => factory.create_random(cli.grid_size),
    }
    .context("Error creating universe")?;
    info!(
        "starting {0}x{0} universe with population {1}",
        universe.grid_size(),
        universe.population()
    );

    let settings = Settings {
        alive_color: cli.alive_color,
        dead_color: cli.dead_color,
    };
    let mut renderer = TerminalRenderer::new(io::stdout(), settings);
    let options = Options {
        delay: Duration::from_millis(cli.delay_ms),
        generations: cli.generations,
    };
    app::run(universe, &mut renderer, options).context("Error rendering universe")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cgol"]).unwrap();
        assert_eq!(cli.grid_size, 64);
        assert_eq!(cli.delay_ms, 200);
        assert_eq!(cli.generations, None);
        assert_eq!(cli.alive_color, Color::Green);
        assert_eq!(cli.dead_color, Color::DarkGrey);
    }

    #[test]
    fn test_too_small_grid_is_reported() {
        let cli = Cli::try_parse_from(["cgol", "-g", "2", "-n", "1"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Error creating universe: the minimum grid size is 3"
        );
    }

    #[test]
    fn test_bad_color() {
        assert!(Cli::try_parse_from(["cgol", "--alive-color", "sparkly"]).is_err());
    }
}
