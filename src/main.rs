use std::io::{stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aoc2025::{find, runner, scaffold};

#[derive(Parser, Debug)]
#[command(name = "aoc2025")]
#[command(about = "Advent of Code 2025 solutions")]
struct Cli {
    /// Directory holding dayNN.txt input files
    #[arg(long, global = true, env = "AOC_INPUTS", default_value = "inputs")]
    inputs: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the examples and solve the real input
    Run {
        /// Day number, or `all`
        #[arg(default_value = "all")]
        day: Target,
        /// Only solve this part
        #[arg(long)]
        part: Option<u8>,
    },
    /// Check every registered day against its examples
    Check,
    /// Scaffold the files for a new day
    New {
        day: u8,
        /// Crate root to create the files under
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, Debug)]
enum Target {
    All,
    Day(u8),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Target, String> {
        match s {
            "all" => Ok(Target::All),
            _ => s.parse().map(Target::Day).map_err(|_| format!("expected a day number or `all`, got {s:?}")),
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let mut out = stdout().lock();

    match cli.command {
        Command::Run {day: Target::All, part} => {
            ensure!(part.is_none(), "--part needs a single day");
            runner::run_all(&cli.inputs, &mut out)?;
        },
        Command::Run {day: Target::Day(day), part} => {
            runner::run_day(find(day)?, &cli.inputs, part, &mut out)?;
        },
        Command::Check => {
            let summary = runner::check_all(&cli.inputs);
            summary.report(&mut out)?;
            if !summary.failed.is_empty() {return Ok(ExitCode::FAILURE)}
        },
        Command::New {day, root} => {
            let created = scaffold::create_day(&root, day)?;
            writeln!(out, "Created day {day}:")?;
            for path in created {writeln!(out, "  {}", path.display())?}
            writeln!(out, "\n{}", scaffold::next_steps(day))?;
        },
    }
    Ok(ExitCode::SUCCESS)
}
