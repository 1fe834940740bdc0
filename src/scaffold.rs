//! Generates the files for a new day: a solution module, an empty input file and a notes page.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::HarnessError;

const SOLUTION: &str = r#"//! Day DAY.

use anyhow::Result;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "0"},
];

pub fn solve(part: u8, input: &str) -> Result<String> {
    let lines = input::lines(input).collect::<Vec<_>>();
    let answer = match part {
        1 => lines.len(),
        2 => 0,
        _ => return Err(bad_part(part)),
    };
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "0");
    }
}
"#;

const NOTES: &str = "\
# Day DAY

## Part 1

## Part 2

## Notes
";

fn write(path: &Path, contents: &str) -> Result<(), HarnessError> {
    let io = |source| HarnessError::Io {path: path.to_owned(), source};
    if let Some(dir) = path.parent() {fs::create_dir_all(dir).map_err(io)?}
    fs::write(path, contents).map_err(io)
}

/// Creates `src/dayNN.rs`, `inputs/dayNN.txt` and `notes/dayNN.md` under `root`, returning the
/// paths written. Nothing is written if the solution module already exists.
pub fn create_day(root: &Path, day: u8) -> Result<Vec<PathBuf>, HarnessError> {
    if !(1 ..= 25).contains(&day) {return Err(HarnessError::DayOutOfRange(day))}
    let solution = root.join(format!("src/day{day:02}.rs"));
    if solution.exists() {return Err(HarnessError::AlreadyExists(solution))}

    write(&solution, &SOLUTION.replace("DAY", &day.to_string()))?;
    let input = root.join(format!("inputs/day{day:02}.txt"));
    // keep an input that was downloaded before the module existed
    if !input.exists() {write(&input, "")?}
    let notes = root.join(format!("notes/day{day:02}.md"));
    if !notes.exists() {write(&notes, &NOTES.replace("DAY", &day.to_string()))?}

    info!(day, "scaffolded");
    Ok(vec![solution, input, notes])
}

pub fn next_steps(day: u8) -> String {
    format!("\
Next steps:
  1. Add `pub mod day{day:02};` to src/lib.rs and a `puzzle!({day}, day{day:02}, \"...\")` entry to PUZZLES
  2. Paste your puzzle input into inputs/day{day:02}.txt
  3. Fill in EXAMPLES and solve() in src/day{day:02}.rs
  4. Run: cargo run -- run {day}
")
}
