//! Runs registered days: first against the puzzle text's examples, then against the real input.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::{input, Example, HarnessError, Puzzle, PUZZLES};

/// Where the real input for `day` lives.
pub fn input_path(inputs: &Path, day: u8) -> PathBuf {
    inputs.join(format!("day{day:02}.txt"))
}

#[derive(Debug)]
pub struct ExampleOutcome {
    pub part: u8,
    pub expected: &'static str,
    /// The answer, or the error message if solving failed.
    pub got: Result<String, String>,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.got.as_deref() == Ok(self.expected)
    }
}

fn check_example(puzzle: &Puzzle, example: &Example) -> ExampleOutcome {
    ExampleOutcome {
        part: example.part,
        expected: example.expected,
        got: puzzle.solve_example(example).map_err(|err| format!("{err:#}")),
    }
}

pub fn check_examples(puzzle: &Puzzle) -> Vec<ExampleOutcome> {
    puzzle.examples.iter().map(|example| check_example(puzzle, example)).collect()
}

/// Prints example checks and answers for one day. `part` limits the run to a single part.
pub fn run_day(puzzle: &Puzzle, inputs: &Path, part: Option<u8>, out: &mut impl Write) -> Result<()> {
    let parts = match part {
        Some(part) if part == 0 || part > puzzle.parts => {
            return Err(HarnessError::PartUnavailable(puzzle.day, part).into());
        },
        Some(part) => part ..= part,
        None => 1 ..= puzzle.parts,
    };
    writeln!(out, "=== Day {}: {} ===\n", puzzle.day, puzzle.title)?;

    let outcomes = puzzle.examples.iter()
        .filter(|example| parts.contains(&example.part))
        .map(|example| check_example(puzzle, example))
        .collect::<Vec<_>>();
    if !outcomes.is_empty() {
        writeln!(out, "Testing with example:")?;
        for outcome in outcomes {
            let got = outcome.got.as_deref().unwrap_or_else(|err| err);
            writeln!(out, "  Part {}: {} (expected: {})", outcome.part, got, outcome.expected)?;
            if !outcome.passed() {warn!(day = puzzle.day, part = outcome.part, "example answer mismatch")}
        }
        writeln!(out)?;
    }

    let path = input_path(inputs, puzzle.day);
    let text = match input::read_input(&path) {
        Ok(text) => text,
        Err(HarnessError::InputNotFound(path)) => {
            writeln!(out, "Input file not found: {}", path.display())?;
            writeln!(out, "Please add your puzzle input to solve the actual puzzle.")?;
            return Ok(());
        },
        Err(err) => return Err(err.into()),
    };
    writeln!(out, "Puzzle answers:")?;
    for part in parts {
        let time = Instant::now();
        let answer = puzzle.solve(part, &text)?;
        let elapsed = time.elapsed();
        info!(day = puzzle.day, part, seconds = elapsed.as_secs_f32(), "solved");
        writeln!(out, "  Part {part}: {answer}  ({:.3}s)", elapsed.as_secs_f32())?;
    }
    Ok(())
}

/// Runs every registered day. A day that fails is logged and the rest still run.
pub fn run_all(inputs: &Path, out: &mut impl Write) -> Result<()> {
    let rule = "=".repeat(60);
    for puzzle in PUZZLES {
        writeln!(out, "\n{rule}")?;
        if let Err(err) = run_day(puzzle, inputs, None, out) {
            error!(day = puzzle.day, "{err:#}");
            writeln!(out, "  Error: {err:#}")?;
        }
        writeln!(out, "{rule}")?;
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: Vec<u8>,
    pub failed: Vec<u8>,
    /// Days with an input file but no registered solution.
    pub missing: Vec<u8>,
}

/// Checks every registered day against its examples.
pub fn check_all(inputs: &Path) -> Summary {
    let mut summary = Summary::default();
    for day in 1 ..= 25 {
        match crate::find(day) {
            Ok(puzzle) => {
                if check_examples(puzzle).iter().all(ExampleOutcome::passed) {
                    summary.passed.push(day);
                } else {
                    summary.failed.push(day);
                }
            },
            Err(_) if input_path(inputs, day).exists() => summary.missing.push(day),
            Err(_) => (),
        }
    }
    summary
}

impl Summary {
    pub fn report(&self, out: &mut impl Write) -> std::io::Result<()> {
        let rule = "=".repeat(40);
        writeln!(out, "{rule}\nSummary:\n{rule}")?;
        writeln!(out, "Passed: {}", self.passed.len())?;
        writeln!(out, "Failed: {}", self.failed.len())?;
        writeln!(out, "Missing: {}", self.missing.len())?;
        if !self.failed.is_empty() {
            writeln!(out, "\nFailed days:")?;
            for day in &self.failed {writeln!(out, "  - Day {day:02}")?}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_files_are_zero_padded() {
        assert_eq!(input_path(Path::new("inputs"), 3), Path::new("inputs/day03.txt"));
    }

    #[test]
    fn missing_input_is_not_fatal() {
        let mut out = Vec::new();
        run_day(crate::find(1).unwrap(), Path::new("no/such/dir"), None, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("=== Day 1: Secret Entrance ===\n"));
        assert!(out.contains("  Part 2: 6 (expected: 6)\n"));
        assert!(out.contains("Input file not found: no/such/dir/day01.txt"));
    }

    #[test]
    fn single_part_run_skips_the_other_examples() {
        let mut out = Vec::new();
        run_day(crate::find(5).unwrap(), Path::new("no/such/dir"), Some(2), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Part 1:"));
        assert!(out.contains("  Part 2: 14 (expected: 14)"));
    }

    fn only_part_two(part: u8, _input: &str) -> Result<String> {
        assert_eq!(part, 2, "part 1 examples should not be solved");
        Ok("2".to_string())
    }

    #[test]
    fn single_part_run_solves_only_that_part() {
        let puzzle = Puzzle {
            day: 25,
            title: "Test",
            parts: 2,
            solve: only_part_two,
            solve_example: None,
            examples: &[
                Example {part: 1, input: "", expected: "1"},
                Example {part: 2, input: "", expected: "2"},
            ],
        };
        let mut out = Vec::new();
        run_day(&puzzle, Path::new("no/such/dir"), Some(2), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("  Part 2: 2 (expected: 2)\n"));
    }

    #[test]
    fn part_beyond_the_puzzle_is_rejected() {
        let err = run_day(crate::find(12).unwrap(), Path::new("."), Some(2), &mut Vec::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<HarnessError>(), Some(HarnessError::PartUnavailable(12, 2))));
    }
}
