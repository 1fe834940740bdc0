//! Every worked example from the puzzle text gives the quoted answer.

use aoc2025::runner::{check_all, check_examples, run_day};
use aoc2025::{find, PUZZLES};

#[test]
fn every_example_passes() {
    for puzzle in PUZZLES {
        assert!(!puzzle.examples.is_empty(), "day {} has no examples", puzzle.day);
        for outcome in check_examples(puzzle) {
            assert!(outcome.passed(), "day {} part {}: got {:?}, expected {}",
                puzzle.day, outcome.part, outcome.got, outcome.expected);
        }
    }
}

#[test]
fn examples_cover_every_part() {
    for puzzle in PUZZLES {
        for part in 1 ..= puzzle.parts {
            assert!(puzzle.examples.iter().any(|example| example.part == part),
                "day {} part {part} has no example", puzzle.day);
        }
    }
}

#[test]
fn check_reports_registered_days() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("day20.txt"), "1\n").unwrap();
    let summary = check_all(dir.path());
    assert_eq!(summary.passed, (1 ..= 12).collect::<Vec<u8>>());
    assert!(summary.failed.is_empty());
    assert_eq!(summary.missing, [20]);

    let mut out = Vec::new();
    summary.report(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Passed: 12\nFailed: 0\nMissing: 1\n"));
}

#[test]
fn run_solves_the_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = find(1).unwrap();
    std::fs::write(dir.path().join("day01.txt"), puzzle.examples[0].input).unwrap();
    let mut out = Vec::new();
    run_day(puzzle, dir.path(), None, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Puzzle answers:\n  Part 1: 3  ("));
    assert!(out.contains("\n  Part 2: 6  ("));
}
