use std::path::PathBuf;

use thiserror::Error;

/// Failures of the harness around the puzzles. Puzzle-level parse errors are `anyhow` errors.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("cannot read {}", path.display())]
    Io {path: PathBuf, #[source] source: std::io::Error},
    #[error("day number must be between 1 and 25, got {0}")]
    DayOutOfRange(u8),
    #[error("no solution available for day {0}")]
    DayUnavailable(u8),
    #[error("day {0} has no part {1}")]
    PartUnavailable(u8, u8),
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
}
