//! Advent of Code 2025 solutions.
//!
//! Every day is a module exposing `solve(part, input) -> anyhow::Result<String>`. [`PUZZLES`]
//! registers them together with the worked examples from the puzzle text, which the runner checks
//! before solving the real input.

mod error;
pub mod input;
pub mod runner;
pub mod scaffold;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;

pub use error::HarnessError;

pub type Solver = fn(u8, &str) -> anyhow::Result<String>;

/// An input/answer pair quoted by the puzzle text.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub part: u8,
    pub input: &'static str,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    /// Number of parts with an answer; the last day of the event only has one.
    pub parts: u8,
    pub solve: Solver,
    /// Overrides `solve` for examples whose parameters differ from the real puzzle.
    pub solve_example: Option<Solver>,
    pub examples: &'static [Example],
}

impl Puzzle {
    pub fn solve(&self, part: u8, input: &str) -> anyhow::Result<String> {
        if part == 0 || part > self.parts {
            return Err(HarnessError::PartUnavailable(self.day, part).into());
        }
        (self.solve)(part, input)
    }

    pub fn solve_example(&self, example: &Example) -> anyhow::Result<String> {
        match self.solve_example {
            Some(solve) => solve(example.part, example.input),
            None => self.solve(example.part, example.input),
        }
    }
}

macro_rules! puzzle {
    ($day:literal, $module:ident, $title:literal) => {
        puzzle!($day, $module, $title, parts = 2, solve_example = None)
    };
    ($day:literal, $module:ident, $title:literal, parts = $parts:literal, solve_example = $ex:expr) => {
        Puzzle {
            day: $day,
            title: $title,
            parts: $parts,
            solve: $module::solve,
            solve_example: $ex,
            examples: $module::EXAMPLES,
        }
    };
}

pub const PUZZLES: &[Puzzle] = &[
    puzzle!(1, day01, "Secret Entrance"),
    puzzle!(2, day02, "Gift Shop"),
    puzzle!(3, day03, "Lobby"),
    puzzle!(4, day04, "Printing Department"),
    puzzle!(5, day05, "Cafeteria"),
    puzzle!(6, day06, "Trash Compactor"),
    puzzle!(7, day07, "Laboratories"),
    puzzle!(8, day08, "Playground", parts = 2, solve_example = Some(day08::solve_example)),
    puzzle!(9, day09, "Movie Theater"),
    puzzle!(10, day10, "Factory"),
    puzzle!(11, day11, "Reactor"),
    puzzle!(12, day12, "Christmas Tree Farm", parts = 1, solve_example = None),
];

/// Looks up a registered day.
pub fn find(day: u8) -> Result<&'static Puzzle, HarnessError> {
    if !(1 ..= 25).contains(&day) {return Err(HarnessError::DayOutOfRange(day))}
    PUZZLES.iter().find(|puzzle| puzzle.day == day).ok_or(HarnessError::DayUnavailable(day))
}

/// The error every day returns for a part number other than 1 or 2.
pub(crate) fn bad_part(part: u8) -> anyhow::Error {
    anyhow::anyhow!("part must be 1 or 2, got {part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_ordered_by_day() {
        assert!(PUZZLES.windows(2).all(|w| w[0].day < w[1].day));
        assert_eq!(find(8).unwrap().title, "Playground");
    }

    #[test]
    fn find_rejects_out_of_range_and_missing_days() {
        assert!(matches!(find(0), Err(HarnessError::DayOutOfRange(0))));
        assert!(matches!(find(26), Err(HarnessError::DayOutOfRange(26))));
        assert!(matches!(find(13), Err(HarnessError::DayUnavailable(13))));
    }

    #[test]
    fn single_part_day_rejects_part_two() {
        let err = find(12).unwrap().solve(2, "").unwrap_err();
        assert!(matches!(err.downcast_ref::<HarnessError>(), Some(HarnessError::PartUnavailable(12, 2))));
    }
}
