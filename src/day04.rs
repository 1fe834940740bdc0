//! Day 4: Printing Department. Forklifts reach a roll with fewer than four rolls around it.

use anyhow::{bail, Result};
use bitvec::prelude::*;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "13"},
    Example {part: 2, input: EXAMPLE, expected: "43"},
];

struct Floor {
    rolls: BitVec,
    rows: usize,
    cols: usize,
}

impl Floor {
    fn parse(input: &str) -> Result<Floor> {
        let lines = input::lines(input).collect::<Vec<_>>();
        let cols = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let mut rolls = bitvec![0; lines.len() * cols];
        for (ri, line) in lines.iter().enumerate() {
            for (ci, cell) in line.bytes().enumerate() {
                match cell {
                    b'@' => rolls.set(ri * cols + ci, true),
                    b'.' => (),
                    _ => bail!("unexpected character {:?} at ({}, {})", cell as char, ri, ci),
                }
            }
        }
        Ok(Floor {rolls, rows: lines.len(), cols})
    }

    fn neighbours(&self, ri: usize, ci: usize) -> usize {
        (ri.saturating_sub(1) ..= (ri + 1).min(self.rows - 1)).flat_map(|rj|
            (ci.saturating_sub(1) ..= (ci + 1).min(self.cols - 1)).map(move |cj| (rj, cj))
        ).filter(|&(rj, cj)| (rj, cj) != (ri, ci) && self.rolls[rj * self.cols + cj]).count()
    }

    fn accessible(&self) -> Vec<usize> {
        self.rolls.iter_ones()
            .filter(|&at| self.neighbours(at / self.cols, at % self.cols) < 4)
            .collect()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut floor = Floor::parse(input)?;
    match part {
        1 => Ok(floor.accessible().len().to_string()),
        2 => {
            let mut removed = 0;
            loop {
                let wave = floor.accessible();
                if wave.is_empty() {break}
                removed += wave.len();
                for at in wave {floor.rolls.set(at, false)}
            }
            Ok(removed.to_string())
        },
        _ => Err(bad_part(part)),
    }
}
