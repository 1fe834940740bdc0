//! Day 7: Laboratories. A tachyon beam falls from `S` and splits on every `^`.

use anyhow::Result;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "21"},
    Example {part: 2, input: EXAMPLE, expected: "40"},
];

pub fn solve(part: u8, input: &str) -> Result<String> {
    if !(1 ..= 2).contains(&part) {return Err(bad_part(part))}
    let rows = input::lines(input).map(str::as_bytes).collect::<Vec<_>>();
    let start = rows.iter().enumerate()
        .find_map(|(ri, row)| row.iter().position(|&c| c == b'S').map(|ci| (ri, ci)));
    // no entry point, no beam
    let Some((start_ri, start_ci)) = start else {return Ok("0".to_string())};
    let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    // timelines[ci]: how many ways the particle can be in column ci on the current row
    let mut timelines = vec![0u64; cols];
    timelines[start_ci] = 1;
    let mut splits = 0u64;
    for row in &rows[start_ri + 1 ..] {
        let mut next = vec![0u64; cols];
        for (ci, &count) in timelines.iter().enumerate().filter(|&(_, &count)| count > 0) {
            if row.get(ci) == Some(&b'^') {
                splits += 1;
                if ci > 0 {next[ci - 1] += count}
                if ci + 1 < cols {next[ci + 1] += count}
            } else {
                next[ci] += count;
            }
        }
        timelines = next;
    }

    let answer = if part == 1 {splits} else {timelines.iter().sum()};
    Ok(answer.to_string())
}
