//! Day 1: Secret Entrance. A safe dial with 100 positions, starting at 50.

use anyhow::{bail, Context, Result};

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "3"},
    Example {part: 2, input: EXAMPLE, expected: "6"},
];

fn parse(line: &str) -> Result<i64> {
    let distance = line.get(1 ..).unwrap_or_default().parse::<i64>()
        .with_context(|| format!("bad rotation distance in {line:?}"))?;
    match line.as_bytes()[0] {
        b'L' => Ok(-distance),
        b'R' => Ok(distance),
        _ => bail!("rotation {line:?} must start with L or R"),
    }
}

/// Clicks that land on 0 while turning `delta` clicks away from `pos`.
fn zero_clicks(pos: i64, delta: i64) -> i64 {
    if delta >= 0 {
        (pos + delta) / 100
    } else if pos == 0 {
        -delta / 100
    } else if -delta >= pos {
        (-delta - pos) / 100 + 1
    } else {0}
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if !(1 ..= 2).contains(&part) {return Err(bad_part(part))}
    let mut pos: i64 = 50;
    let mut zeros = 0;
    for line in input::lines(input) {
        let delta = parse(line)?;
        let turned = pos.checked_add(delta).with_context(|| format!("rotation {line:?} is too far"))?;
        if part == 2 {zeros += zero_clicks(pos, delta)}
        pos = turned.rem_euclid(100);
        if part == 1 && pos == 0 {zeros += 1}
    }
    Ok(zeros.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "6");
    }

    #[test]
    fn full_turns_pass_zero_every_time() {
        assert_eq!(solve(2, "R1000").unwrap(), "10");
        assert_eq!(solve(2, "L50\nL200").unwrap(), "3");
        assert_eq!(solve(1, "L50\nL200").unwrap(), "2");
    }

    #[test]
    fn zero_clicks_matches_click_by_click() {
        for pos in 0i64 .. 100 {
            for delta in -250i64 ..= 250 {
                let mut p = pos;
                let mut slow = 0;
                for _ in 0 .. delta.abs() {
                    p = (p + delta.signum()).rem_euclid(100);
                    if p == 0 {slow += 1}
                }
                assert_eq!(zero_clicks(pos, delta), slow, "pos {pos} delta {delta}");
            }
        }
    }

    #[test]
    fn malformed_rotation_is_an_error() {
        assert!(solve(1, "X10").is_err());
        assert!(solve(1, "L").is_err());
        assert!(solve(2, "R9223372036854775807").is_err());
        assert_eq!(solve(2, "L9223372036854775807").unwrap(), "92233720368547758");
        assert!(solve(3, EXAMPLE).is_err());
    }
}
