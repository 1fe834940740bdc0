//! Day 5: Cafeteria. Inclusive fresh-ID ranges, possibly overlapping.

use anyhow::{ensure, Context, Result};

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "3"},
    Example {part: 2, input: EXAMPLE, expected: "14"},
];

/// Sorted, disjoint, non-adjacent ranges covering the same IDs as `ranges`.
fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        if lo > hi {continue}
        match merged.last_mut() {
            Some((_, last_hi)) if lo <= last_hi.saturating_add(1) => *last_hi = (*last_hi).max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let groups = input::groups(input);
    ensure!(!groups.is_empty(), "no fresh ranges in input");
    let ranges = groups[0].iter().map(|line| {
        let (lo, hi) = line.split_once('-').with_context(|| format!("range {line:?} has no '-'"))?;
        Ok((lo.parse()?, hi.parse()?))
    }).collect::<Result<Vec<(u64, u64)>>>()?;
    let fresh = merge(ranges);

    match part {
        1 => {
            let ids = groups.get(1).map(Vec::as_slice).unwrap_or_default();
            let mut count = 0;
            for id in ids {
                let id: u64 = id.parse().with_context(|| format!("bad ingredient ID {id:?}"))?;
                let at = fresh.partition_point(|&(_, hi)| hi < id);
                if fresh.get(at).is_some_and(|&(lo, _)| lo <= id) {count += 1}
            }
            Ok(count.to_string())
        },
        2 => Ok(fresh.iter().map(|&(lo, hi)| u128::from(hi - lo) + 1).sum::<u128>().to_string()),
        _ => Err(bad_part(part)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "14");
    }

    #[test]
    fn adjacent_ranges_merge() {
        assert_eq!(merge(vec![(5, 7), (1, 4), (9, 9), (2, 3)]), [(1, 7), (9, 9)]);
    }

    #[test]
    fn ranges_only_input() {
        assert_eq!(solve(1, "1-3\n").unwrap(), "0");
        assert_eq!(solve(2, "1-3\n2-10\n").unwrap(), "10");
    }

    #[test]
    fn reversed_ranges_are_empty() {
        assert_eq!(solve(2, "5-3\n1-2\n").unwrap(), "2");
    }

    #[test]
    fn whole_id_space_is_fresh() {
        assert_eq!(solve(2, "0-18446744073709551615\n").unwrap(), "18446744073709551616");
        assert_eq!(solve(1, "0-18446744073709551615\n\n18446744073709551615\n").unwrap(), "1");
    }

    #[test]
    fn garbled_input() {
        assert!(solve(2, "1..3\n").is_err());
        assert!(solve(1, "").is_err());
    }
}
