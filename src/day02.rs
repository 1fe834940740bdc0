//! Day 2: Gift Shop. Product IDs made of one digit sequence repeated are invalid.

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::{bad_part, Example};

const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "1227775554"},
    Example {part: 2, input: EXAMPLE, expected: "4174379265"},
];

fn parse(input: &str) -> Result<Vec<(u64, u64)>> {
    input.split(',').map(str::trim).filter(|range| !range.is_empty()).map(|range| {
        let (lo, hi) = range.split_once('-').with_context(|| format!("range {range:?} has no '-'"))?;
        Ok((lo.trim().parse()?, hi.trim().parse()?))
    }).collect()
}

/// Invalid IDs in `lo ..= hi` with exactly `digits` digits, built from a `width`-digit pattern.
/// Works in u128 since a 20-digit ID length overflows u64 powers of ten.
fn repeats(lo: u64, hi: u64, digits: u32, width: u32) -> impl Iterator<Item = u64> {
    // 123123123 = 123 * 001001001
    let step = 10u128.pow(width);
    let unit = (0 .. digits / width).fold(0, |acc, _| acc * step + 1);
    let lo = u128::from(lo).max(10u128.pow(digits - 1));
    let hi = u128::from(hi).min(10u128.pow(digits) - 1);
    let first = lo.div_ceil(unit).max(step / 10);
    let last = (hi / unit).min(step - 1);
    // never above `hi`, so back in u64 range
    (first ..= last).map(move |pattern| (pattern * unit) as u64)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if !(1 ..= 2).contains(&part) {return Err(bad_part(part))}
    let mut invalid = FxHashSet::default();
    for (lo, hi) in parse(input)? {
        if lo > hi {continue}
        for digits in lo.max(1).ilog10() + 1 ..= hi.max(1).ilog10() + 1 {
            let widths = if part == 1 {
                if digits % 2 == 0 {vec![digits / 2]} else {vec![]}
            } else {
                (1 ..= digits / 2).filter(|width| digits % width == 0).collect()
            };
            for width in widths {
                invalid.extend(repeats(lo, hi, digits, width));
            }
        }
    }
    Ok(invalid.iter().map(|&id| u128::from(id)).sum::<u128>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(part: u8, input: &str) -> u64 {
        parse(input).unwrap().into_iter().flat_map(|(lo, hi)| lo ..= hi).filter(|id| {
            let s = id.to_string();
            let n = s.len();
            (1 ..= n / 2).filter(|w| n % w == 0 && (part == 2 || n / w == 2))
                .any(|w| s.as_bytes().chunks(w).all(|chunk| chunk == &s.as_bytes()[.. w]))
        }).sum()
    }

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "1227775554");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4174379265");
    }

    #[test]
    fn ranges_crossing_digit_boundaries() {
        for input in ["1-1000", "5-114", "90-12000", "99999-1000001"] {
            assert_eq!(solve(1, input).unwrap(), brute(1, input).to_string(), "{input}");
            assert_eq!(solve(2, input).unwrap(), brute(2, input).to_string(), "{input}");
        }
    }

    #[test]
    fn ids_repeating_several_ways_count_once() {
        // 111111 is 1x6, 11x3 and 111x2
        assert_eq!(solve(2, "111111-111111").unwrap(), "111111");
        assert_eq!(solve(1, "111111-111111").unwrap(), "111111");
    }

    #[test]
    fn twenty_digit_ids() {
        assert_eq!(solve(2, "10000000000000000000-10000000000000000001").unwrap(), "0");
        // 1010101010 twice, 1010 five times and 10 ten times: counted once
        let expected = 10101010101010101010u128;
        assert_eq!(solve(2, "10101010101010101009-10101010101010101011").unwrap(), expected.to_string());
        assert_eq!(solve(1, "18446744073709551615-18446744073709551615").unwrap(), "0");
    }

    #[test]
    fn bad_range_is_an_error() {
        assert!(solve(1, "12").is_err());
        assert!(solve(1, "a-b").is_err());
    }
}
