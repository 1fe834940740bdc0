//! Day 3: Lobby. Each bank of batteries turns on `k` of its digits, in order.

use anyhow::{ensure, Result};

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "357"},
    Example {part: 2, input: EXAMPLE, expected: "3121910778619"},
];

/// Largest number formed by keeping `k` digits of `bank` in their original order.
fn max_joltage(bank: &[u8], k: usize) -> u64 {
    let mut drop = bank.len().saturating_sub(k);
    let mut kept: Vec<u8> = Vec::with_capacity(bank.len());
    for &digit in bank {
        while drop > 0 && kept.last().is_some_and(|&last| last < digit) {
            kept.pop();
            drop -= 1;
        }
        kept.push(digit);
    }
    kept.truncate(k);
    kept.iter().fold(0, |acc, &digit| acc * 10 + (digit - b'0') as u64)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let k = match part {1 => 2, 2 => 12, _ => return Err(bad_part(part))};
    let mut total = 0;
    for bank in input::lines(input) {
        ensure!(bank.bytes().all(|b| b.is_ascii_digit()), "bank {bank:?} is not all digits");
        total += max_joltage(bank.as_bytes(), k);
    }
    Ok(total.to_string())
}
