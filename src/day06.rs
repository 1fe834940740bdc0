//! Day 6: Trash Compactor. Cephalopod math homework, laid out in columns.

use anyhow::{bail, Context, Result};
use itertools::Itertools;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "4277556"},
    Example {part: 2, input: EXAMPLE, expected: "3263827"},
];

/// The number spelled by the digits among `digits`, or `None` if there are none.
fn number(digits: impl Iterator<Item = u8>) -> Result<Option<u64>> {
    digits.filter(u8::is_ascii_digit).try_fold(None, |acc: Option<u64>, digit| {
        acc.unwrap_or(0).checked_mul(10).and_then(|n| n.checked_add((digit - b'0') as u64))
            .map(Some).context("number does not fit in 64 bits")
    })
}

/// Byte at column `ci`, with short lines padded by spaces.
fn cell(line: &str, ci: usize) -> u8 {
    line.as_bytes().get(ci).copied().unwrap_or(b' ')
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if !(1 ..= 2).contains(&part) {return Err(bad_part(part))}
    let lines = input::raw_lines(input);
    let Some((ops, rows)) = lines.split_last() else {return Ok("0".to_string())};
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

    // problems are maximal runs of columns that are not blank all the way down
    let problems = (0 .. width)
        .chunk_by(|&ci| lines.iter().all(|line| cell(line, ci) == b' '))
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, columns)| columns.collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut total = 0u64;
    for columns in problems {
        let op = columns.iter().map(|&ci| cell(ops, ci)).find(|&c| c != b' ')
            .with_context(|| format!("no operator under column {}", columns[0]))?;
        let numbers: Vec<Option<u64>> = if part == 1 {
            rows.iter().map(|row| number(columns.iter().map(|&ci| cell(row, ci)))).collect::<Result<_>>()?
        } else {
            columns.iter().rev().map(|&ci| number(rows.iter().map(|row| cell(row, ci)))).collect::<Result<_>>()?
        };
        let numbers = numbers.into_iter().flatten();
        let result = match op {
            b'+' => numbers.fold(Some(0u64), |acc, n| acc?.checked_add(n)),
            b'*' => numbers.fold(Some(1u64), |acc, n| acc?.checked_mul(n)),
            _ => bail!("unknown operator {:?}", op as char),
        };
        total = result.and_then(|result| total.checked_add(result))
            .with_context(|| format!("problem at column {} overflows", columns[0]))?;
    }
    Ok(total.to_string())
}
