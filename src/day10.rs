//! Day 10: Factory. Machines with indicator lights, wiring buttons and joltage counters.
//!
//! Part 1 works over GF(2): pressing a button twice undoes it, so the answer is the smallest set
//! of buttons whose toggles XOR to the target lights.
//!
//! Part 2 wants exact counter values, where every press adds one to each wired counter. Split any
//! solution into the buttons pressed an odd number of times and the rest: the odd set alone fixes
//! the parity of every counter, and what remains is an even number of presses of each button, i.e.
//! twice a solution for the halved leftover targets. So
//!
//! `fewest(t) = min over sets S with parity(S) = parity(t), S <= t of |S| + 2 * fewest((t - S) / 2)`
//!
//! which recurses only logarithmically deep and memoizes well.

use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "7"},
    Example {part: 2, input: EXAMPLE, expected: "33"},
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Machine {
    /// bit i set when light i must end up on
    lights: u32,
    /// counters wired to each button
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u16>,
}

struct Parser {
    lights: Regex,
    button: Regex,
    joltage: Regex,
}

impl Parser {
    fn new() -> Result<Parser> {
        Ok(Parser {
            lights: Regex::new(r"\[([.#]+)\]")?,
            button: Regex::new(r"\(([0-9,]+)\)")?,
            joltage: Regex::new(r"\{([0-9,]+)\}")?,
        })
    }

    fn parse(&self, line: &str) -> Result<Machine> {
        let lights = self.lights.captures(line).context("no indicator lights")?;
        ensure!(lights[1].len() <= 32, "too many lights: {}", lights[1].len());
        let lights = lights[1].bytes().rev().fold(0, |acc, c| acc << 1 | (c == b'#') as u32);
        let buttons = self.button.captures_iter(line).map(|m| list(&m[1])).collect::<Result<Vec<Vec<usize>>, _>>()?;
        let joltage = self.joltage.captures(line).context("no joltage requirements")?;
        let joltage: Vec<u16> = list(&joltage[1])?;
        ensure!(buttons.len() <= 20, "too many buttons: {}", buttons.len());
        ensure!(joltage.len() <= 32, "too many counters: {}", joltage.len());
        for &counter in buttons.iter().flatten() {
            ensure!(counter < joltage.len(), "button wired to missing counter {counter}");
        }
        Ok(Machine {lights, buttons, joltage})
    }
}

fn list<T: FromStr<Err = ParseIntError>>(s: &str) -> Result<Vec<T>, ParseIntError> {
    s.split(',').map(str::parse).collect()
}

fn bits(counters: &[usize]) -> u32 {
    counters.iter().fold(0, |acc, &c| acc | 1 << c)
}

fn fewest_toggles(machine: &Machine) -> Option<u32> {
    let masks = machine.buttons.iter().map(|b| bits(b)).collect::<Vec<_>>();
    let mut lit = vec![0u32; 1 << masks.len()];
    let mut best = None;
    for set in 0usize .. 1 << masks.len() {
        if set > 0 {lit[set] = lit[set & (set - 1)] ^ masks[set.trailing_zeros() as usize]}
        if lit[set] == machine.lights {
            let presses = set.count_ones();
            if best.map_or(true, |best| presses < best) {best = Some(presses)}
        }
    }
    best
}

/// Increments of every button set, grouped by the parity pattern they leave on the counters.
type Combos = FxHashMap<u32, Vec<(Vec<u16>, u64)>>;

fn combos(machine: &Machine) -> Combos {
    let mut combos = Combos::default();
    for set in 0usize .. 1 << machine.buttons.len() {
        let mut increments = vec![0u16; machine.joltage.len()];
        for (bi, button) in machine.buttons.iter().enumerate() {
            if set >> bi & 1 == 1 {
                for &counter in button {increments[counter] += 1}
            }
        }
        let parity = increments.iter().rev().fold(0, |acc, &n| acc << 1 | (n & 1) as u32);
        combos.entry(parity).or_default().push((increments, set.count_ones() as u64));
    }
    combos
}

fn fewest_presses(combos: &Combos, memo: &mut FxHashMap<Vec<u16>, Option<u64>>, target: &[u16]) -> Option<u64> {
    if target.iter().all(|&t| t == 0) {return Some(0)}
    if let Some(&known) = memo.get(target) {return known}
    let parity = target.iter().rev().fold(0, |acc, &t| acc << 1 | (t & 1) as u32);
    let mut best: Option<u64> = None;
    for (increments, presses) in combos.get(&parity).into_iter().flatten() {
        if increments.iter().zip(target).any(|(i, t)| i > t) {continue}
        let half = target.iter().zip(increments).map(|(t, i)| (t - i) / 2).collect::<Vec<_>>();
        if let Some(rest) = fewest_presses(combos, memo, &half) {
            let total = presses + 2 * rest;
            if best.map_or(true, |best| total < best) {best = Some(total)}
        }
    }
    trace!(?target, ?best, "joltage subproblem");
    memo.insert(target.to_vec(), best);
    best
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if !(1 ..= 2).contains(&part) {return Err(bad_part(part))}
    let parser = Parser::new()?;
    let mut total = 0;
    for (mi, line) in input::lines(input).enumerate() {
        let machine = parser.parse(line).with_context(|| format!("machine {}: {line:?}", mi + 1))?;
        let presses = if part == 1 {
            fewest_toggles(&machine).map(u64::from)
        } else {
            let mut memo = FxHashMap::default();
            fewest_presses(&combos(&machine), &mut memo, &machine.joltage)
        };
        let presses = presses.with_context(|| format!("machine {} cannot be configured", mi + 1))?;
        debug!(machine = mi + 1, presses, "configured");
        total += presses;
    }
    Ok(total.to_string())
}
