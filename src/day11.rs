//! Day 11: Reactor. Count data paths through a directed graph of devices.

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::{bad_part, input, Example};

const EXAMPLE_YOU: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

const EXAMPLE_SVR: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE_YOU, expected: "5"},
    Example {part: 2, input: EXAMPLE_SVR, expected: "2"},
];

struct Devices<'a> {
    outputs: FxHashMap<&'a str, Vec<&'a str>>,
}

#[derive(Clone, Copy)]
enum Visit {
    Open,
    Done(u64),
}

impl<'a> Devices<'a> {
    fn parse(input: &'a str) -> Result<Devices<'a>> {
        let mut outputs = FxHashMap::default();
        for line in input::lines(input) {
            let (device, rest) = line.split_once(':').with_context(|| format!("no ':' in {line:?}"))?;
            outputs.insert(device.trim(), rest.split_whitespace().collect());
        }
        Ok(Devices {outputs})
    }

    /// Paths from `from` to `to` passing through every device in `via` (at most 32 of them).
    fn paths(&self, from: &'a str, to: &'a str, via: &[&str]) -> Result<u64> {
        let mut memo = FxHashMap::default();
        self.count(from, to, via, 0, &mut memo)
    }

    fn count(
        &self, node: &'a str, to: &'a str, via: &[&str], seen: u32,
        memo: &mut FxHashMap<(&'a str, u32), Visit>,
    ) -> Result<u64> {
        let seen = via.iter().position(|&v| v == node).map_or(seen, |at| seen | 1 << at);
        if node == to {
            return Ok((seen.count_ones() as usize == via.len()) as u64);
        }
        match memo.get(&(node, seen)) {
            Some(Visit::Done(paths)) => return Ok(*paths),
            Some(Visit::Open) => bail!("loop through {node:?}"),
            None => (),
        }
        memo.insert((node, seen), Visit::Open);
        let mut paths = 0;
        for &next in self.outputs.get(node).into_iter().flatten() {
            paths += self.count(next, to, via, seen, memo)?;
        }
        memo.insert((node, seen), Visit::Done(paths));
        Ok(paths)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let devices = Devices::parse(input)?;
    let paths = match part {
        1 => devices.paths("you", "out", &[])?,
        2 => devices.paths("svr", "out", &["dac", "fft"])?,
        _ => return Err(bad_part(part)),
    };
    Ok(paths.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE_YOU).unwrap(), "5");
        assert_eq!(solve(2, EXAMPLE_SVR).unwrap(), "2");
    }

    #[test]
    fn all_paths_without_checkpoints() {
        let devices = Devices::parse(EXAMPLE_SVR).unwrap();
        assert_eq!(devices.paths("svr", "out", &[]).unwrap(), 8);
        assert_eq!(devices.paths("svr", "out", &["dac"]).unwrap(), 4);
    }

    #[test]
    fn missing_start_has_no_paths() {
        assert_eq!(solve(2, EXAMPLE_YOU).unwrap(), "0");
        assert_eq!(solve(1, EXAMPLE_SVR).unwrap(), "0");
    }

    #[test]
    fn loops_are_reported() {
        assert!(solve(1, "you: aaa\naaa: bbb\nbbb: aaa out\n").is_err());
        // a loop nothing reaches is harmless
        assert_eq!(solve(1, "you: out\naaa: bbb\nbbb: aaa\n").unwrap(), "1");
    }
}
