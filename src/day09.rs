//! Day 9: Movie Theater. Red tiles trace a closed loop of axis-aligned green edges.

use std::collections::VecDeque;

use anyhow::{ensure, Context, Result};
use bitvec::prelude::*;
use itertools::Itertools;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "50"},
    Example {part: 2, input: EXAMPLE, expected: "24"},
];

fn parse(input: &str) -> Result<Vec<(i64, i64)>> {
    input::lines(input).map(|line| {
        let (x, y) = line.split_once(',').with_context(|| format!("bad tile {line:?}"))?;
        Ok((x.trim().parse()?, y.trim().parse()?))
    }).collect()
}

fn area((x1, y1): (i64, i64), (x2, y2): (i64, i64)) -> u64 {
    (x1.abs_diff(x2) + 1) * (y1.abs_diff(y2) + 1)
}

/// Distinct coordinates along one axis, plus one stand-in for each gap between them and one
/// padding value at either end.
fn axis(values: impl Iterator<Item = i64>) -> Vec<i64> {
    let values = values.sorted_unstable().dedup().collect_vec();
    let mut axis = Vec::with_capacity(2 * values.len() + 1);
    for (k, &v) in values.iter().enumerate() {
        if k == 0 {axis.push(v - 1)}
        axis.push(v);
        if values.get(k + 1).map_or(true, |&next| next > v + 1) {axis.push(v + 1)}
    }
    axis
}

/// Compressed picture of the loop, one cell per `axis` value on either side.
struct Floor {
    xs: Vec<i64>,
    ys: Vec<i64>,
    /// outside_before[r][c]: outside cells in rows `..r`, columns `..c`
    outside_before: Vec<Vec<u32>>,
}

impl Floor {
    fn new(tiles: &[(i64, i64)]) -> Result<Floor> {
        let xs = axis(tiles.iter().map(|t| t.0));
        let ys = axis(tiles.iter().map(|t| t.1));
        let (width, height) = (xs.len(), ys.len());
        let mut floor = Floor {xs, ys, outside_before: vec![]};

        let mut wall = bitvec![0; width * height];
        for (&a, &b) in tiles.iter().circular_tuple_windows() {
            ensure!(a.0 == b.0 || a.1 == b.1, "{a:?} and {b:?} are not in a line");
            let (ca, cb) = (floor.cell(a), floor.cell(b));
            for ri in ca.0.min(cb.0) ..= ca.0.max(cb.0) {
                for ci in ca.1.min(cb.1) ..= ca.1.max(cb.1) {
                    wall.set(ri * width + ci, true);
                }
            }
        }

        let mut outside = bitvec![0; width * height];
        let mut queue = VecDeque::from([0]);
        outside.set(0, true);
        while let Some(at) = queue.pop_front() {
            let (ri, ci) = (at / width, at % width);
            let neighbours = [
                (ri > 0).then(|| at - width), (ri + 1 < height).then(|| at + width),
                (ci > 0).then(|| at - 1), (ci + 1 < width).then(|| at + 1),
            ];
            for next in neighbours.into_iter().flatten() {
                if !wall[next] && !outside[next] {
                    outside.set(next, true);
                    queue.push_back(next);
                }
            }
        }

        let mut sums = vec![vec![0u32; width + 1]; height + 1];
        for ri in 0 .. height {
            for ci in 0 .. width {
                sums[ri + 1][ci + 1] = sums[ri][ci + 1] + sums[ri + 1][ci] - sums[ri][ci]
                    + outside[ri * width + ci] as u32;
            }
        }
        floor.outside_before = sums;
        Ok(floor)
    }

    /// (row, column) of a tile on the compressed grid.
    fn cell(&self, (x, y): (i64, i64)) -> (usize, usize) {
        // tiles are always on the axes they were built from
        let ri = self.ys.binary_search(&y).unwrap_or_else(|at| at);
        let ci = self.xs.binary_search(&x).unwrap_or_else(|at| at);
        (ri, ci)
    }

    /// Whether the rectangle with these opposite corners holds only red and green tiles.
    fn covers(&self, a: (i64, i64), b: (i64, i64)) -> bool {
        let (ca, cb) = (self.cell(a), self.cell(b));
        let (r0, r1) = (ca.0.min(cb.0), ca.0.max(cb.0) + 1);
        let (c0, c1) = (ca.1.min(cb.1), ca.1.max(cb.1) + 1);
        let s = &self.outside_before;
        s[r1][c1] + s[r0][c0] == s[r0][c1] + s[r1][c0]
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let tiles = parse(input)?;
    let floor = match part {
        1 => None,
        2 if tiles.is_empty() => None,
        2 => Some(Floor::new(&tiles)?),
        _ => return Err(bad_part(part)),
    };
    let best = tiles.iter().tuple_combinations()
        .filter(|(a, b)| a.0 != b.0 && a.1 != b.1)
        .filter(|&(&a, &b)| floor.as_ref().map_or(true, |floor| floor.covers(a, b)))
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or(0);
    Ok(best.to_string())
}
