//! Day 8: Playground. Junction boxes hung in 3D space get wired up closest pair first.
//!
//! Every pair of boxes is ordered by squared distance (ties broken by box index), then joined in
//! that order through a disjoint-set forest. Part 1 stops after a fixed number of pairs and looks
//! at the three biggest circuits; part 2 runs until everything is one circuit and reports the pair
//! whose connection finished the job.

use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::{bad_part, input, Example};

const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "40"},
    Example {part: 2, input: EXAMPLE, expected: "25272"},
];

/// Pairs connected in part 1 of the real puzzle.
pub const CONNECTIONS: usize = 1000;
/// The worked example only connects ten pairs.
pub const EXAMPLE_CONNECTIONS: usize = 10;

/// Disjoint-set forest over box indices, with union by size and path compression.
#[derive(Debug, Clone)]
pub struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    pub fn new(boxes: usize) -> Circuits {
        Circuits {parent: (0 .. boxes).collect(), size: vec![1; boxes], count: boxes}
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {root = self.parent[root]}
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Joins the circuits of `x` and `y`. False if they were already one circuit.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut x, mut y) = (self.find(x), self.find(y));
        if x == y {return false}
        if self.size[x] < self.size[y] {std::mem::swap(&mut x, &mut y)}
        self.parent[y] = x;
        self.size[x] += self.size[y];
        self.count -= 1;
        true
    }

    /// Number of separate circuits.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of every circuit, largest first.
    pub fn sizes(&mut self) -> Vec<usize> {
        let roots = (0 .. self.parent.len()).map(|x| self.find(x)).collect_vec();
        roots.iter().enumerate()
            .filter(|&(x, &root)| x == root)
            .map(|(root, _)| self.size[root])
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect()
    }
}

fn parse(input: &str) -> Result<Vec<[i64; 3]>> {
    input::lines(input).map(|line| {
        let coords = line.split(',').map(|n| n.trim().parse::<i64>()).collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("bad coordinates {line:?}"))?;
        let coords: [i64; 3] = coords.try_into()
            .map_err(|_| anyhow::anyhow!("expected three coordinates in {line:?}"))?;
        Ok(coords)
    }).collect()
}

/// Every pair of boxes, closest first.
fn closest_pairs(boxes: &[[i64; 3]]) -> Vec<(usize, usize)> {
    (0 .. boxes.len()).tuple_combinations()
        .map(|(i, j)| {
            let d = (0 .. 3).map(|axis| (boxes[i][axis] - boxes[j][axis]).pow(2)).sum::<i64>();
            (d, i, j)
        })
        .sorted_unstable()
        .map(|(_, i, j)| (i, j))
        .collect()
}

/// Product of the three largest circuits after joining the `connections` closest pairs.
pub fn largest_circuits(input: &str, connections: usize) -> Result<u64> {
    let boxes = parse(input)?;
    let mut circuits = Circuits::new(boxes.len());
    for (i, j) in closest_pairs(&boxes).into_iter().take(connections) {
        circuits.union(i, j);
    }
    debug!(circuits = circuits.count(), "connected {connections} closest pairs");
    let sizes = circuits.sizes();
    if sizes.is_empty() {return Ok(0)}
    Ok(sizes.iter().take(3).map(|&size| size as u64).product())
}

/// Product of the X coordinates of the pair whose connection leaves a single circuit.
pub fn completing_pair(input: &str) -> Result<i64> {
    let boxes = parse(input)?;
    ensure!(boxes.len() >= 2, "need at least two junction boxes, got {}", boxes.len());
    let mut circuits = Circuits::new(boxes.len());
    for (i, j) in closest_pairs(&boxes) {
        if circuits.union(i, j) && circuits.count() == 1 {
            debug!(i, j, "last connection");
            return Ok(boxes[i][0] * boxes[j][0]);
        }
    }
    unreachable!("joining every pair always ends in a single circuit")
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    match part {
        1 => Ok(largest_circuits(input, CONNECTIONS)?.to_string()),
        2 => Ok(completing_pair(input)?.to_string()),
        _ => Err(bad_part(part)),
    }
}

pub fn solve_example(part: u8, input: &str) -> Result<String> {
    match part {
        1 => Ok(largest_circuits(input, EXAMPLE_CONNECTIONS)?.to_string()),
        _ => solve(part, input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(largest_circuits(EXAMPLE, 10).unwrap(), 40);
        assert_eq!(completing_pair(EXAMPLE).unwrap(), 25272);
    }

    #[test]
    fn example_through_solve() {
        assert_eq!(solve_example(1, EXAMPLE).unwrap(), "40");
        assert_eq!(solve_example(2, EXAMPLE).unwrap(), "25272");
        // with 1000 connections the twenty example boxes all end up together
        assert_eq!(solve(1, EXAMPLE).unwrap(), "20");
    }

    #[test]
    fn union_by_size_keeps_counts() {
        let mut circuits = Circuits::new(6);
        assert!(circuits.union(0, 1));
        assert!(circuits.union(2, 3));
        assert!(circuits.union(1, 3));
        assert!(!circuits.union(0, 2));
        assert_eq!(circuits.count(), 3);
        assert_eq!(circuits.sizes(), [4, 1, 1]);
        assert_eq!(circuits.find(3), circuits.find(0));
    }

    #[test]
    fn fewer_than_three_circuits() {
        assert_eq!(largest_circuits("0,0,0\n1,0,0\n", 1).unwrap(), 2);
        assert_eq!(largest_circuits("0,0,0\n9,0,0\n", 0).unwrap(), 1);
        assert_eq!(largest_circuits("", 10).unwrap(), 0);
    }

    #[test]
    fn lone_box_never_completes() {
        assert!(completing_pair("1,2,3\n").is_err());
    }

    #[test]
    fn malformed_coordinates() {
        assert!(solve(1, "1,2\n").is_err());
        assert!(solve(1, "1,2,x\n").is_err());
    }
}
