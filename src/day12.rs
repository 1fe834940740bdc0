//! Day 12: Christmas Tree Farm. Can the presents under each tree be laid out without overlap?
//!
//! Presents are polyominoes that may be rotated and flipped. Before searching, two cheap checks
//! settle most regions: too little area means no, and enough room to give every present its own
//! bounding square means yes. The rest go to an exact search that always works on the first cell
//! not yet decided: either it stays empty, spending one cell of slack, or it becomes the first
//! (row-major) cell of some remaining present.

use anyhow::{ensure, Context, Result};
use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::{Example, HarnessError};

const EXAMPLE: &str = "\
0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, input: EXAMPLE, expected: "2"},
];

/// Cells of one orientation relative to its first cell in row-major order.
type Orientation = Vec<(isize, isize)>;

#[derive(Debug)]
struct Shape {
    cells: usize,
    /// rows and columns of the smallest square holding the shape in any orientation
    side: usize,
    orientations: ArrayVec<Orientation, 8>,
}

impl Shape {
    fn new(rows: &[&str]) -> Result<Shape> {
        let mut cells = rows.iter().enumerate().flat_map(|(r, row)|
            row.bytes().positions(|c| c == b'#').map(move |c| (r as isize, c as isize))
        ).collect_vec();
        ensure!(!cells.is_empty(), "shape has no cells");

        let mut orientations = ArrayVec::<Orientation, 8>::new();
        for flip in 0 .. 2 {
            for _ in 0 .. 4 {
                let orientation = normalize(&cells);
                if !orientations.contains(&orientation) {orientations.push(orientation)}
                cells.iter_mut().for_each(|(r, c)| (*r, *c) = (*c, -*r));
            }
            if flip == 0 {cells.iter_mut().for_each(|(_, c)| *c = -*c)}
        }

        let extent = |axis: fn(&(isize, isize)) -> isize| match cells.iter().map(axis).minmax() {
            itertools::MinMaxResult::MinMax(lo, hi) => (hi - lo + 1) as usize,
            _ => 1,
        };
        let side = extent(|cell| cell.0).max(extent(|cell| cell.1));
        Ok(Shape {cells: cells.len(), side, orientations})
    }
}

fn normalize(cells: &[(isize, isize)]) -> Orientation {
    let mut cells = cells.to_vec();
    cells.sort_unstable();
    let (r0, c0) = cells[0];
    cells.iter().map(|&(r, c)| (r - r0, c - c0)).collect()
}

#[derive(Debug, PartialEq, Eq)]
struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

fn parse(input: &str) -> Result<(Vec<Shape>, Vec<Region>)> {
    let shape_header = Regex::new(r"^(\d+):$")?;
    let region_line = Regex::new(r"^(\d+)x(\d+):((?:\s+\d+)*)$")?;
    let mut shapes: Vec<Vec<&str>> = vec![];
    let mut regions = vec![];
    for line in input.lines().map(str::trim) {
        if let Some(m) = region_line.captures(line) {
            regions.push(Region {
                width: m[1].parse()?,
                height: m[2].parse()?,
                counts: m[3].split_whitespace().map(str::parse).collect::<Result<_, _>>()?,
            });
        } else if let Some(m) = shape_header.captures(line) {
            let index: usize = m[1].parse()?;
            ensure!(index == shapes.len(), "shape {index} is out of order");
            shapes.push(vec![]);
        } else if !line.is_empty() {
            ensure!(line.bytes().all(|c| c == b'#' || c == b'.'), "cannot parse line {line:?}");
            shapes.last_mut().with_context(|| format!("shape row {line:?} before any shape"))?.push(line);
        }
    }
    let shapes = shapes.iter().map(|rows| Shape::new(rows)).collect::<Result<Vec<_>>>()?;
    for region in &regions {
        ensure!(region.counts.len() <= shapes.len(), "region {}x{} lists unknown shapes", region.width, region.height);
    }
    Ok((shapes, regions))
}

struct Packing<'a> {
    shapes: &'a [Shape],
    width: usize,
    height: usize,
    taken: BitVec,
    left: Vec<usize>,
    nodes: u64,
    budget: u64,
}

impl Packing<'_> {
    fn fits(&self, at: usize, orientation: &Orientation) -> bool {
        let (r0, c0) = ((at / self.width) as isize, (at % self.width) as isize);
        orientation.iter().all(|&(dr, dc)| {
            let (r, c) = (r0 + dr, c0 + dc);
            (0 .. self.height as isize).contains(&r) && (0 .. self.width as isize).contains(&c)
                && !self.taken[r as usize * self.width + c as usize]
        })
    }

    fn mark(&mut self, at: usize, orientation: &Orientation, taken: bool) {
        for &(dr, dc) in orientation {
            let cell = (at as isize + dr * self.width as isize + dc) as usize;
            self.taken.set(cell, taken);
        }
    }

    /// Whether the remaining presents fit from cell `at` on. Gives up (false) once the node budget
    /// is spent; the caller tells the two apart through `nodes`.
    fn search(&mut self, mut at: usize, slack: usize) -> bool {
        if self.nodes >= self.budget {return false}
        self.nodes += 1;
        if self.left.iter().all(|&n| n == 0) {return true}
        while at < self.taken.len() && self.taken[at] {at += 1}
        if at == self.taken.len() {return false}

        for si in 0 .. self.shapes.len() {
            if self.left[si] == 0 {continue}
            let shapes = self.shapes;
            for orientation in &shapes[si].orientations {
                if !self.fits(at, orientation) {continue}
                self.mark(at, orientation, true);
                self.left[si] -= 1;
                let done = self.search(at + 1, slack);
                self.left[si] += 1;
                self.mark(at, orientation, false);
                if done {return true}
                if self.nodes >= self.budget {return false}
            }
        }
        slack > 0 && self.search(at + 1, slack - 1)
    }
}

/// Search nodes spent on one region before it is given up as not fitting.
const NODE_BUDGET: u64 = 2_000_000;
/// Above this many presents the search is skipped and only the spare area is judged.
const MANY_PRESENTS: usize = 80;

/// Whether the presents fit in the region, or `None` when the search ran out of budget.
fn fits(shapes: &[Shape], region: &Region, budget: u64) -> Option<bool> {
    let area = region.width * region.height;
    let needed = region.counts.iter().zip(shapes).map(|(n, shape)| n * shape.cells).sum::<usize>();
    if needed > area {return Some(false)}
    let presents = region.counts.iter().sum::<usize>();
    let side = shapes.iter().map(|shape| shape.side).max().unwrap_or(1);
    if presents <= (region.width / side) * (region.height / side) {return Some(true)}
    if presents > MANY_PRESENTS {
        // the more presents, the more spare room they need to interlock
        let spare = (area - needed) as f64 / needed as f64;
        return Some(spare >= 0.15 + (presents - MANY_PRESENTS) as f64 * 0.001);
    }

    let mut left = region.counts.clone();
    left.resize(shapes.len(), 0);
    // presents turn freely, so scan along the short side; rows stay narrow and dead ends show early
    let mut packing = Packing {
        shapes,
        width: region.width.min(region.height),
        height: region.width.max(region.height),
        taken: bitvec![0; area],
        left,
        nodes: 0,
        budget,
    };
    let found = packing.search(0, area - needed);
    debug!(width = region.width, height = region.height, found, nodes = packing.nodes, "searched region");
    (found || packing.nodes < budget).then_some(found)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part != 1 {return Err(HarnessError::PartUnavailable(12, part).into())}
    let (shapes, regions) = parse(input)?;
    let mut count = 0;
    for region in &regions {
        match fits(&shapes, region, NODE_BUDGET) {
            Some(true) => count += 1,
            Some(false) => (),
            None => warn!(width = region.width, height = region.height, "search budget spent, counting as no fit"),
        }
    }
    info!(regions = regions.len(), fit = count, "checked regions");
    Ok(count.to_string())
}
