//! Editable board description.
//!
//! A [`Layout`] is what an interactive editor manipulates: board size,
//! endpoint positions, walls and optional per-cell weights. It carries no
//! search state. Every run builds a fresh [`Grid`] from it via
//! [`Layout::build`].

use std::collections::BTreeSet;

use rand::{Rng, RngExt};

use crate::error::{GridError, Role};
use crate::geom::{Point, Range};
use crate::grid::{Grid, build_weighted_grid};

pub const DEFAULT_WIDTH: i32 = 50;
pub const DEFAULT_HEIGHT: i32 = 20;
pub const MIN_WIDTH: i32 = 10;
pub const MAX_WIDTH: i32 = 70;
pub const MIN_HEIGHT: i32 = 10;
pub const MAX_HEIGHT: i32 = 30;

/// Board size, endpoints, walls and weights.
///
/// Invariants: start and finish are distinct, in bounds, and never walls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LayoutData"))]
pub struct Layout {
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
    walls: BTreeSet<Point>,
    /// Sorted by position, no zero weights.
    weights: Vec<(Point, i32)>,
}

impl Default for Layout {
    /// The default 50×20 board with endpoints on the middle row.
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: Point::new(DEFAULT_WIDTH / 5, DEFAULT_HEIGHT / 2),
            finish: Point::new(DEFAULT_WIDTH * 4 / 5, DEFAULT_HEIGHT / 2),
            walls: BTreeSet::new(),
            weights: Vec::new(),
        }
    }
}

impl Layout {
    /// An empty board with the given endpoints.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let bounds = Range::sized(width, height);
        if !bounds.contains(start) {
            return Err(GridError::OutOfBounds {
                what: Role::Start,
                pos: start,
            });
        }
        if !bounds.contains(finish) {
            return Err(GridError::OutOfBounds {
                what: Role::Finish,
                pos: finish,
            });
        }
        if start == finish {
            return Err(GridError::SameEndpoints(start));
        }
        Ok(Self {
            width,
            height,
            start,
            finish,
            walls: BTreeSet::new(),
            weights: Vec::new(),
        })
    }

    /// An empty board with start and finish at distinct random positions.
    pub fn random(width: i32, height: i32, rng: &mut impl Rng) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let bounds = Range::sized(width, height);
        if bounds.len() < 2 {
            return Err(GridError::TooFewCells { width, height });
        }
        let (start, finish) = distinct_endpoints(bounds, rng);
        Self::new(width, height, start, finish)
    }

    /// A new random board at the requested size, clamped to the editor's
    /// limits. Walls and weights are not carried over.
    pub fn resized(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        let height = height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        let (start, finish) = distinct_endpoints(Range::sized(width, height), rng);
        Self {
            width,
            height,
            start,
            finish,
            walls: BTreeSet::new(),
            weights: Vec::new(),
        }
    }

    /// Parse an ASCII board.
    ///
    /// `S` start, `F` finish, `#` wall, `.` open, `1`–`9` weighted open
    /// cell. Surrounding whitespace is trimmed; every row must have the same
    /// width.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut height = 0;
        let mut starts = Vec::new();
        let mut finishes = Vec::new();
        let mut walls = BTreeSet::new();
        let mut weights = Vec::new();

        for (y, line) in text.trim().lines().enumerate() {
            let line = line.trim();
            let w = line.chars().count();
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::RaggedRows {
                        row: y,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    'S' => starts.push(p),
                    'F' => finishes.push(p),
                    '#' => {
                        walls.insert(p);
                    }
                    '.' => {}
                    '1'..='9' => weights.push((p, ch as i32 - '0' as i32)),
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
            }
            height += 1;
        }

        if starts.len() != 1 {
            return Err(GridError::EndpointCount {
                what: Role::Start,
                found: starts.len(),
            });
        }
        if finishes.len() != 1 {
            return Err(GridError::EndpointCount {
                what: Role::Finish,
                found: finishes.len(),
            });
        }

        let mut layout = Self::new(width.unwrap_or(0) as i32, height, starts[0], finishes[0])?;
        layout.walls = walls;
        // Rows are scanned in row-major order, so `weights` is already sorted.
        layout.weights = weights;
        Ok(layout)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Wall positions in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls.iter().copied()
    }

    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.contains(&p)
    }

    /// Explicit weight at `p`; `0` when unweighted.
    pub fn weight(&self, p: Point) -> i32 {
        match self.weights.binary_search_by(|(q, _)| q.cmp(&p)) {
            Ok(i) => self.weights[i].1,
            Err(_) => 0,
        }
    }

    /// Flip the wall state of `p`.
    ///
    /// Returns `false` (and changes nothing) if `p` is out of bounds or one
    /// of the endpoints.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        if !self.bounds().contains(p) || p == self.start || p == self.finish {
            log::debug!("wall toggle at {p} rejected");
            return false;
        }
        if !self.walls.remove(&p) {
            self.walls.insert(p);
        }
        true
    }

    /// Drag the start to `p`, removing any wall there.
    ///
    /// Rejected when `p` is out of bounds or the finish.
    pub fn move_start(&mut self, p: Point) -> bool {
        if !self.bounds().contains(p) || p == self.finish {
            log::debug!("start move to {p} rejected");
            return false;
        }
        self.walls.remove(&p);
        self.start = p;
        true
    }

    /// Drag the finish to `p`, removing any wall there.
    ///
    /// Rejected when `p` is out of bounds or the start.
    pub fn move_finish(&mut self, p: Point) -> bool {
        if !self.bounds().contains(p) || p == self.start {
            log::debug!("finish move to {p} rejected");
            return false;
        }
        self.walls.remove(&p);
        self.finish = p;
        true
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Set the opt-in weight of `p`. `0` restores unit cost.
    pub fn set_weight(&mut self, p: Point, weight: i32) -> Result<(), GridError> {
        if !self.bounds().contains(p) {
            return Err(GridError::OutOfBounds {
                what: Role::Weighted,
                pos: p,
            });
        }
        if weight < 0 {
            return Err(GridError::NegativeWeight { pos: p, weight });
        }
        put_weight(&mut self.weights, p, weight);
        Ok(())
    }

    /// Build a fresh grid snapshot for one search run.
    pub fn build(&self) -> Result<Grid, GridError> {
        build_weighted_grid(
            self.width,
            self.height,
            self.start,
            self.finish,
            self.walls.iter().copied(),
            self.weights.iter().copied(),
        )
    }
}

/// Two distinct uniformly random positions. `bounds` must hold at least
/// two cells.
fn distinct_endpoints(bounds: Range, rng: &mut impl Rng) -> (Point, Point) {
    let n = bounds.len();
    let s = rng.random_range(0..n);
    // Draw from the n-1 remaining cells, skipping over `s`.
    let mut f = rng.random_range(0..n - 1);
    if f >= s {
        f += 1;
    }
    (bounds.point_at(s), bounds.point_at(f))
}

/// Insert, replace or (for `0`) remove the weight at `p`, keeping `weights`
/// sorted by position.
fn put_weight(weights: &mut Vec<(Point, i32)>, p: Point, weight: i32) {
    match weights.binary_search_by(|(q, _)| q.cmp(&p)) {
        Ok(i) if weight == 0 => {
            weights.remove(i);
        }
        Ok(i) => weights[i].1 = weight,
        Err(_) if weight == 0 => {}
        Err(i) => weights.insert(i, (p, weight)),
    }
}

/// Deserialized form of [`Layout`]; weights may arrive in any order.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LayoutData {
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
    walls: BTreeSet<Point>,
    weights: Vec<(Point, i32)>,
}

#[cfg(feature = "serde")]
impl From<LayoutData> for Layout {
    /// Later entries for the same position win, as with repeated
    /// [`Layout::set_weight`] calls.
    fn from(data: LayoutData) -> Self {
        let mut weights = Vec::with_capacity(data.weights.len());
        for (p, w) in data.weights {
            put_weight(&mut weights, p, w);
        }
        Self {
            width: data.width,
            height: data.height,
            start: data.start,
            finish: data.finish,
            walls: data.walls,
            weights,
        }
    }
}
