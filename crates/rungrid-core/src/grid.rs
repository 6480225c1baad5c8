//! The [`CostGrid`] type — an immutable rectangular grid of entry costs.
//!
//! Each cell holds the cost of *entering* that cell. The grid is built once
//! (from digit lines or explicit rows) and is read-only thereafter.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;

/// An immutable rectangular grid of non-negative entry costs.
///
/// Invariant: `width > 0`, `height > 0`, and storage holds exactly
/// `width * height` costs in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<u32>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Parse a grid from text: one line per row, each character an ASCII
    /// digit `0`–`9`.
    ///
    /// Rejects empty input, ragged rows, and non-digit characters.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut costs = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        for (row, line) in input.lines().enumerate() {
            let start = costs.len();
            for ch in line.chars() {
                let cost = ch.to_digit(10).ok_or(GridError::NonDigit { row, ch })?;
                costs.push(cost);
            }
            let got = costs.len() - start;
            if row == 0 {
                width = got;
            } else if got != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            height = row + 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            costs,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Build a grid from explicit rows of costs.
    ///
    /// Unlike [`parse`](Self::parse), costs are not restricted to single
    /// digits; any `u32` is accepted.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let mut costs = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    got: r.len(),
                });
            }
            costs.extend(r);
        }

        Ok(Self {
            costs,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + p.x as usize)
        } else {
            None
        }
    }

    /// Entry cost of the cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| self.costs[i])
    }

    /// Entry cost of the cell at `p`.
    ///
    /// Errors with [`GridError::OutOfBounds`] if `p` is outside
    /// `[0, width) × [0, height)`.
    pub fn cost_at(&self, p: Point) -> Result<u32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
