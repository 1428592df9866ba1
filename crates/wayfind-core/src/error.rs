//! Errors raised while building grids and layouts.

use std::fmt;

use crate::geom::Point;

/// Which kind of input an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Finish,
    Obstacle,
    Weighted,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
            Self::Obstacle => f.write_str("obstacle"),
            Self::Weighted => f.write_str("weighted cell"),
        }
    }
}

/// Caller-contract violations detected when a grid or layout is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    EmptyGrid { width: i32, height: i32 },
    /// The board has a single cell, leaving no room for distinct endpoints.
    TooFewCells { width: i32, height: i32 },
    /// A position lies outside the board.
    OutOfBounds { what: Role, pos: Point },
    /// Start and finish share a position.
    SameEndpoints(Point),
    /// An endpoint is also marked as an obstacle.
    EndpointIsObstacle { what: Role, pos: Point },
    /// A per-cell weight is negative.
    NegativeWeight { pos: Point, weight: i32 },
    /// `width × height × weight` does not fit the `i64` cost range, so a
    /// path cost could reach the unreached sentinel.
    CostOverflow { width: i32, height: i32, weight: i32 },
    /// ASCII layout rows have different widths.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// ASCII layout contains a character with no meaning.
    InvalidChar { ch: char, pos: Point },
    /// ASCII layout has zero or several cells for one endpoint.
    EndpointCount { what: Role, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have positive size, got {width}x{height}")
            }
            Self::TooFewCells { width, height } => {
                write!(f, "a {width}x{height} grid has no room for distinct start and finish")
            }
            Self::OutOfBounds { what, pos } => write!(f, "{what} {pos} is outside the grid"),
            Self::SameEndpoints(pos) => write!(f, "start and finish both at {pos}"),
            Self::EndpointIsObstacle { what, pos } => write!(f, "{what} {pos} is an obstacle"),
            Self::NegativeWeight { pos, weight } => {
                write!(f, "cell {pos} has negative weight {weight}")
            }
            Self::CostOverflow {
                width,
                height,
                weight,
            } => write!(f, "weight {weight} on a {width}x{height} grid overflows path costs"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "layout row {row} has width {found}, expected {expected}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::EndpointCount { what, found } => {
                write!(f, "layout must contain exactly one {what}, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = GridError::EndpointIsObstacle {
            what: Role::Finish,
            pos: Point::new(2, 0),
        };
        assert_eq!(e.to_string(), "finish (2, 0) is an obstacle");
        let e = GridError::EmptyGrid {
            width: 0,
            height: 4,
        };
        assert_eq!(e.to_string(), "grid must have positive size, got 0x4");
        let e = GridError::TooFewCells {
            width: 1,
            height: 1,
        };
        assert_eq!(e.to_string(), "a 1x1 grid has no room for distinct start and finish");
    }
}
