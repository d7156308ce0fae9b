// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Errors reported while building or parsing a game.

use std::num::ParseIntError;

use thiserror::Error;

/// A textual grid could not be turned into payoff matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grid has no rows, or its first row has no cells.
    #[error("empty payoff grid")]
    Empty,

    /// A row has a different number of cells than the first row.
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell could not be read.
    #[error("row {row}, column {col}")]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: CellError,
    },
}

/// A single `(a;b)` token is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// The token is not two integers inside one pair of parentheses.
    #[error("malformed cell {0:?}, expected (a;b)")]
    Syntax(String),

    /// A payoff is syntactically an integer but does not fit.
    #[error("bad payoff {token:?}")]
    Payoff {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// A game could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The two payoff matrices disagree in shape.
    #[error("payoff shapes differ: {p1:?} vs {p2:?}")]
    ShapeMismatch {
        p1: (usize, usize),
        p2: (usize, usize),
    },

    /// A player would have no strategies.
    #[error("game must have at least one strategy per player, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    /// A payoff range with no values in it.
    #[error("empty payoff range {low}..={high}")]
    EmptyRange { low: i64, high: i64 },
}
