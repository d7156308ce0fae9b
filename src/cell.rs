// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! A single payoff cell `(a;b)`: player 1 gets `a`, player 2
//! gets `b`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CellError;

static CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([+-]?[0-9]+);([+-]?[0-9]+)\)$").expect("cell pattern")
});

/// Payoffs to both players for one strategy pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub p1: i64,
    pub p2: i64,
}

impl Cell {
    pub fn new(p1: i64, p2: i64) -> Self {
        Cell { p1, p2 }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.p1, self.p2)
    }
}

impl FromStr for Cell {
    type Err = CellError;

    /// Parse `(a;b)`. Whitespace around the whole token is
    /// ignored; whitespace inside it is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let caps = CELL
            .captures(token)
            .ok_or_else(|| CellError::Syntax(token.to_string()))?;
        let payoff = |i: usize| -> Result<i64, CellError> {
            let t = &caps[i];
            t.parse().map_err(|source| CellError::Payoff {
                token: t.to_string(),
                source,
            })
        };
        Ok(Cell {
            p1: payoff(1)?,
            p2: payoff(2)?,
        })
    }
}
