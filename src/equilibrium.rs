// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Security values and pure-strategy Nash equilibria.

use std::fmt::{self, Display, Formatter};

use ndarray::prelude::*;

use crate::game::{Bimatrix, Labels, Name, Player};

/// Maximin (security) value of each player, computed on
/// that player's own payoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Security {
    pub p1: i64,
    pub p2: i64,
}

/// A pure strategy profile that is a mutual best response,
/// given as current positions in the game it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equilibrium {
    pub row: usize,
    pub col: usize,
}

impl Equilibrium {
    /// Original strategy names of this profile.
    pub fn names(&self, labels: &Labels) -> (Name, Name) {
        (labels[Player::Row][self.row], labels[Player::Column][self.col])
    }
}

/// Best value of the worst outcome over each lane.
fn maximin(payoffs: ArrayView2<i64>, axis: Axis) -> Option<i64> {
    payoffs
        .axis_iter(axis)
        .filter_map(|lane| lane.iter().min().copied())
        .max()
}

/// Largest entry of each lane.
fn lane_max(payoffs: ArrayView2<i64>, axis: Axis) -> Vec<Option<i64>> {
    payoffs
        .axis_iter(axis)
        .map(|lane| lane.iter().max().copied())
        .collect()
}

impl Bimatrix {
    /// Security values of both players: the row player
    /// maximizes the row minimum of `p1`, the column player
    /// the column minimum of `p2`. `None` only for a game
    /// with no strategies, which the constructors rule out.
    pub fn maximin(&self) -> Option<Security> {
        Some(Security {
            p1: maximin(self.p1().view(), Axis(0))?,
            p2: maximin(self.p2().view(), Axis(1))?,
        })
    }

    /// All pure Nash equilibria in row-major order. Cell
    /// `(i, j)` qualifies when `p1[i, j]` is a maximum of
    /// column `j` of `p1` and `p2[i, j]` is a maximum of row
    /// `i` of `p2`.
    pub fn nash_equilibria(&self) -> Vec<Equilibrium> {
        let best_row = lane_max(self.p1().view(), Axis(1));
        let best_col = lane_max(self.p2().view(), Axis(0));
        self.p1()
            .indexed_iter()
            .filter(|&((i, j), &v)| {
                best_row[j] == Some(v) && best_col[i] == Some(self.p2()[(i, j)])
            })
            .map(|((row, col), _)| Equilibrium { row, col })
            .collect()
    }

    /// Maximin and equilibria together.
    pub fn analyze(&self) -> Analysis {
        Analysis {
            security: self.maximin(),
            equilibria: self.nash_equilibria(),
            names: self.names().clone(),
        }
    }
}

/// Analysis results for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub security: Option<Security>,
    pub equilibria: Vec<Equilibrium>,
    /// Names of the analyzed game's strategies, so that
    /// equilibria can be reported by original name.
    pub names: Labels,
}

impl Display for Analysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.security {
            Some(s) => writeln!(f, "maximin A {} B {}", s.p1, s.p2)?,
            None => writeln!(f, "maximin undefined")?,
        }
        if self.equilibria.is_empty() {
            return writeln!(f, "no pure equilibria");
        }
        write!(f, "nash")?;
        for e in &self.equilibria {
            let (a, b) = e.names(&self.names);
            write!(f, " {},{}", a, b)?;
        }
        writeln!(f)
    }
}
