// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Iterated elimination of dominated strategies.
//!
//! Each pass first finds every dominated row of the row
//! player's payoffs and removes them all at once, then does
//! the same for the columns of the column player's payoffs.
//! Passes repeat until one removes nothing. Within a pass
//! the dominated set is computed against the matrix as it
//! stood when the pass began, so scan order never matters.

use std::fmt::{self, Display, Formatter};

use ndarray::prelude::*;

use crate::game::{Bimatrix, Name, Player};

/// Which dominance relation to eliminate by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dominance {
    /// Worse against every opposing strategy.
    Strict,
    /// Never better, and worse against at least one
    /// opposing strategy.
    Weak,
}

impl Dominance {
    /// Is strategy `a` dominated by strategy `b`? Both are
    /// payoff vectors to the same player, one entry per
    /// opposing strategy.
    pub fn is_dominated(self, a: ArrayView1<i64>, b: ArrayView1<i64>) -> bool {
        if a.is_empty() {
            return false;
        }
        let mut pairs = a.iter().zip(b.iter());
        match self {
            Dominance::Strict => pairs.all(|(x, y)| x < y),
            Dominance::Weak => {
                let mut worse = false;
                for (x, y) in pairs {
                    if x > y {
                        return false;
                    }
                    worse |= x < y;
                }
                worse
            }
        }
    }
}

/// Positions of all strategies of `player` dominated by
/// some other strategy of `player`, in ascending order.
pub fn dominated(game: &Bimatrix, player: Player, mode: Dominance) -> Vec<usize> {
    let lanes: Vec<ArrayView1<i64>> = game.payoffs(player).axis_iter(player.axis()).collect();
    (0..lanes.len())
        .filter(|&i| {
            (0..lanes.len()).any(|k| k != i && mode.is_dominated(lanes[i].view(), lanes[k].view()))
        })
        .collect()
}

/// One batch of strategies removed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// Pass number, starting at 1.
    pub pass: usize,
    pub player: Player,
    pub removed: Vec<Name>,
}

impl Display for Elimination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "pass {}:", self.pass)?;
        for n in &self.removed {
            write!(f, " {}", n)?;
        }
        Ok(())
    }
}

impl Bimatrix {
    /// Eliminate dominated strategies until none remain.
    pub fn reduce(&self, mode: Dominance) -> Bimatrix {
        self.reduce_traced(mode).0
    }

    /// As `reduce()`, also reporting what was removed in
    /// each pass.
    pub fn reduce_traced(&self, mode: Dominance) -> (Bimatrix, Vec<Elimination>) {
        let mut game = self.clone();
        let mut trace = Vec::new();
        for pass in 1.. {
            let mut removed = false;
            for &player in &[Player::Row, Player::Column] {
                let drop = dominated(&game, player, mode);
                if drop.is_empty() {
                    continue;
                }
                let names = &game.names()[player];
                trace.push(Elimination {
                    pass,
                    player,
                    removed: drop.iter().map(|&i| names[i]).collect(),
                });
                game = game.without(player, &drop);
                removed = true;
            }
            if !removed {
                break;
            }
        }
        (game, trace)
    }
}
