// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Analyze a two-player bimatrix (normal-form) game: one
//! payoff matrix per player, rows being the strategies of
//! the first player ("A") and columns the strategies of the
//! second ("B"). Unlike a zero-sum game, each cell carries
//! a separate payoff for each player, written `(a;b)`.
//!
//! Three analyses are provided, all restricted to pure
//! strategies:
//!
//! * Iterated elimination of strictly or weakly dominated
//!   strategies: `Bimatrix::reduce()`.
//! * The maximin (security) value of each player, computed
//!   on that player's own payoffs: `Bimatrix::maximin()`.
//! * Enumeration of pure Nash equilibria:
//!   `Bimatrix::nash_equilibria()`.
//!
//! Reduction renumbers the surviving strategies. Each
//! strategy carries its original `Name` through every
//! reduction, so results on a reduced game can still be
//! reported in terms of the game as given.
//!
//! # Examples
//!
//! The Prisoner's Dilemma. Each prisoner may stay quiet
//! (first strategy) or defect (second).
//!
//! ```text,no_run
//!         B1     B2
//!     A1  (3;3)  (0;5)
//!     A2  (5;0)  (1;1)
//! ```
//!
//! Defecting is better for either prisoner whatever the
//! other does, so mutual defection is the only equilibrium
//! and both players can guarantee themselves 1.
//!
//! ```
//! use bimatrix::*;
//!
//! let grid = vec![
//!     vec!["(3;3)", "(0;5)"],
//!     vec!["(5;0)", "(1;1)"],
//! ];
//! let game = Bimatrix::parse(&grid).unwrap();
//! assert_eq!(game.nash_equilibria(), vec![Equilibrium { row: 1, col: 1 }]);
//! assert_eq!(game.maximin(), Some(Security { p1: 1, p2: 1 }));
//!
//! let reduced = game.reduce(Dominance::Strict);
//! assert_eq!(reduced.dim(), (1, 1));
//! print!("{}", reduced.analyze());
//! ```
//!
//! The output should look like this:
//!
//! ```text,no_run
//!     maximin A 1 B 1
//!     nash A2,B2
//! ```

mod cell;
mod dominance;
mod equilibrium;
mod error;
mod game;
mod grid;
mod random;

pub use ndarray;

pub use cell::Cell;
pub use dominance::{dominated, Dominance, Elimination};
pub use equilibrium::{Analysis, Equilibrium, Security};
pub use error::{CellError, GameError, ParseError};
pub use game::{Bimatrix, Labels, Name, Player};
pub use grid::{read_grid, write_grid, BLANK_CELL};
pub use random::DEFAULT_PAYOFFS;
