// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use ndarray::prelude::*;
use tabwriter::TabWriter;

use crate::cell::Cell;
use crate::error::{GameError, ParseError};

/// The two players. The `Row` player (player 1, "A") picks
/// a row of the payoff matrices; the `Column` player
/// (player 2, "B") picks a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Row,
    Column,
}
use Player::*;

impl Player {
    /// Matrix axis along which this player's strategies
    /// are laid out.
    pub fn axis(self) -> Axis {
        match self {
            Row => Axis(0),
            Column => Axis(1),
        }
    }

    fn letter(self) -> char {
        match self {
            Row => 'A',
            Column => 'B',
        }
    }
}

/// The name of a strategy: the player it belongs to and
/// its index in the game as originally parsed. Names
/// survive reduction; positions do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name {
    pub player: Player,
    pub index: usize,
}

/// Names are shown 1-based, `A1` for the first row.
impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.player.letter(), self.index + 1)
    }
}

/// `Labels` name the current rows and columns of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(pub [Vec<Name>; 2]);

impl Labels {
    /// Each strategy named by its own position.
    pub fn identity(rows: usize, cols: usize) -> Self {
        let names = |player, n| -> Vec<Name> {
            (0..n).map(|index| Name { player, index }).collect()
        };
        Labels([names(Row, rows), names(Column, cols)])
    }
}

impl Index<Player> for Labels {
    type Output = Vec<Name>;

    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player as usize]
    }
}

impl IndexMut<Player> for Labels {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.0[player as usize]
    }
}

/// A two-player normal-form game: one payoff matrix per
/// player, both indexed by (row strategy, column strategy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bimatrix {
    p1: Array2<i64>,
    p2: Array2<i64>,
    names: Labels,
}

impl Bimatrix {
    /// Build a game from a rectangular grid of `(a;b)`
    /// cells.
    pub fn parse<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<Self, ParseError> {
        let ncols = match grid.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => return Err(ParseError::Empty),
        };
        let mut cells = Vec::with_capacity(grid.len() * ncols);
        for (row, r) in grid.iter().enumerate() {
            if r.len() != ncols {
                return Err(ParseError::Ragged {
                    row,
                    expected: ncols,
                    found: r.len(),
                });
            }
            for (col, token) in r.iter().enumerate() {
                let cell = token
                    .as_ref()
                    .parse::<Cell>()
                    .map_err(|source| ParseError::Cell { row, col, source })?;
                cells.push(cell);
            }
        }
        let shape = (grid.len(), ncols);
        let p1 = Array2::from_shape_fn(shape, |(i, j)| cells[i * ncols + j].p1);
        let p2 = Array2::from_shape_fn(shape, |(i, j)| cells[i * ncols + j].p2);
        Ok(Bimatrix {
            p1,
            p2,
            names: Labels::identity(shape.0, shape.1),
        })
    }

    /// Take a pair of payoff matrices and make a game.
    pub fn from_payoffs(p1: Array2<i64>, p2: Array2<i64>) -> Result<Self, GameError> {
        if p1.dim() != p2.dim() {
            return Err(GameError::ShapeMismatch {
                p1: p1.dim(),
                p2: p2.dim(),
            });
        }
        let (rows, cols) = p1.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::Empty { rows, cols });
        }
        Ok(Bimatrix {
            p1,
            p2,
            names: Labels::identity(rows, cols),
        })
    }

    /// Number of (rows, columns).
    pub fn dim(&self) -> (usize, usize) {
        self.p1.dim()
    }

    /// Payoffs to the row player.
    pub fn p1(&self) -> &Array2<i64> {
        &self.p1
    }

    /// Payoffs to the column player.
    pub fn p2(&self) -> &Array2<i64> {
        &self.p2
    }

    /// Payoff matrix of the given player.
    pub fn payoffs(&self, player: Player) -> &Array2<i64> {
        match player {
            Row => &self.p1,
            Column => &self.p2,
        }
    }

    /// Original names of the current rows and columns.
    pub fn names(&self) -> &Labels {
        &self.names
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::new(self.p1[(row, col)], self.p2[(row, col)])
    }

    /// Re-encode the game as a grid of `(a;b)` cells, the
    /// inverse of `parse()`.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let (rows, cols) = self.dim();
        (0..rows)
            .map(|i| (0..cols).map(|j| self.cell(i, j).to_string()).collect())
            .collect()
    }

    /// A new game without the listed strategies of
    /// `player`. Indices are current positions; the
    /// surviving names go along with their payoffs.
    pub fn without(&self, player: Player, drop: &[usize]) -> Self {
        let n = self.names[player].len();
        let keep: Vec<usize> = (0..n).filter(|i| !drop.contains(i)).collect();
        let axis = player.axis();
        let mut names = self.names.clone();
        names[player] = keep.iter().map(|&i| self.names[player][i]).collect();
        let game = Bimatrix {
            p1: self.p1.select(axis, &keep),
            p2: self.p2.select(axis, &keep),
            names,
        };
        game.check_shape();
        game
    }

    fn check_shape(&self) {
        let (rows, cols) = self.p1.dim();
        assert_eq!(self.p1.dim(), self.p2.dim(), "payoff shapes diverged");
        assert_eq!(self.names[Row].len(), rows, "row labels diverged");
        assert_eq!(self.names[Column].len(), cols, "column labels diverged");
    }
}

/// Display a `Bimatrix` in tabular format, names along the
/// top and left.
impl Display for Bimatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let write_table = || -> io::Result<Vec<u8>> {
            let mut tf = TabWriter::new(Vec::new()).padding(1);

            for n in self.names[Column].iter() {
                write!(tf, "\t{}", n)?;
            }
            writeln!(tf)?;

            let (rows, cols) = self.dim();
            for r in 0..rows {
                write!(tf, "{}", self.names[Row][r])?;
                for c in 0..cols {
                    write!(tf, "\t{}", self.cell(r, c))?;
                }
                writeln!(tf)?;
            }

            tf.flush()?;
            tf.into_inner()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "table flush"))
        };

        let table = write_table().map_err(|_| fmt::Error)?;
        let table = String::from_utf8(table).map_err(|_| fmt::Error)?;
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse() {
        let g = Bimatrix::parse(&grid(&[&["(3;3)", "(0;5)"], &["(5;0)", "(1;1)"]])).unwrap();
        assert_eq!(g.p1(), &array![[3, 0], [5, 1]]);
        assert_eq!(g.p2(), &array![[3, 5], [0, 1]]);
        assert_eq!(g.names(), &Labels::identity(2, 2));
    }

    #[test]
    fn test_parse_errors() {
        let empty: Vec<Vec<String>> = vec![];
        assert_eq!(Bimatrix::parse(&empty), Err(ParseError::Empty));
        assert_eq!(Bimatrix::parse(&grid(&[&[]])), Err(ParseError::Empty));

        let r = Bimatrix::parse(&grid(&[&["(1;1)", "(2;2)"], &["(3;3)"]]));
        assert_eq!(
            r,
            Err(ParseError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let r = Bimatrix::parse(&grid(&[&["(1;1)", "(2;2)"], &["(3;3)", "3;3"]]));
        assert!(matches!(r, Err(ParseError::Cell { row: 1, col: 1, .. })));
    }

    #[test]
    fn test_from_payoffs() {
        let r = Bimatrix::from_payoffs(array![[1, 2]], array![[1], [2]]);
        assert_eq!(
            r,
            Err(GameError::ShapeMismatch {
                p1: (1, 2),
                p2: (2, 1)
            })
        );
        let r = Bimatrix::from_payoffs(Array2::zeros((0, 3)), Array2::zeros((0, 3)));
        assert_eq!(r, Err(GameError::Empty { rows: 0, cols: 3 }));
    }

    #[test]
    fn test_without() {
        let g = Bimatrix::from_payoffs(
            array![[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            array![[9, 8, 7], [6, 5, 4], [3, 2, 1]],
        )
        .unwrap();
        let g = g.without(Row, &[1]).without(Column, &[0]);
        assert_eq!(g.p1(), &array![[2, 3], [8, 9]]);
        assert_eq!(g.p2(), &array![[8, 7], [2, 1]]);
        let rows: Vec<usize> = g.names()[Row].iter().map(|n| n.index).collect();
        let cols: Vec<usize> = g.names()[Column].iter().map(|n| n.index).collect();
        assert_eq!(rows, vec![0, 2]);
        assert_eq!(cols, vec![1, 2]);
    }

    #[test]
    fn test_display() {
        let g = Bimatrix::parse(&grid(&[&["(3;3)", "(0;5)"], &["(5;0)", "(-1;1)"]])).unwrap();
        let s = g.to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["B1", "B2"]);
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            ["A2", "(5;0)", "(-1;1)"]
        );
    }
}
