// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::ops::RangeInclusive;

use ndarray::Array2;
use rand::Rng;

use crate::error::GameError;
use crate::game::Bimatrix;

/// Payoffs drawn when no range is given.
pub const DEFAULT_PAYOFFS: RangeInclusive<i64> = 1..=10;

impl Bimatrix {
    /// A `rows`×`cols` game with every payoff of both
    /// players drawn independently and uniformly from
    /// `payoffs`.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        payoffs: RangeInclusive<i64>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if payoffs.is_empty() {
            return Err(GameError::EmptyRange {
                low: *payoffs.start(),
                high: *payoffs.end(),
            });
        }
        let mut draw = |_: (usize, usize)| rng.random_range(payoffs.clone());
        let p1 = Array2::from_shape_fn((rows, cols), &mut draw);
        let p2 = Array2::from_shape_fn((rows, cols), &mut draw);
        Bimatrix::from_payoffs(p1, p2)
    }
}
