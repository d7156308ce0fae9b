// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Games as comma-separated text: one line per row, one
//! `(a;b)` cell per field.

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::game::Bimatrix;

/// What an empty field stands for.
pub const BLANK_CELL: &str = "(0;0)";

/// Read a grid of cell tokens. Blank lines are skipped and
/// fields are trimmed; shape and syntax are left to
/// `Bimatrix::parse()`.
pub fn read_grid<T: Read>(r: T) -> io::Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for line in BufReader::new(r).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|f| match f.trim() {
                "" => BLANK_CELL.to_string(),
                t => t.to_string(),
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Write `game` in the form `read_grid()` reads.
pub fn write_grid<W: Write>(mut w: W, game: &Bimatrix) -> io::Result<()> {
    for row in game.to_grid() {
        writeln!(w, "{}", row.join(","))?;
    }
    Ok(())
}
