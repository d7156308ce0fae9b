use std::io;

use ndarray::prelude::*;

use bimatrix::*;

#[cfg(test)]
fn eg_game(cells: &[&[&str]]) -> Bimatrix {
    let grid: Vec<Vec<&str>> = cells.iter().map(|r| r.to_vec()).collect();
    Bimatrix::parse(&grid).unwrap()
}

#[test]
fn test_prisoners_dilemma() {
    let g = eg_game(&[&["(3;3)", "(0;5)"], &["(5;0)", "(1;1)"]]);
    assert_eq!(g.nash_equilibria(), vec![Equilibrium { row: 1, col: 1 }]);
    assert_eq!(g.maximin(), Some(Security { p1: 1, p2: 1 }));
}

#[test]
fn test_coordination() {
    let g = eg_game(&[&["(1;1)", "(0;0)"], &["(0;0)", "(1;1)"]]);
    assert_eq!(
        g.nash_equilibria(),
        vec![Equilibrium { row: 0, col: 0 }, Equilibrium { row: 1, col: 1 }]
    );
    assert_eq!(g.reduce(Dominance::Weak), g);
}

#[test]
fn test_strict_dominance() {
    let g = eg_game(&[&["(5;0)", "(5;0)"], &["(1;0)", "(1;0)"]]);
    let r = g.reduce(Dominance::Strict);
    assert_eq!(r.dim(), (1, 2));
    assert_eq!(r.p1(), &array![[5, 5]]);
    assert_eq!(r.names()[Player::Row][0].index, 0);
}

#[test]
fn test_weak_dominance() {
    let g = eg_game(&[&["(5;0)", "(5;0)"], &["(5;0)", "(1;0)"]]);
    assert_eq!(g.reduce(Dominance::Strict).dim(), (2, 2));
    let r = g.reduce(Dominance::Weak);
    assert_eq!(r.dim(), (1, 2));
    assert_eq!(r.p1(), &array![[5, 5]]);
}

#[test]
fn test_malformed() {
    let grid = vec![vec!["(1;1)", "3;3"]];
    match Bimatrix::parse(&grid) {
        Err(ParseError::Cell {
            row: 0,
            col: 1,
            source: CellError::Syntax(t),
        }) => assert_eq!(t, "3;3"),
        r => panic!("unexpected {:?}", r),
    }
}

#[test]
fn test_prisoners_dilemma_reduces() {
    // Defection strictly dominates for both: one pass per
    // player leaves only (A2, B2).
    let g = eg_game(&[&["(3;3)", "(0;5)"], &["(5;0)", "(1;1)"]]);
    let (r, trace) = g.reduce_traced(Dominance::Strict);
    assert_eq!(r.to_grid(), vec![vec!["(1;1)"]]);
    assert_eq!(trace.len(), 2);
    let (a, b) = r.nash_equilibria()[0].names(r.names());
    assert_eq!((a.to_string(), b.to_string()), ("A2".to_string(), "B2".to_string()));
}

#[test]
fn test_grid_round_trip() {
    let text = "(3;-3),(0;5),(2;2)\n(5;0),(1;1),(-4;7)\n";
    let g = Bimatrix::parse(&read_grid(io::Cursor::new(text)).unwrap()).unwrap();
    assert_eq!(g.dim(), (2, 3));
    let mut out = Vec::new();
    write_grid(&mut out, &g).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), text);
}

#[test]
fn test_blank_cells() {
    let f = io::Cursor::new("(2;1),\n,(1;2)\n");
    let g = Bimatrix::parse(&read_grid(f).unwrap()).unwrap();
    assert_eq!(g.p1(), &array![[2, 0], [0, 1]]);
    assert_eq!(g.p2(), &array![[1, 0], [0, 2]]);
}

#[test]
fn test_ragged_file() {
    let f = io::Cursor::new("(1;1),(2;2)\n(3;3)\n");
    let r = Bimatrix::parse(&read_grid(f).unwrap());
    assert_eq!(
        r,
        Err(ParseError::Ragged {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_reduced_analysis() {
    // 3x3 game whose weak reduction leaves a single cell.
    let g = eg_game(&[
        &["(2;1)", "(1;1)", "(0;0)"],
        &["(2;2)", "(3;3)", "(1;1)"],
        &["(1;0)", "(0;1)", "(0;2)"],
    ]);
    let r = g.reduce(Dominance::Weak);
    let names: Vec<String> = r.names()[Player::Row]
        .iter()
        .chain(r.names()[Player::Column].iter())
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, ["A2", "B2"]);
    assert_eq!(r.analyze().to_string(), "maximin A 3 B 3\nnash A2,B2\n");
}
