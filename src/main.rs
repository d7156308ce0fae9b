// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::fs::File;
use std::io::{stdin, stdout, Read, Write};
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use bimatrix::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Remove strategies worse against every opponent strategy
    Strict,
    /// Also remove strategies never better and sometimes worse
    Weak,
}

impl From<Mode> for Dominance {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Strict => Dominance::Strict,
            Mode::Weak => Dominance::Weak,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the security value of each player
    Maximin,
    /// Print all pure Nash equilibria
    Nash,
    /// Eliminate dominated strategies and print the reduced grid
    Reduce {
        #[arg(long, value_enum, default_value_t = Mode::Weak)]
        mode: Mode,
    },
    /// Print the game together with maximin and equilibria
    Analyze {
        /// Eliminate dominated strategies first
        #[arg(long)]
        reduce: bool,
        #[arg(long, value_enum, default_value_t = Mode::Weak)]
        mode: Mode,
    },
    /// Print a game with random payoffs
    Generate {
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        /// Smallest payoff
        #[arg(
            long,
            default_value_t = *DEFAULT_PAYOFFS.start(),
            allow_hyphen_values = true
        )]
        min: i64,
        /// Largest payoff
        #[arg(
            long,
            default_value_t = *DEFAULT_PAYOFFS.end(),
            allow_hyphen_values = true
        )]
        max: i64,
        /// Random seed, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Parser)]
#[command(name = "bimatrix", version)]
#[command(about = "Dominance, maximin and pure Nash equilibria of bimatrix games")]
struct Args {
    /// Comma-separated grid of (a;b) cells; standard input if absent
    #[arg(long, global = true, env = "BIMATRIX_INPUT")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Read the game from `input`, or from `stdin` if there is
/// no input file.
fn read_game<R: Read>(input: Option<&PathBuf>, stdin: R) -> Result<Bimatrix> {
    let grid = match input {
        Some(path) => {
            info!("reading game from {}", path.display());
            let f = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            read_grid(f)
        }
        None => {
            info!("reading game from standard input");
            read_grid(stdin)
        }
    }
    .context("could not read payoff grid")?;
    let game = Bimatrix::parse(&grid).context("could not parse payoff grid")?;
    info!("game is {}x{}", game.dim().0, game.dim().1);
    Ok(game)
}

fn reduce(game: &Bimatrix, mode: Mode) -> Bimatrix {
    let (reduced, trace) = game.reduce_traced(mode.into());
    for e in &trace {
        debug!("{:?} {}", e.player, e);
    }
    info!(
        "reduced {}x{} to {}x{} in {} eliminations",
        game.dim().0,
        game.dim().1,
        reduced.dim().0,
        reduced.dim().1,
        trace.len(),
    );
    reduced
}

/// Run one subcommand, reading the game from `stdin` unless
/// an input file is given and writing results to `out`.
fn run<R: Read, W: Write>(args: Args, stdin: R, mut out: W) -> Result<()> {
    let input = args.input.as_ref();
    match args.command {
        Command::Maximin => match read_game(input, stdin)?.maximin() {
            Some(s) => writeln!(out, "A {}\nB {}", s.p1, s.p2)?,
            None => writeln!(out, "undefined")?,
        },
        Command::Nash => {
            let game = read_game(input, stdin)?;
            let eqs = game.nash_equilibria();
            if eqs.is_empty() {
                writeln!(out, "no pure equilibria")?;
            }
            for e in eqs {
                let (a, b) = e.names(game.names());
                writeln!(out, "{} {}", a, b)?;
            }
        }
        Command::Reduce { mode } => {
            let game = reduce(&read_game(input, stdin)?, mode);
            let names = game.names();
            info!(
                "surviving: {}",
                names[Player::Row]
                    .iter()
                    .chain(names[Player::Column].iter())
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            write_grid(&mut out, &game).context("could not write grid")?;
        }
        Command::Analyze { reduce: r, mode } => {
            let mut game = read_game(input, stdin)?;
            if r {
                game = reduce(&game, mode);
            }
            write!(out, "{}{}", game, game.analyze())?;
        }
        Command::Generate {
            rows,
            cols,
            min,
            max,
            seed,
        } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_os_rng(),
            };
            let game = Bimatrix::random(rows, cols, min..=max, &mut rng)?;
            write_grid(&mut out, &game).context("could not write grid")?;
        }
    }
    Ok(())
}

/// One-line error report, causes included.
fn report(e: &anyhow::Error) -> String {
    format!("bimatrix: {:#}", e)
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse(), stdin().lock(), stdout().lock()) {
        eprintln!("{}", report(&e));
        exit(1);
    }
}
