use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cozy_chess::Color;

#[derive(Parser, Debug)]
#[command(name = "Castellan")]
#[command(author = "Castellan developers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log engine activity to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Plies searched for every move.
    #[arg(short, long, default_value_t = 3)]
    pub depth: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Speak UCI on stdin/stdout (default).
    Uci,

    /// Play a game against the engine in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
    },

    /// Search a fixed set of positions and report timings.
    Bench {
        /// Overrides the global depth.
        #[arg(long)]
        depth: Option<u8>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}
