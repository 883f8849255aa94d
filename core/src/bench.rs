use std::error::Error;
use std::time::Duration;

use search::{EngineConfig, SearchError};
use uci::move_to_uci;
use utils::GameBoard;

use crate::engine;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn run(depth: u8) -> Result<(), Box<dyn Error>> {
    let config = EngineConfig::with_depth(depth)?;
    let mut engine = engine::create(&config)?;

    println!("Running benchmark: {}\n", engine.name());

    let mut total_nodes = 0;
    let mut total_time = Duration::ZERO;

    for fen in POSITIONS {
        let mut position = GameBoard::from_fen(fen)?;

        match engine.analyse(&mut position) {
            Ok(report) => {
                println!(
                    "{}\n  bestmove {} score {} nodes {} time {} ms",
                    fen,
                    move_to_uci(position.board(), report.best_move),
                    report.score,
                    report.nodes,
                    report.elapsed.as_millis()
                );
                total_nodes += report.nodes;
                total_time += report.elapsed;
            }
            Err(SearchError::NoMoveAvailable) => println!("{}\n  no move", fen),
            Err(e) => return Err(e.into()),
        }
    }

    let millis = total_time.as_millis().max(1) as u64;

    println!("\n=== Benchmark Summary ===");
    println!("Nodes: {}", total_nodes);
    println!("NPS: {}", total_nodes * 1000 / millis);
    println!("Time: {} ms", total_time.as_millis());

    Ok(())
}
