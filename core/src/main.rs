mod args;
mod bench;
mod engine;
mod play;

use args::{Args, Command};
use clap::Parser;
use cozy_chess::{Board, Color, Move};
use log::{debug, warn, LevelFilter};
use search::{EngineConfig, SearchError, SearchReport};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use uci::commands::{GoParams, Info};
use uci::{move_to_uci, UciConnection, UciInput, UciOutput, NULL_MOVE};
use utils::{GameBoard, Position};

const ENGINE_NAME: &str = "Castellan";
const ENGINE_AUTHOR: &str = "Castellan developers";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let config = EngineConfig::with_depth(args.depth)?;

    match args.command.unwrap_or(Command::Uci) {
        Command::Uci => run_uci(config),
        Command::Play { color } => play::run(&config, color.into()),
        Command::Bench { depth } => bench::run(depth.unwrap_or(args.depth)),
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

fn run_uci(mut config: EngineConfig) -> Result<(), Box<dyn Error>> {
    let uci = UciConnection::new();

    let mut engine = engine::create(&config)?;
    let mut position = GameBoard::default();

    uci.listen(|input, output| {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(ENGINE_NAME.to_string()))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;

                config.to_uci(&output)?;

                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = config.update_from_uci(name, value) {
                    debug!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);

                    engine = engine::create(&config)?;
                }
            }
            UciInput::UciNewGame => {
                position = GameBoard::default();
            }
            UciInput::Position { board, moves } => {
                position = setup_position(board.clone(), moves);
            }
            UciInput::Go(params) => {
                let report = match requested_depth(params) {
                    Some(depth) => {
                        engine::create(&EngineConfig::with_depth(depth)?)?.analyse(&mut position)
                    }
                    None => engine.analyse(&mut position),
                };

                match report {
                    Ok(report) => {
                        let best_move = move_to_uci(position.board(), report.best_move);
                        let info = search_info(&position, &report, &best_move);
                        output.send(UciOutput::Info(info))?;
                        output.send(UciOutput::BestMove(best_move))?;
                    }
                    Err(SearchError::NoMoveAvailable) => {
                        output.send(UciOutput::BestMove(NULL_MOVE.to_string()))?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            UciInput::Stop => {
                // Searches run to completion before the next command is read
                debug!("Nothing to stop");
            }
            UciInput::Quit => {}
            UciInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
            }
        }
        Ok(())
    })?;

    Ok(())
}

/// Plays `moves` onto `board`, stopping at the first one that is not legal.
fn setup_position(board: Board, moves: &[String]) -> GameBoard {
    let mut position = GameBoard::new(board);

    for mv in moves {
        if let Err(e) = position.play_uci(mv) {
            warn!("Ignoring remaining moves: {}", e);
            break;
        }
    }

    position
}

fn requested_depth(params: &GoParams) -> Option<u8> {
    params.depth.filter(|&depth| depth > 0)
}

fn search_info(
    position: &GameBoard,
    report: &SearchReport<Move>,
    best_move: &str,
) -> Info {
    let millis = report.elapsed.as_millis() as u64;

    // Scores are White-positive internally; UCI reports them for the side to move
    let score = match position.side_to_move() {
        Color::White => report.score,
        Color::Black => -report.score,
    };

    Info {
        depth: report.depth,
        nodes: report.nodes,
        nodes_per_second: report.nodes * 1000 / millis.max(1),
        time: millis,
        pv: vec![best_move.to_string()],
        score,
    }
}
