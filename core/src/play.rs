use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use cozy_chess::{Color, Square};
use log::info;
use search::EngineConfig;
use uci::move_to_uci;
use utils::{GameBoard, Position};

use crate::engine;

/// Human against engine on stdin/stdout, starting from the initial position.
pub fn run(config: &EngineConfig, human: Color) -> Result<(), Box<dyn Error>> {
    let mut engine = engine::create(config)?;
    let mut game = GameBoard::default();

    println!("{} (you play {})", engine.name(), color_name(human));
    println!("Enter moves like e2e4, a square like e2 to list its moves, or 'quit'.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_game_over() {
            println!("{}", game);
            println!("{}", outcome(&game));
            break;
        }

        if game.side_to_move() != human {
            let mv = engine.best_move(&mut game)?;
            let notation = move_to_uci(game.board(), mv);
            info!("Engine plays {}", notation);
            println!("Engine plays {}", notation);
            game.apply(mv);
            continue;
        }

        println!("{}", game);
        print!("{} to move> ", color_name(human));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            "quit" => break,
            _ if command.len() == 2 => match Square::from_str(command) {
                Ok(square) => println!("{}", moves_from(&game, square).join(" ")),
                Err(_) => println!("Unknown square '{}'", command),
            },
            _ => {
                if let Err(e) = game.play_uci(command) {
                    println!("{}", e);
                }
            }
        }
    }

    Ok(())
}

/// Legal moves of the side to move starting on `square`, in UCI notation.
fn moves_from(game: &GameBoard, square: Square) -> Vec<String> {
    game.legal_moves()
        .into_iter()
        .filter(|mv| mv.from == square)
        .map(|mv| move_to_uci(game.board(), mv))
        .collect()
}

fn outcome(game: &GameBoard) -> String {
    if game.is_checkmate() {
        format!("{} wins by checkmate!", color_name(!game.side_to_move()))
    } else if game.is_stalemate() {
        "Draw by stalemate.".to_string()
    } else {
        "Draw.".to_string()
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
