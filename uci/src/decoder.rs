use std::str::FromStr;

use cozy_chess::Board;

use super::commands::{GoParams, UciInput};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        match input {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,

            _ if input.starts_with("position") => self.decode_position(input),
            _ if input.starts_with("go") => self.decode_go(input),
            _ if input.starts_with("setoption") => self.decode_setoption(input),
            _ if input.starts_with("stop") => UciInput::Stop,
            _ if input.starts_with("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    fn decode_position(&self, input: &str) -> UciInput {
        let (setup, moves) = match input.split_once(" moves") {
            Some((setup, moves)) => (setup, moves),
            None => (input, ""),
        };

        let board = match setup.split_once("fen") {
            Some((_, fen)) => match Board::from_str(fen.trim()) {
                Ok(board) => board,
                Err(_) => return UciInput::Unknown(input.to_string()),
            },
            None if setup.contains("startpos") => Board::default(),
            None => return UciInput::Unknown(input.to_string()),
        };

        // Moves are validated when they are played onto the board
        let moves = moves.split_whitespace().map(str::to_string).collect();

        UciInput::Position { board, moves }
    }

    fn decode_setoption(&self, input: &str) -> UciInput {
        // Parse: setoption name <name> [value <value>]
        let Some(rest) = input.strip_prefix("setoption name ") else {
            return UciInput::SetOption {
                name: String::new(),
                value: String::new(),
            };
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> UciInput {
        UciInput::Go(GoParams {
            depth: extract_numeric_param(input, "depth")
                .and_then(|d| u8::try_from(d).ok()),
        })
    }
}

fn extract_numeric_param(input: &str, param: &str) -> Option<u64> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}
