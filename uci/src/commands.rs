use cozy_chess::Board;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    Position {
        board: Board,
        /// Moves played from `board`, in UCI notation, not yet validated.
        moves: Vec<String>,
    },
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Info(Info),
    Option(String),
}

#[derive(Debug, Default)]
pub struct Info {
    pub depth: u8,
    pub nodes: u64,
    pub nodes_per_second: u64,
    pub time: u64,
    pub pv: Vec<String>,
    /// Centipawns from the point of view of the side to move.
    pub score: i32,
}

#[derive(Debug, Default)]
pub struct GoParams {
    // Search depth ply only.
    pub depth: Option<u8>,
}
