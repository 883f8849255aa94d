use std::time::{Duration, Instant};

use evaluation::{Evaluator, Score};
use log::info;
use utils::Position;

use crate::{EngineConfig, SearchError};

mod guard;
mod perspective;
mod search;

use perspective::Perspective;

/// Outcome of a completed search from the root position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<M> {
    pub best_move: M,
    /// Minimax score of `best_move`, White-positive.
    pub score: Score,
    pub depth: u8,
    /// Positions handed to the evaluator.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Fixed-depth minimax searcher.
///
/// The position is mutated in place during a search and restored before
/// every return, so one engine must not search the same position from
/// several threads at once.
pub struct Engine<P: Position> {
    /// Configuration for the engine, fixed at construction
    config: EngineConfig,

    /// Static evaluation used at cutoff and terminal nodes
    evaluator: Box<dyn Evaluator<P>>,

    /// Number of nodes evaluated by the last search
    nodes: u64,
}

impl<P: Position> Engine<P> {
    pub fn new(config: &EngineConfig, evaluator: Box<dyn Evaluator<P>>) -> Result<Self, SearchError> {
        let depth = config.depth.value;
        if depth == 0 {
            return Err(SearchError::InvalidDepth(depth));
        }

        Ok(Self {
            config: config.clone(),
            evaluator,
            nodes: 0,
        })
    }

    pub fn name(&self) -> String {
        format!("Minimax depth {} ({})", self.depth(), self.evaluator.name())
    }

    #[inline(always)]
    pub fn depth(&self) -> u8 {
        self.config.depth.value
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for the side to move, searched to the configured depth.
    pub fn best_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> {
        self.analyse(position).map(|report| report.best_move)
    }

    /// Same search as [`Engine::best_move`], keeping the score and statistics.
    pub fn analyse(&mut self, position: &mut P) -> Result<SearchReport<P::Move>, SearchError> {
        self.nodes = 0;
        let start = Instant::now();
        let depth = self.depth();

        let perspective = Perspective::for_side(position.side_to_move());
        let (score, best_move) = self.minimax(position, depth, 0, perspective);
        let elapsed = start.elapsed();

        let Some(best_move) = best_move else {
            info!("No legal move to search (score {})", score);
            return Err(SearchError::NoMoveAvailable);
        };

        info!(
            "Depth {} searched: best {:?}, score {}, nodes {}, time {} ms",
            depth,
            best_move,
            score,
            self.nodes,
            elapsed.as_millis()
        );

        Ok(SearchReport {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            elapsed,
        })
    }
}
