use evaluation::hce::{self, HCEConfig};
use evaluation::PieceValues;
use search::{Engine, EngineConfig, SearchError};
use utils::GameBoard;

pub fn create(config: &EngineConfig) -> Result<Engine<GameBoard>, SearchError> {
    let hce = Box::new(hce::Evaluator::new(
        PieceValues::default(),
        HCEConfig::default(),
    ));

    Engine::new(config, hce)
}
