use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use evaluation::hce;
use search::{Engine, EngineConfig};
use utils::GameBoard;

const DEPTH: u8 = 3;
const SAMPLE_SIZE: usize = 10;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn create_engine() -> Engine<GameBoard> {
    let config = EngineConfig::with_depth(DEPTH).unwrap();
    Engine::new(&config, Box::new(hce::Evaluator::default())).unwrap()
}

fn bench_positions(c: &mut Criterion) {
    let mut engine = create_engine();
    let mut group = c.benchmark_group(format!("search/depth_{}", DEPTH));

    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    for fen in POSITIONS {
        let position = GameBoard::from_fen(fen).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &position, |b, position| {
            b.iter(|| {
                let mut position = position.clone();
                black_box(engine.best_move(&mut position))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
