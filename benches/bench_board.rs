use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Dictionary, Rack};

const WORDS: &[&str] = &[
    "DOG", "DOGS", "MILO", "MILOS", "HELLO", "HELL", "HELD", "HOLD", "HOLDS", "GOLD", "GOLDS",
    "SOLD", "SOLID", "SLID", "LIDS", "LID", "DIM", "DIMS", "MID", "MIDS", "SIR", "SIRS", "RIM",
    "RIMS", "MIRS", "GRIM", "GRIMS", "GRID", "GRIDS", "RIG", "RIGS", "DIG", "DIGS", "GIG",
    "GIGS", "GEL", "GELS", "LEG", "LEGS", "LED", "SLED", "ELM", "ELMS", "MELD", "MELDS",
];

const MIDGAME: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    ".......D.......",
    "......MILOS....",
    ".......G.......",
    ".......S.......",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn bench_generate_solutions(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS);
    let board = Board::with_rows(MIDGAME).unwrap();
    let rack: Rack = "GRIDSLE".parse().unwrap();
    c.bench_function("board.generate_solutions", |b| {
        b.iter(|| board.generate_solutions(&rack, &dictionary).unwrap())
    });
}

fn bench_find_best_solution(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS);
    let board = Board::with_rows(MIDGAME).unwrap();
    let rack: Rack = "GRIDSLE".parse().unwrap();
    let solutions = board.generate_solutions(&rack, &dictionary).unwrap();
    c.bench_function("board.find_best_solution", |b| {
        b.iter(|| board.find_best_solution(&solutions, &dictionary).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_generate_solutions(c);
    bench_find_best_solution(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(60);
    targets = criterion_benchmark
}
criterion_main!(benches);
