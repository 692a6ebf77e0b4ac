use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughts_core::{notation::parse_placement, Board, Color, Square};

const WHITE: [&str; 12] = [
    "a1", "c1", "e1", "g1", "b2", "d2", "f2", "h2", "a3", "c3", "e3", "g3",
];
const BLACK: [&str; 12] = [
    "b6", "d6", "f6", "h6", "a7", "c7", "e7", "g7", "b8", "d8", "f8", "h8",
];

fn starting_board() -> Board {
    let white = WHITE.iter().map(|t| parse_placement(t).unwrap());
    let black = BLACK.iter().map(|t| parse_placement(t).unwrap());
    Board::from_placements(white, black).unwrap()
}

fn chain_board() -> (Board, Vec<Square>) {
    let white = ["a1"].map(|t| parse_placement(t).unwrap());
    let black = ["b2", "d4", "f6"].map(|t| parse_placement(t).unwrap());
    let chain = ["a1", "c3", "e5", "g7"].map(|t| t.parse::<Square>().unwrap()).to_vec();
    (Board::from_placements(white, black).unwrap(), chain)
}

fn flying_kings() -> Board {
    let white = ["A1", "H2", "B8"].map(|t| parse_placement(t).unwrap());
    let black = ["d4", "e5", "c5", "g5", "f2"].map(|t| parse_placement(t).unwrap());
    Board::from_placements(white, black).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let start = starting_board();
    let kings = flying_kings();
    let (board, chain) = chain_board();
    c.bench_function("has capture start", |b| {
        b.iter(|| black_box(&start).has_capture(Color::White))
    });
    c.bench_function("has capture kings", |b| {
        b.iter(|| black_box(&kings).has_capture(Color::White))
    });
    c.bench_function("pieces of", |b| {
        b.iter(|| black_box(&start).pieces_of(Color::Black))
    });
    c.bench_function("capture chain 3", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board
                .capture_chain(Color::White, black_box(&chain))
                .unwrap();
            board
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
