use std::collections::{BTreeMap, VecDeque};

use knight_paths::{shortest_path, BoardBounds, InvalidSquare, KnightPath, SearchOutcome, Square};

fn square(text: &str) -> Square {
    text.parse().unwrap()
}

fn path(source: &str, destination: &str) -> KnightPath {
    shortest_path(square(source), square(destination))
        .into_path()
        .unwrap()
}

/// Knight distances from `(file, rank)` to every square of an 8x8 board, computed by a plain flood
/// fill over `(i32, i32)` coordinates.
fn distance_table(file: i32, rank: i32) -> [[Option<usize>; 8]; 8] {
    let mut dist = [[None; 8]; 8];
    dist[file as usize][rank as usize] = Some(0);

    let mut queue = VecDeque::from([(file, rank)]);
    while let Some((f, r)) = queue.pop_front() {
        let d = dist[f as usize][r as usize].unwrap();
        for (df, dr) in [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)] {
            let (nf, nr) = (f + df, r + dr);
            if !(0..8).contains(&nf) || !(0..8).contains(&nr) {
                continue;
            }
            let slot = &mut dist[nf as usize][nr as usize];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back((nf, nr));
            }
        }
    }

    dist
}

#[test]
fn known_scenarios() {
    // A8 and B7 are corner-adjacent diagonals, like A1 and B2
    assert_eq!(path("A8", "B7").moves(), 4);
    assert_eq!(path("A1", "H8").moves(), 6);
    assert_eq!(path("A1", "B2").moves(), 4);
    assert_eq!(path("D4", "D4").squares(), [square("D4")]);
    assert_eq!(path("A1", "A1").squares(), [square("A1")]);
}

#[test]
fn ties_are_broken_by_move_order() {
    assert_eq!(path("A8", "B7").to_string(), "A8 B6 C4 A5 B7");
    assert_eq!(path("B7", "A8").to_string(), "B7 C5 A4 B6 A8");
    assert_eq!(path("H1", "A8").to_string(), "H1 F2 D1 B2 A4 B6 A8");
}

#[test]
fn all_pairs_match_flood_fill_distances() {
    let bounds = BoardBounds::STANDARD;

    for source in bounds.squares() {
        let table = distance_table(i32::from(source.file()), i32::from(source.rank()));

        for destination in bounds.squares() {
            let outcome = shortest_path(source, destination);
            let SearchOutcome::Found(path) = outcome else {
                panic!("no path from {source} to {destination}");
            };

            assert_eq!(path.source(), source);
            assert_eq!(path.destination(), destination);
            assert!(path.is_knight_path(), "{path}");
            assert_eq!(
                Some(path.moves()),
                table[destination.file() as usize][destination.rank() as usize],
                "{source} -> {destination}: {path}"
            );
        }
    }
}

#[test]
fn distance_histogram() {
    let bounds = BoardBounds::STANDARD;
    let mut histogram = BTreeMap::new();
    for source in bounds.squares() {
        for destination in bounds.squares() {
            let moves = shortest_path(source, destination).path().unwrap().moves();
            *histogram.entry(moves).or_insert(0) += 1;
        }
    }

    let expected = BTreeMap::from([
        (0, 64),
        (1, 336),
        (2, 1080),
        (3, 1536),
        (4, 900),
        (5, 176),
        (6, 4),
    ]);
    assert_eq!(histogram, expected);
}

#[test]
fn distance_is_symmetric() {
    let bounds = BoardBounds::STANDARD;
    for p in bounds.squares() {
        for q in bounds.squares() {
            let there = shortest_path(p, q).into_path().unwrap();
            let back = shortest_path(q, p).into_path().unwrap();
            assert_eq!(there.moves(), back.moves(), "{p} <-> {q}");
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    for (source, destination) in [("A1", "H8"), ("C3", "F6"), ("H1", "A8"), ("E4", "E5")] {
        let first = path(source, destination);
        for _ in 0..3 {
            assert_eq!(path(source, destination), first);
        }
    }
}

#[test]
fn malformed_squares_are_rejected() {
    for text in ["I1", "A9", "a1", "A", "A12", "", "11", "AA"] {
        let err = text.parse::<Square>().unwrap_err();
        assert!(
            matches!(
                err,
                InvalidSquare::WrongLength { .. }
                    | InvalidSquare::FileOutOfRange { .. }
                    | InvalidSquare::RankOutOfRange { .. }
            ),
            "{text}"
        );
    }
}
