use knight_paths::{BoardBounds, DepthCounts, NoCallback, SearchBuilder, SearchOutcome, Square};

fn search(bounds: BoardBounds, source: Square, destination: Square) -> SearchOutcome {
    SearchBuilder::new()
        .source(source)
        .destination(destination)
        .bounds(bounds)
        .callback(NoCallback)
        .run_no_defaults()
        .unwrap()
}

fn count_unreachable_pairs(files: u8, ranks: u8) -> usize {
    let bounds = BoardBounds::new(files, ranks).unwrap();
    let mut unreachable = 0;
    for source in bounds.squares() {
        for destination in bounds.squares() {
            match search(bounds, source, destination) {
                SearchOutcome::Found(path) => {
                    assert_eq!(path.source(), source);
                    assert_eq!(path.destination(), destination);
                    assert!(path.is_knight_path());
                    assert!(path.squares().iter().all(|&s| bounds.contains(s)));
                }
                SearchOutcome::Exhausted => unreachable += 1,
            }
        }
    }
    unreachable
}

#[test]
fn centre_of_three_by_three_is_isolated() {
    // B2 cannot reach or be reached from any of the other eight squares
    assert_eq!(count_unreachable_pairs(3, 3), 16);
}

#[test]
fn four_by_four_and_three_by_four_are_connected() {
    assert_eq!(count_unreachable_pairs(4, 4), 0);
    assert_eq!(count_unreachable_pairs(3, 4), 0);
}

#[test]
fn two_by_three_is_mostly_disconnected() {
    assert_eq!(count_unreachable_pairs(2, 3), 26);
}

#[test]
fn single_square_board() {
    let bounds = BoardBounds::new(1, 1).unwrap();
    let a1 = bounds.parse_square("A1").unwrap();
    let path = search(bounds, a1, a1).into_path().unwrap();
    assert_eq!(path.to_string(), "A1");
}

#[test]
fn four_by_four_paths() {
    let bounds = BoardBounds::new(4, 4).unwrap();
    let a1 = bounds.parse_square("A1").unwrap();

    let to_d4 = search(bounds, a1, bounds.parse_square("D4").unwrap());
    assert_eq!(to_d4.into_path().unwrap().to_string(), "A1 C2 D4");

    let to_b2 = search(bounds, a1, bounds.parse_square("B2").unwrap());
    assert_eq!(to_b2.into_path().unwrap().to_string(), "A1 B3 D2 C4 B2");
}

#[test]
fn exhausted_search_visits_the_whole_component() {
    let bounds = BoardBounds::new(3, 3).unwrap();
    let mut counts = DepthCounts::default();
    let outcome = SearchBuilder::new()
        .source(bounds.parse_square("B2").unwrap())
        .destination(bounds.parse_square("C3").unwrap())
        .bounds(bounds)
        .callback(&mut counts)
        .run()
        .unwrap();

    assert_eq!(outcome, SearchOutcome::Exhausted);
    // The eight outer squares form a single cycle of knight moves
    assert_eq!(counts.discovered, [1, 2, 2, 2, 1]);
    assert_eq!(counts.expanded, 8);
}

#[test]
fn wide_board_squares_parse_and_search() {
    let bounds = BoardBounds::new(12, 9).unwrap();
    let source = bounds.parse_square("A1").unwrap();
    let destination = bounds.parse_square("L9").unwrap();
    let path = search(bounds, source, destination).into_path().unwrap();

    assert_eq!(path.source(), source);
    assert_eq!(path.destination(), destination);
    assert!(path.is_knight_path());
    assert!("L9".parse::<Square>().is_err());
}
