use strum::IntoEnumIterator;
use window2048_core::{Board, Direction, Session, SessionConfig};

const SIZE: usize = 8;

fn random_board(rng: &mut fastrand::Rng) -> Board {
    let rows: Vec<Vec<u32>> = (0..SIZE)
        .map(|_| {
            (0..SIZE)
                .map(|_| match rng.u8(0..5) {
                    0 | 1 => 0,
                    n => 1 << n,
                })
                .collect()
        })
        .collect();
    Board::from_rows(&rows).unwrap()
}

/// Classic line collapse towards index 0: drop the gaps, then merge equal
/// neighbours pairwise from the front.
fn collapse(line: &[u32]) -> Vec<u32> {
    let tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut out = Vec::with_capacity(line.len());
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out.push(tiles[i] * 2);
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }
    out.resize(line.len(), 0);
    out
}

fn expected_after(rows: &[Vec<u32>], direction: Direction) -> Vec<Vec<u32>> {
    let n = rows.len();
    let column = |c: usize| -> Vec<u32> { rows.iter().map(|r| r[c]).collect() };
    let mut out = vec![vec![0; n]; n];
    for i in 0..n {
        match direction {
            Direction::Left => out[i] = collapse(&rows[i]),
            Direction::Right => {
                let mut line = rows[i].clone();
                line.reverse();
                let mut merged = collapse(&line);
                merged.reverse();
                out[i] = merged;
            }
            Direction::Up => {
                for (r, v) in collapse(&column(i)).into_iter().enumerate() {
                    out[r][i] = v;
                }
            }
            Direction::Down => {
                let mut line = column(i);
                line.reverse();
                let mut merged = collapse(&line);
                merged.reverse();
                for (r, v) in merged.into_iter().enumerate() {
                    out[r][i] = v;
                }
            }
        }
    }
    out
}

#[test]
fn slide_matches_line_collapse() {
    let mut rng = fastrand::Rng::with_seed(2048);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        for direction in Direction::iter() {
            let mut slid = board.clone();
            let moved = slid.slide(direction);
            let expected = expected_after(&board.to_rows(), direction);
            assert_eq!(slid.to_rows(), expected, "{direction} on\n{board}");
            assert_eq!(moved, slid != board, "{direction} on\n{board}");
        }
    }
}

#[test]
fn slide_conserves_tile_sum() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        let sum: u32 = board.cells().iter().sum();
        for direction in Direction::iter() {
            let mut slid = board.clone();
            slid.slide(direction);
            assert_eq!(slid.cells().iter().sum::<u32>(), sum);
            assert!(slid.tile_count() <= board.tile_count());
        }
    }
}

#[test]
fn second_slide_in_same_direction_never_merges_twice() {
    let mut row = vec![vec![0; 4]; 4];
    row[0] = vec![4, 4, 8, 16];
    let mut board = Board::from_rows(&row).unwrap();
    assert!(board.slide(Direction::Left));
    assert_eq!(board.to_rows()[0], vec![8, 8, 16, 0]);
    assert!(board.slide(Direction::Left));
    assert_eq!(board.to_rows()[0], vec![16, 16, 0, 0]);
    assert!(board.slide(Direction::Left));
    assert_eq!(board.to_rows()[0], vec![32, 0, 0, 0]);
    assert!(!board.slide(Direction::Left));
}

#[test]
fn long_session_keeps_tiles_valid_and_window_in_range() {
    let mut session = Session::new(SessionConfig::with_seed(99)).unwrap();
    let mut rng = fastrand::Rng::with_seed(100);
    let directions: Vec<Direction> = Direction::iter().collect();
    for _ in 0..400 {
        let direction = directions[rng.usize(..directions.len())];
        if rng.bool() {
            session.pan(direction);
        } else {
            session.slide(direction);
        }
        assert!(
            session
                .grid()
                .iter()
                .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two()))
        );
        let bounds = session.window_bounds();
        assert!(bounds.right <= 16 && bounds.bottom <= 16);
        assert_eq!(bounds.right - bounds.left, 4);
    }
}
