use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vardoku::errors::ParseError;
use vardoku::{Grid, GridSize};

fn size(n: u8) -> GridSize {
    GridSize::new(n).unwrap()
}

#[test]
fn solve_9x9() {
    let puzzle = "\
5 3 . | . 7 . | . . .
6 . . | 1 9 5 | . . .
. 9 8 | . . . | . 6 .
------+-------+------
8 . . | . 6 . | . . 3
4 . . | 8 . 3 | . . 1
7 . . | . 2 . | . . 6
------+-------+------
. 6 . | . . . | 2 8 .
. . . | 4 1 9 | . . 5
. . . | . 8 . | . 7 9";

    let solution = "\
5 3 4 6 7 8 9 1 2
6 7 2 1 9 5 3 4 8
1 9 8 3 4 2 5 6 7
8 5 9 7 6 1 4 2 3
4 2 6 8 5 3 7 9 1
7 1 3 9 2 4 8 5 6
9 6 1 5 3 7 2 8 4
2 8 7 4 1 9 6 3 5
3 4 5 2 8 6 1 7 9";

    let mut grid: Grid = puzzle.parse().unwrap();
    assert!(grid.solve());
    assert_eq!(grid, solution.parse().unwrap());
}

#[test]
fn solve_4x4_with_preserved_clues() {
    let cells = vec![
        1, 0, 0, 4, //
        0, 0, 1, 0, //
        0, 1, 0, 0, //
        4, 0, 0, 1,
    ];
    let mut grid = Grid::from_cells(size(4), cells).unwrap();
    assert!(grid.solve());
    assert!(grid.is_solved());
    assert_eq!(grid.get(0, 0), 1);
    assert_eq!(grid.get(0, 3), 4);
}

#[test]
fn unsolvable_grid_is_left_untouched() {
    // (0, 0) has no candidate: 1 blocked by box, 2 by row, 3 and 4 by column
    let cells = vec![
        0, 2, 0, 0, //
        3, 1, 0, 0, //
        0, 0, 0, 0, //
        4, 0, 0, 0,
    ];
    let mut grid = Grid::from_cells(size(4), cells).unwrap();
    let before = grid.clone();
    assert!(!grid.solve());
    assert_eq!(grid, before);
}

#[test]
fn solve_is_a_noop_on_solved_grids() {
    let mut grid: Grid = "\
1 2 3 4
3 4 1 2
2 1 4 3
4 3 2 1"
        .parse()
        .unwrap();
    let before = grid.clone();
    assert!(grid.is_solved());
    assert!(grid.solve());
    assert_eq!(grid, before);
}

#[test]
fn solve_empty_grids() {
    for n in [4, 9, 16].iter().copied() {
        let mut grid = Grid::empty(size(n));
        assert!(grid.solve(), "no solution for empty {0}x{0} grid", n);
        assert!(grid.is_solved(), "illegal solution for empty {0}x{0} grid", n);
    }
}

#[test]
fn cleared_cells_of_a_solution_can_be_refilled() {
    let solution: Grid = "\
5 3 4 6 7 8 9 1 2
6 7 2 1 9 5 3 4 8
1 9 8 3 4 2 5 6 7
8 5 9 7 6 1 4 2 3
4 2 6 8 5 3 7 9 1
7 1 3 9 2 4 8 5 6
9 6 1 5 3 7 2 8 4
2 8 7 4 1 9 6 3 5
3 4 5 2 8 6 1 7 9"
        .parse()
        .unwrap();

    let mut rng = StdRng::seed_from_u64(0xdecea5ed);
    for _ in 0..10 {
        let mut grid = solution.clone();
        for row in 0..9 {
            for col in 0..9 {
                if rng.gen_bool(0.5) {
                    grid.set(row, col, 0).unwrap();
                }
            }
        }
        assert!(grid.solve());
        assert!(grid.is_solved());
    }
}

#[test]
fn hint_fills_exactly_one_safe_cell() {
    let mut grid: Grid = "\
1 . . 4
. . 1 .
. 1 . .
4 . . 1"
        .parse()
        .unwrap();
    let before = grid.clone();

    assert!(grid.hint());
    assert_eq!(grid.n_clues(), before.n_clues() + 1);

    let size = grid.size().get();
    for row in 0..size {
        for col in 0..size {
            let (old, new) = (before.get(row, col), grid.get(row, col));
            if old != new {
                assert_eq!(old, 0);
                assert!(before.is_safe(row, col, new));
            }
        }
    }
}

#[test]
fn hint_on_a_full_grid_does_nothing() {
    let mut grid: Grid = "\
1 2 3 4
3 4 1 2
2 1 4 3
4 3 2 1"
        .parse()
        .unwrap();
    let before = grid.clone();
    assert!(!grid.hint());
    assert_eq!(grid, before);
}

#[test]
fn display_block_format() {
    let grid: Grid = "\
1 . . 4
. . 1 .
. 1 . .
4 . . 1"
        .parse()
        .unwrap();
    let expected = "\
1 . | . 4
. . | 1 .
---------
. 1 | . .
4 . | . 1
";
    assert_eq!(grid.to_string(), expected);
}

#[test]
fn display_output_parses_back() {
    let mut grid = Grid::empty(size(16));
    assert!(grid.solve());
    let reparsed: Grid = grid.to_string().parse().unwrap();
    assert_eq!(grid, reparsed);
}

#[test]
fn parse_rejects_non_square_side_lengths() {
    // 36 cells would mean a 6x6 grid, which has no square box
    let text = "1 ".repeat(36);
    match text.parse::<Grid>() {
        Err(ParseError::InvalidSize(_)) => {}
        other => panic!("expected InvalidSize, got {:?}", other),
    }
}

#[test]
fn parse_rejects_wrong_cell_counts() {
    match "1 2 3 4 5".parse::<Grid>() {
        Err(ParseError::WrongCellCount(5)) => {}
        other => panic!("expected WrongCellCount, got {:?}", other),
    }
}

#[test]
fn parse_rejects_invalid_entries() {
    match "1 2 x 4".parse::<Grid>() {
        Err(ParseError::InvalidEntry(token)) => assert_eq!(token, "x"),
        other => panic!("expected InvalidEntry, got {:?}", other),
    }
}

#[test]
fn parse_rejects_out_of_range_values() {
    match "1 2 3 9 1 2 3 4 1 2 3 4 1 2 3 4".parse::<Grid>() {
        Err(ParseError::InvalidCellValue(err)) => {
            assert_eq!(err.value, 9);
            assert_eq!(err.size, 4);
        }
        other => panic!("expected InvalidCellValue, got {:?}", other),
    }
}

#[test]
fn grid_size_validation() {
    assert!(GridSize::new(4).is_ok());
    assert!(GridSize::new(9).is_ok());
    assert!(GridSize::new(16).is_ok());
    assert_eq!(GridSize::new(9).unwrap().box_size(), 3);

    for n in [0, 1, 2, 3, 6, 8, 10, 12, 15].iter().copied() {
        assert!(GridSize::new(n).is_err(), "accepted invalid size {}", n);
    }
}

#[test]
fn from_cells_validation() {
    assert!(Grid::from_cells(size(4), vec![0; 15]).is_err());
    assert!(Grid::from_cells(size(4), vec![5; 16]).is_err());
    assert!(Grid::from_cells(size(4), vec![0; 16]).is_ok());
}

#[test]
fn set_rejects_out_of_range_values() {
    let mut grid = Grid::empty(size(4));
    assert!(grid.set(0, 0, 5).is_err());
    assert!(grid.set(0, 0, 4).is_ok());
    assert!(grid.set(0, 0, 0).is_ok());
    assert_eq!(grid.n_clues(), 0);
}

#[test]
fn generation_is_deterministic_under_a_fixed_seed() {
    let a = Grid::generate_with_rng(size(9), &mut StdRng::seed_from_u64(7));
    let b = Grid::generate_with_rng(size(9), &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

// this test is probabilistic in nature
// generated puzzles may be unsolvable, but never malformed
#[test]
fn generated_puzzles_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(0xf00d);
    for _ in 0..100 {
        let grid = Grid::generate_with_rng(size(9), &mut rng);
        assert!(grid.iter().all(|cell| match cell {
            Some(num) => (1..=9).contains(&num),
            None => true,
        }));
    }
}
