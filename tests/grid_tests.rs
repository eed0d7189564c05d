//! Grid tests - the bitwise rule through the public API

use bitmosaic::core::{cell_at, generate, Grid};

fn rows(grid: &Grid) -> Vec<Vec<bool>> {
    grid.rows().map(|r| r.to_vec()).collect()
}

#[test]
fn test_grid_size_one() {
    let grid = generate(1);
    assert_eq!(grid.side(), 1);
    assert_eq!(rows(&grid), vec![vec![true]]);
}

#[test]
fn test_grid_size_two() {
    let grid = generate(2);
    assert_eq!(rows(&grid), vec![vec![true, true], vec![true, false]]);
}

#[test]
fn test_grid_size_four() {
    const T: bool = true;
    const F: bool = false;

    let grid = generate(4);
    assert_eq!(
        rows(&grid),
        vec![
            vec![T, T, T, T],
            vec![T, F, T, F],
            vec![T, T, F, F],
            vec![T, F, F, F],
        ]
    );
}

#[test]
fn test_grid_size_four_odd_row() {
    // 1 & 2 == 0, so (1, 2) is set; 1 & 1 and 1 & 3 are not.
    let grid = generate(4);
    assert_eq!(grid.get(1, 1), Some(false));
    assert_eq!(grid.get(1, 2), Some(true));
    assert_eq!(grid.get(1, 3), Some(false));
    assert_eq!(grid.get(2, 1), Some(true));
}

#[test]
fn test_grid_matches_rule_everywhere() {
    let side = 37;
    let grid = generate(side);
    for row in 0..side {
        for col in 0..side {
            assert_eq!(
                grid.get(row, col),
                Some(cell_at(row, col)),
                "Cell ({}, {}) should follow NOT(row & col)",
                row,
                col
            );
        }
    }
}

#[test]
fn test_grid_is_self_similar() {
    // The top-left, top-right and bottom-left quadrants of a 2^k grid are the
    // 2^(k-1) grid; the bottom-right quadrant is empty.
    let half = 16;
    let small = generate(half);
    let big = generate(half * 2);

    for row in 0..half {
        for col in 0..half {
            let expected = small.get(row, col);
            assert_eq!(big.get(row, col), expected);
            assert_eq!(big.get(row, col + half), expected);
            assert_eq!(big.get(row + half, col), expected);
            assert_eq!(big.get(row + half, col + half), Some(false));
        }
    }
}

#[test]
fn test_grid_generation_is_deterministic() {
    assert_eq!(generate(64), generate(64));
}
