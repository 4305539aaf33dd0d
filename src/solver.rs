// Solving happens by plain exhaustive backtracking
//
// The first empty cell in row-major order is located and every digit
// 1..=size tried in ascending order. A digit that passes the row, column
// and box check is placed tentatively and the search recurses on the rest
// of the grid. A failed recursion resets the cell to 0 and moves on to the
// next digit; running out of digits reports failure one level up. Since
// every placement is undone on the way out of a failed branch, a grid on
// which the search fails is left untouched.
//
// No heuristics (candidate counting, cell ordering, propagation) are
// applied. Worst case runtime is exponential, which is acceptable for the
// targeted sizes. Recursion depth is bounded by the number of cells.
use crate::board::Grid;

pub(crate) fn is_safe(grid: &Grid, row: u8, col: u8, num: u8) -> bool {
    let size = grid.size().get();
    for x in 0..size {
        if grid.get(row, x) == num || grid.get(x, col) == num {
            return false;
        }
    }

    let box_size = grid.size().box_size();
    let box_row = row - row % box_size;
    let box_col = col - col % box_size;
    for r in box_row..box_row + box_size {
        for c in box_col..box_col + box_size {
            if grid.get(r, c) == num {
                return false;
            }
        }
    }
    true
}

pub(crate) fn solve(grid: &mut Grid) -> bool {
    let (row, col) = match grid.first_empty() {
        Some(cell) => cell,
        // no empty cell left, the grid is a solution
        None => return true,
    };

    for num in grid.size().digits() {
        if is_safe(grid, row, col, num) {
            grid.set_raw(row, col, num);
            if solve(grid) {
                return true;
            }
            grid.set_raw(row, col, 0);
        }
    }
    false
}

pub(crate) fn hint(grid: &mut Grid) -> bool {
    let size = grid.size().get();
    for row in 0..size {
        for col in 0..size {
            if grid.get(row, col) != 0 {
                continue;
            }
            for num in grid.size().digits() {
                if is_safe(grid, row, col, num) {
                    grid.set_raw(row, col, num);
                    return true;
                }
            }
            // no digit fits here, try a later empty cell
        }
    }
    false
}
