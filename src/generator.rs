use rand::Rng;

use crate::board::{Grid, GridSize};

// fraction of cells that receive a random clue
const CLUE_DENSITY: f64 = 0.3;

// Puzzle generation scatters random digits over an empty grid. There is
// deliberately no legality or solvability check; an unlucky roll produces
// a board the solver rejects, which callers handle like any other
// unsolvable input.
pub(crate) fn random_puzzle<R: Rng>(size: GridSize, rng: &mut R) -> Grid {
    let mut grid = Grid::empty(size);
    for row in 0..size.get() {
        for col in 0..size.get() {
            if rng.gen_bool(CLUE_DENSITY) {
                grid.set_raw(row, col, rng.gen_range(1..=size.get()));
            }
        }
    }
    grid
}
