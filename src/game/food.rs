use super::grid::{self, Cell};
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};

/// Choose a uniformly random grid cell not occupied by `snake`.
///
/// The draw is over the precomputed free-cell set, so it terminates no
/// matter how full the board is.  Returns `None` only when the snake covers
/// the whole grid.
pub(super) fn place<R: Rng>(rng: &mut R, snake: &Snake) -> Option<Cell> {
    grid::cells().filter(|&cell| !snake.contains(cell)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// A snake walking the whole grid boustrophedon, minus `free` cells
    /// popped off the front.
    fn covering_snake(free: usize) -> Snake {
        let mut cells = VecDeque::new();
        for y in 0..grid::GRID_SIZE {
            if y % 2 == 0 {
                for x in 0..grid::GRID_SIZE {
                    cells.push_back(Cell::new(x, y));
                }
            } else {
                for x in (0..grid::GRID_SIZE).rev() {
                    cells.push_back(Cell::new(x, y));
                }
            }
        }
        for _ in 0..free {
            let _ = cells.pop_front();
        }
        Snake { cells }
    }

    #[test]
    fn never_on_the_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::initial();
        for _ in 0..100 {
            let cell = place(&mut rng, &snake).unwrap();
            assert!(grid::in_bounds(cell));
            assert!(!snake.contains(cell));
        }
    }

    #[test]
    fn lands_on_the_only_free_cell() {
        let snake = covering_snake(1);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place(&mut rng, &snake), Some(Cell::new(0, 0)));
    }

    #[test]
    fn full_board_has_no_placement() {
        let snake = covering_snake(0);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place(&mut rng, &snake), None);
    }
}
