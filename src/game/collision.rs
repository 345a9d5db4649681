use super::grid::{self, Cell};
use super::snake::Snake;

/// How a candidate move ends the run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collision {
    /// The candidate head lies off the grid
    Wall,
    /// The candidate head lies on the snake's own body
    SelfCollision,
}

/// Classify the candidate head cell of a move against the pre-move body.
///
/// The body still includes its tail cell: moving into the cell the tail is
/// about to vacate is fatal.  `None` means the move is legal.
pub(super) fn classify(candidate: Cell, snake: &Snake) -> Option<Collision> {
    if !grid::in_bounds(candidate) {
        Some(Collision::Wall)
    } else if snake.contains(candidate) {
        Some(Collision::SelfCollision)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake_from(cells: &[Cell]) -> Snake {
        Snake {
            cells: cells.iter().copied().collect(),
        }
    }

    // Body is a closed hook: head (5,5), tail (5,6) one step below the head.
    #[rstest]
    #[case(Cell::new(-1, 5), Some(Collision::Wall))]
    #[case(Cell::new(20, 5), Some(Collision::Wall))]
    #[case(Cell::new(5, -1), Some(Collision::Wall))]
    #[case(Cell::new(5, 20), Some(Collision::Wall))]
    #[case(Cell::new(4, 5), Some(Collision::SelfCollision))]
    #[case(Cell::new(4, 6), Some(Collision::SelfCollision))]
    #[case(Cell::new(5, 6), Some(Collision::SelfCollision))]
    #[case(Cell::new(6, 5), None)]
    #[case(Cell::new(5, 4), None)]
    fn test_classify(#[case] candidate: Cell, #[case] r: Option<Collision>) {
        let snake = snake_from(&[
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
        ]);
        assert_eq!(classify(candidate, &snake), r);
    }

    #[test]
    fn tail_cell_is_fatal_even_though_it_vacates() {
        // the tail sits directly behind the head and would move away this
        // same tick; the pre-move body is what counts
        let snake = snake_from(&[
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
        ]);
        assert_eq!(
            classify(Cell::new(5, 6), &snake),
            Some(Collision::SelfCollision)
        );
    }
}
