//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use std::time::Duration;

/// Starting position of the snake's head
pub(crate) const INITIAL_HEAD: Cell = Cell::new(8, 10);

/// The direction the snake faces at the start of a run
pub(crate) const INITIAL_DIRECTION: Direction = Direction::Right;

/// Time between movements of the snake at the Slow speed
pub(crate) const SLOW_TICK_PERIOD: Duration = Duration::from_millis(200);

/// Time between movements of the snake at the Normal speed
pub(crate) const NORMAL_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Time between movements of the snake at the Fast speed
pub(crate) const FAST_TICK_PERIOD: Duration = Duration::from_millis(60);
