mod collision;
mod direction;
mod food;
mod grid;
mod intent;
mod snake;

pub use self::collision::Collision;
pub use self::direction::Direction;
pub use self::grid::{in_bounds, Cell, GRID_SIZE};
pub use self::snake::Snake;

use self::intent::IntentBuffer;
use crate::consts;
use crate::highscores::HighScoreStore;
use rand::{rngs::ThreadRng, Rng};

/// Lifecycle state of a run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Running,
    /// Terminal until an explicit restart
    GameOver,
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// The tick was ignored because the run is already over
    Idle,
    /// The snake shifted one cell forwards
    Moved,
    /// The snake ate the food, grew, and scored
    Ate,
    /// The move collided and ended the run
    Died(Collision),
}

/// The simulation engine: one snake, one food cell, one score, driven one
/// tick at a time.
///
/// The engine is the single writer of all game state.  Direction requests
/// may arrive at any time and are buffered; they take effect only at the
/// next tick boundary.  The high score is read from the store at creation
/// and written back whenever it rises; a failing store is tolerated and the
/// value is then held in memory only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game<S, R = ThreadRng> {
    rng: R,
    store: S,
    snake: Snake,
    intents: IntentBuffer,
    food: Cell,
    score: u32,
    high_score: u32,
    state: GameState,
}

impl<S: HighScoreStore> Game<S> {
    /// Create a game seeded from the thread RNG, loading the high score
    /// from `store`.
    pub fn new(store: S) -> Game<S> {
        Game::new_with_rng(store, rand::rng())
    }
}

impl<S: HighScoreStore, R: Rng> Game<S, R> {
    pub fn new_with_rng(store: S, mut rng: R) -> Game<S, R> {
        let snake = Snake::initial();
        let food = food::place(&mut rng, &snake).expect("a fresh grid should have open cells");
        let high_score = store.load().unwrap_or_default();
        Game {
            rng,
            store,
            snake,
            intents: IntentBuffer::new(consts::INITIAL_DIRECTION),
            food,
            score: 0,
            high_score,
            state: GameState::Running,
        }
    }

    /// Ask the snake to turn.  Requests reversing the direction applied on
    /// the last tick are dropped; the survivor takes effect next tick.
    pub fn request_direction(&mut self, direction: Direction) {
        self.intents.request(direction);
    }

    /// Advance the simulation by one tick.
    ///
    /// Commits the buffered direction, classifies the candidate head cell
    /// against the pre-move body, and then either ends the run, grows the
    /// snake onto the food, or shifts it forwards.  Does nothing once the
    /// run is over.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Running {
            return TickOutcome::Idle;
        }
        let direction = self.intents.commit();
        let candidate = self.snake.next_head(direction);
        if let Some(collision) = collision::classify(candidate, &self.snake) {
            self.end_run();
            return TickOutcome::Died(collision);
        }
        if candidate == self.food {
            self.snake = self.snake.advance(candidate, true);
            self.score += 1;
            self.raise_high_score();
            self.replace_food();
            TickOutcome::Ate
        } else {
            self.snake = self.snake.advance(candidate, false);
            TickOutcome::Moved
        }
    }

    /// Start a fresh run: initial snake and direction, new food, score 0.
    /// The high score carries over.
    pub fn restart(&mut self) {
        self.snake = Snake::initial();
        self.intents = IntentBuffer::new(consts::INITIAL_DIRECTION);
        self.food =
            food::place(&mut self.rng, &self.snake).expect("a fresh grid should have open cells");
        self.score = 0;
        self.state = GameState::Running;
    }

    fn end_run(&mut self) {
        self.state = GameState::GameOver;
        self.raise_high_score();
    }

    fn raise_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            // a failing store costs only persistence; the in-memory value stands
            let _ = self.store.save(self.high_score);
        }
    }

    fn replace_food(&mut self) {
        match food::place(&mut self.rng, &self.snake) {
            Some(cell) => self.food = cell,
            // the snake covers the grid; there is nowhere left to play
            None => self.end_run(),
        }
    }
}

impl<S, R> Game<S, R> {
    /// The snake's body, for render collaborators
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The current food cell
    pub fn food(&self) -> Cell {
        self.food
    }

    /// The direction applied on the most recent tick
    pub fn direction(&self) -> Direction {
        self.intents.last_applied()
    }

    /// Food eaten this run
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen since the store was last read
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn state(&self) -> GameState {
        self.state
    }
}
