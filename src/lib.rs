//! Tick-driven snake simulation engine on a fixed 20×20 grid.
//!
//! The crate owns the game rules: snake movement, collision detection, food
//! placement, scoring, and the running/game-over lifecycle, together with the
//! pieces a host needs to drive it — a cancellable tick schedule with named
//! speeds, high-score persistence, and a configuration file.  Rendering and
//! input-device handling belong to the host: it feeds direction intents in
//! via [`Game::request_direction`], drives [`Game::tick`] from a [`Ticker`],
//! and draws from the read-only accessors after each tick.
//!
//! ```
//! use gridsnake::{Game, MemoryStore, Speed, Ticker};
//! use std::time::Instant;
//!
//! let mut game = Game::new(MemoryStore::default());
//! let mut ticker = Ticker::new(Speed::Normal);
//! ticker.start(Instant::now());
//! // In the host's event loop:
//! if ticker.tick_due(Instant::now()) {
//!     let outcome = game.tick();
//!     println!("{outcome:?}: score {}", game.score());
//! }
//! ```
mod consts;
pub mod config;
pub mod game;
pub mod highscores;
pub mod ticker;

pub use crate::config::{Config, ConfigError, FileConfig};
pub use crate::game::{
    in_bounds, Cell, Collision, Direction, Game, GameState, Snake, TickOutcome, GRID_SIZE,
};
pub use crate::highscores::{HighScoreFile, HighScoreStore, LoadError, MemoryStore, SaveError};
pub use crate::ticker::{Speed, Ticker};
