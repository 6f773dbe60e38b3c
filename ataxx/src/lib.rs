//! Rules engine for the board game Ataxx.
//!
//! Ataxx is a two-player territory-capture game: a piece either *clones*
//! itself to an adjacent empty cell or *jumps* to an empty cell two steps
//! away, and every opponent piece next to the landing cell converts to the
//! mover's color. The game ends when one side is eliminated, when neither
//! side can move (higher count wins), or when a player's clock runs out.
//!
//! This crate implements the rules only: board representation, legal-move
//! generation, move execution with conversion, turn management, per-player
//! clocks, and terminal-state detection. Rendering, sound, and input
//! collection are left to a presentation layer, which drives a session
//! through [`Game`] and reads state back through its accessors. Board
//! layouts are exchanged with that layer through the [`level`] module's
//! serialized format.
//!
//! ```
//! use ataxx::{Coord, Game, GameMode, Level};
//!
//! let mut game = Game::new();
//! game.start_new_game(&Level::default_level(), GameMode::PlayerVsPlayer, None)?;
//!
//! // Player 1 clones the corner piece one step inward.
//! assert!(game.select_piece(Coord::new(0, 0)));
//! let converted = game.submit_move(Coord::new(0, 0), Coord::new(1, 1));
//! assert!(converted.is_empty()); // no opponent piece was in range
//! assert_eq!(game.piece_counts(), (3, 2));
//! # Ok::<(), ataxx::LevelError>(())
//! ```

pub mod board;
pub mod game;
pub mod level;

pub use crate::{
    board::{Board, Cell, Coord, Dimensions, Player},
    game::{EventOutcome, Game, GameClock, GameMode, InputEvent, Outcome, Phase},
    level::{Level, LevelError, LevelSet},
};
