//! Game session management layered over the [`Board`][crate::board::Board]:
//! turn sequencing, the optional per-player clocks, selection bookkeeping,
//! and win/draw detection.
//!
//! A presentation layer drives a [`Game`] either through the explicit calls
//! ([`select_piece`][Game::select_piece], [`submit_move`][Game::submit_move],
//! [`advance_clock`][Game::advance_clock]) or by feeding [`InputEvent`]s to
//! the single [`handle_event`][Game::handle_event] entry point, and reads
//! state back through the query accessors. It never mutates the board or the
//! selection directly.

pub use self::{
    clock::GameClock,
    events::{EventOutcome, InputEvent},
    session::{Game, GameMode, Outcome, Phase},
};

mod clock;
mod events;
mod session;
