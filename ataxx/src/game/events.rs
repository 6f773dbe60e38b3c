//! Input events driving a game session.
//!
//! The presentation layer only produces two stimuli: discrete cell taps and a
//! periodic tick for the clock. Both funnel through
//! [`Game::handle_event`][crate::game::Game::handle_event] so the engine
//! never depends on any particular UI event system.

use crate::board::Coord;

/// A stimulus from the presentation layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// The user tapped the cell at the given position.
    SelectCell(Coord),
    /// Time elapsed, in seconds. Charged to the current player's clock.
    Tick(f64),
}

/// What an [`InputEvent`] did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The tapped cell now holds the selection.
    Selected,
    /// The previous selection was cleared without moving.
    Deselected,
    /// A move was played; holds the converted coordinates so the presentation
    /// layer can drive capture feedback.
    Moved(Vec<Coord>),
    /// The event had no effect on the session.
    Ignored,
}
