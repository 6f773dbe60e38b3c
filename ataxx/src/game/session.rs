//! Session lifecycle: turn arbitration, timing, and termination.

use crate::{
    board::{Board, Cell, Coord, Dimensions, Player},
    game::{clock::GameClock, EventOutcome, InputEvent},
    level::{Level, LevelError},
};

/// Mode of play. The engine only arbitrates local two-player sessions; the
/// mode is stored so the presentation layer can read back what it started.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameMode {
    PlayerVsPlayer,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PlayerVsPlayer
    }
}

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The given player won, by elimination, territory, or forfeiture.
    Winner(Player),
    /// Neither player could move and both held equal territory.
    Draw,
}

/// Lifecycle phase of a session. `Over` is terminal; only
/// [`start_new_game`][Game::start_new_game] leaves it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Over(Outcome),
}

/// A game session. Owns the [`Board`] and mediates all mutation through it;
/// tracks whose turn it is, the optional clocks, the current selection, and
/// the terminal state.
///
/// Assumes exclusive single-writer access; every operation completes within
/// the calling frame.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Player,
    clock: Option<GameClock>,
    mode: GameMode,
    phase: Phase,
    selection: Option<Coord>,
    /// Destinations valid for the current selection. Recomputed on every
    /// selection change, never stale relative to the board.
    legal: Vec<Coord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a not-yet-started session with an empty board of the canonical
    /// 7x7 dimensions.
    pub fn new() -> Self {
        Self {
            board: Board::new(Dimensions::new(7, 7)),
            current: Player::One,
            clock: None,
            mode: GameMode::default(),
            phase: Phase::NotStarted,
            selection: None,
            legal: Vec::new(),
        }
    }

    /// Reset every field and start a fresh game on the given level. With a
    /// time limit, both clocks start at `minutes * 60` seconds; without one,
    /// no countdown runs. Player 1 moves first.
    ///
    /// A level that fails to decode leaves the session unchanged.
    pub fn start_new_game(
        &mut self,
        level: &Level,
        mode: GameMode,
        time_limit_minutes: Option<u32>,
    ) -> Result<(), LevelError> {
        let board = level.to_board()?;
        self.board = board;
        self.current = Player::One;
        self.clock = time_limit_minutes.map(GameClock::new);
        self.mode = mode;
        self.phase = Phase::InProgress;
        self.selection = None;
        self.legal.clear();
        Ok(())
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The mode this session was started with.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The session's lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// How the game ended, or `None` while it is still running.
    pub fn winner(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The currently selected piece, if any.
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Destinations valid for the current selection, in generation order.
    /// Empty when nothing is selected.
    pub fn legal_moves_for_selection(&self) -> &[Coord] {
        &self.legal
    }

    /// Piece tally as `(player 1 count, player 2 count)`.
    pub fn piece_counts(&self) -> (usize, usize) {
        self.board.piece_counts()
    }

    /// Select the piece at `pos` and compute its legal destinations. Succeeds
    /// only if the cell holds one of the current player's pieces; any other
    /// position leaves all state unchanged and reports failure.
    pub fn select_piece(&mut self, pos: Coord) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        if self.board.get(pos) != Some(Cell::Piece(self.current)) {
            return false;
        }
        self.legal = self.board.legal_moves(pos);
        self.selection = Some(pos);
        true
    }

    /// Submit the current player's move and return the converted coordinates.
    ///
    /// Rejected with an empty result and no state change unless the game is
    /// in progress, `from` is the current selection, and `to` is one of its
    /// legal destinations. On acceptance the board mutates, the selection
    /// clears, termination is evaluated, and the turn advances.
    ///
    /// Turn-advance policy: the turn passes only if the opponent has at least
    /// one legal move anywhere on the board; a completely blocked opponent
    /// forfeits their turn and the same player moves again.
    pub fn submit_move(&mut self, from: Coord, to: Coord) -> Vec<Coord> {
        if self.phase != Phase::InProgress
            || self.selection != Some(from)
            || !self.legal.contains(&to)
        {
            return Vec::new();
        }

        let converted = self.board.apply_move(from, to, self.current);
        self.selection = None;
        self.legal.clear();

        self.check_game_over();
        if self.phase == Phase::InProgress && self.board.has_any_move(self.current.opponent()) {
            self.current = self.current.opponent();
        }
        converted
    }

    /// Evaluate termination after a move, before any turn handoff.
    fn check_game_over(&mut self) {
        let (count_one, count_two) = self.board.piece_counts();
        // Elimination takes precedence over mobility.
        if count_one == 0 {
            self.phase = Phase::Over(Outcome::Winner(Player::Two));
            return;
        }
        if count_two == 0 {
            self.phase = Phase::Over(Outcome::Winner(Player::One));
            return;
        }
        if !self.board.has_any_move(Player::One) && !self.board.has_any_move(Player::Two) {
            self.phase = Phase::Over(if count_one > count_two {
                Outcome::Winner(Player::One)
            } else if count_two > count_one {
                Outcome::Winner(Player::Two)
            } else {
                Outcome::Draw
            });
        }
    }

    /// Charge elapsed time to the current player's clock. No-op without a
    /// time limit or once the game is over. A clock reaching zero ends the
    /// game immediately with the other player the winner, independent of the
    /// board.
    pub fn advance_clock(&mut self, delta_seconds: f64) {
        if self.phase != Phase::InProgress {
            return;
        }
        let clock = match &mut self.clock {
            Some(clock) => clock,
            None => return,
        };
        if clock.charge(self.current, delta_seconds) {
            self.phase = Phase::Over(Outcome::Winner(self.current.opponent()));
        }
    }

    /// Both players' remaining time as zero-padded `MM:SS` strings. Shows
    /// `00:00` for both when no time limit is set.
    pub fn time_display(&self) -> (String, String) {
        match &self.clock {
            Some(clock) => (clock.display(Player::One), clock.display(Player::Two)),
            None => ("00:00".to_owned(), "00:00".to_owned()),
        }
    }

    /// Single entry point for presentation-layer stimuli.
    ///
    /// A cell tap selects one of the current player's pieces, plays the
    /// pending move when the tap lands on a legal destination, or clears the
    /// selection on any other cell. Ticks feed
    /// [`advance_clock`][Game::advance_clock].
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Tick(delta_seconds) => {
                self.advance_clock(delta_seconds);
                EventOutcome::Ignored
            }
            InputEvent::SelectCell(pos) => {
                if self.phase != Phase::InProgress {
                    return EventOutcome::Ignored;
                }
                match self.selection {
                    Some(from) if self.legal.contains(&pos) => {
                        EventOutcome::Moved(self.submit_move(from, pos))
                    }
                    Some(_) => {
                        self.selection = None;
                        self.legal.clear();
                        EventOutcome::Deselected
                    }
                    None => {
                        if self.select_piece(pos) {
                            EventOutcome::Selected
                        } else {
                            EventOutcome::Ignored
                        }
                    }
                }
            }
        }
    }
}
