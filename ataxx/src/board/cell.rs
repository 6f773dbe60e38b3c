/// One of the two players. Cells owned by a player carry these in
/// [`Cell::Piece`]; the serialized layout format stores them as 1 and 2.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell value used by the serialized layout format.
    pub fn value(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Decode a player from its layout value, if valid.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Get the player's name for display.
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Contents of a single board cell. The layout format stores these as 0
/// (empty), 1 and 2 (player pieces), and 9 (obstacle).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open and unoccupied.
    Empty,
    /// Occupied by the given player.
    Piece(Player),
    /// A permanently untraversable cell. Never changes value and is excluded
    /// from move generation and counting.
    Blocked,
}

impl Cell {
    /// Layout value marking an obstacle cell.
    pub const OBSTACLE: u8 = 9;

    /// Cell value used by the serialized layout format.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(player) => player.value(),
            Cell::Blocked => Cell::OBSTACLE,
        }
    }

    /// Decode a cell from its layout value, if valid.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            Cell::OBSTACLE => Some(Cell::Blocked),
            other => Player::from_value(other).map(Cell::Piece),
        }
    }

    /// The player occupying this cell, if any.
    pub fn piece(self) -> Option<Player> {
        match self {
            Cell::Piece(player) => Some(player),
            _ => None,
        }
    }

    /// Whether this cell is an obstacle.
    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }
}
