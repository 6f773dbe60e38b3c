//! The serialized board-layout format and the named level collection.
//!
//! A level is a `{name, size, board}` record; a level list is persisted as a
//! JSON array of them, in order, with names acting as unique display
//! identifiers. The `Custom Level N` names are reserved for editor-created
//! entries, which may later be deleted by name.
//!
//! Decoding a level into a [`Board`] is the engine's one fallible boundary;
//! everything past it assumes well-formed data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Cell, Dimensions};

/// Error decoding a level or level list.
#[derive(Debug, Error)]
pub enum LevelError {
    /// `size` does not match the shape of the `board` data (or is zero).
    #[error("level {name:?}: board data does not match declared size {rows}x{cols}")]
    ShapeMismatch {
        name: String,
        rows: usize,
        cols: usize,
    },
    /// A cell held a value outside `{0, 1, 2, 9}`.
    #[error("level {name:?}: unknown cell value {value} at ({row}, {col})")]
    BadCellValue {
        name: String,
        value: u8,
        row: usize,
        col: usize,
    },
    /// The level list was not valid JSON.
    #[error("malformed level data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A named board layout. Field names match the on-disk JSON format produced
/// by the level editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Unique display name.
    pub name: String,
    /// `[rows, cols]`.
    pub size: [usize; 2],
    /// Cell values by row: 0 empty, 1 and 2 player pieces, 9 obstacle.
    pub board: Vec<Vec<u8>>,
}

impl Level {
    /// Construct a [`Level`] from its parts.
    pub fn new(name: impl Into<String>, size: [usize; 2], board: Vec<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            size,
            board,
        }
    }

    /// The built-in layout used when no level list is available: each
    /// player's pieces in opposing corners of a 7x7 board.
    pub fn default_level() -> Self {
        Self::new(
            "Default Level",
            [7, 7],
            vec![
                vec![1, 0, 0, 0, 0, 0, 2],
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![2, 0, 0, 0, 0, 0, 1],
            ],
        )
    }

    /// Decode this level into a [`Board`].
    pub fn to_board(&self) -> Result<Board, LevelError> {
        let [rows, cols] = self.size;
        let shape_mismatch = || LevelError::ShapeMismatch {
            name: self.name.clone(),
            rows,
            cols,
        };
        let dim = Dimensions::try_new(rows, cols).ok_or_else(shape_mismatch)?;
        if self.board.len() != rows || self.board.iter().any(|row| row.len() != cols) {
            return Err(shape_mismatch());
        }

        let mut cells = Vec::with_capacity(dim.total_size());
        for (row, data) in self.board.iter().enumerate() {
            for (col, &value) in data.iter().enumerate() {
                let cell = Cell::from_value(value).ok_or_else(|| LevelError::BadCellValue {
                    name: self.name.clone(),
                    value,
                    row,
                    col,
                })?;
                cells.push(cell);
            }
        }
        Ok(Board::from_cells(dim, cells))
    }

    /// Capture a board back into the serialized form, the level editor's save
    /// path.
    pub fn from_board(name: impl Into<String>, board: &Board) -> Self {
        let dim = board.dimensions();
        Self::new(
            name,
            [dim.rows(), dim.cols()],
            dim.iter_coordinates()
                .map(|row| {
                    row.map(|coord| board.get(coord).unwrap().value())
                        .collect()
                })
                .collect(),
        )
    }

    /// Editor validity rule: both players present with equal piece counts.
    /// Advisory only; the engine itself accepts unbalanced layouts.
    pub fn is_balanced(&self) -> bool {
        let mut counts = (0, 0);
        for row in &self.board {
            for &value in row {
                match value {
                    1 => counts.0 += 1,
                    2 => counts.1 += 1,
                    _ => {}
                }
            }
        }
        counts.0 == counts.1 && counts.0 > 0
    }
}

/// Ordered collection of uniquely named levels, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    /// Create an empty level set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a level set from its JSON array form.
    pub fn from_json(data: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serialize the set back to its JSON array form.
    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of levels in the set.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the set holds no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate the levels in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Iterate the display names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|level| level.name.as_str())
    }

    /// Get the level with the given display name.
    pub fn get(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.name == name)
    }

    /// Append a level to the set.
    pub fn push(&mut self, level: Level) {
        self.levels.push(level);
    }

    /// Add an editor-created layout under the next reserved `Custom Level N`
    /// display name and return it.
    pub fn add_custom(&mut self, board: Vec<Vec<u8>>) -> &Level {
        let name = format!("Custom Level {}", self.levels.len() + 1);
        let size = [board.len(), board.first().map_or(0, Vec::len)];
        self.levels.push(Level::new(name, size, board));
        self.levels.last().unwrap()
    }

    /// Delete the level with the given display name. Returns true when a
    /// level was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.levels.len();
        self.levels.retain(|level| level.name != name);
        self.levels.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player};

    #[test]
    fn parses_the_on_disk_format() {
        let data = r#"[
            {
                "name": "Default Level",
                "size": [2, 3],
                "board": [[1, 0, 2], [0, 9, 0]]
            }
        ]"#;
        let set = LevelSet::from_json(data).unwrap();
        assert_eq!(set.len(), 1);
        let level = set.get("Default Level").unwrap();
        assert_eq!(level.size, [2, 3]);
        assert_eq!(level.board[1][1], 9);
    }

    #[test]
    fn json_round_trip_preserves_order_and_names() {
        let mut set = LevelSet::new();
        set.push(Level::default_level());
        set.add_custom(vec![vec![1, 2]]);
        let json = set.to_json().unwrap();
        let parsed = LevelSet::from_json(&json).unwrap();
        assert_eq!(parsed, set);
        let names: Vec<&str> = parsed.names().collect();
        assert_eq!(names, ["Default Level", "Custom Level 2"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            LevelSet::from_json("not json"),
            Err(LevelError::Malformed(_))
        ));
    }

    #[test]
    fn default_level_decodes_and_is_balanced() {
        let level = Level::default_level();
        assert!(level.is_balanced());
        let board = level.to_board().unwrap();
        assert_eq!(board.piece_counts(), (2, 2));
        assert_eq!(board.get(Coord::new(0, 0)), Some(Cell::Piece(Player::One)));
        assert_eq!(board.get(Coord::new(0, 6)), Some(Cell::Piece(Player::Two)));
    }

    #[test]
    fn bad_cell_value_is_reported_with_position() {
        let level = Level::new("bad", [1, 3], vec![vec![0, 7, 0]]);
        match level.to_board() {
            Err(LevelError::BadCellValue {
                value, row, col, ..
            }) => {
                assert_eq!((value, row, col), (7, 0, 1));
            }
            other => panic!("expected BadCellValue, got {:?}", other),
        }
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let level = Level::new("short", [2, 2], vec![vec![0, 0]]);
        assert!(matches!(
            level.to_board(),
            Err(LevelError::ShapeMismatch { .. })
        ));
        let ragged = Level::new("ragged", [2, 2], vec![vec![0, 0], vec![0]]);
        assert!(ragged.to_board().is_err());
        let empty = Level::new("empty", [0, 0], vec![]);
        assert!(empty.to_board().is_err());
    }

    #[test]
    fn from_board_inverts_to_board() {
        let level = Level::default_level();
        let board = level.to_board().unwrap();
        let captured = Level::from_board("Default Level", &board);
        assert_eq!(captured, level);
    }

    #[test]
    fn custom_levels_number_from_set_length() {
        let mut set = LevelSet::new();
        set.push(Level::default_level());
        assert_eq!(set.add_custom(vec![vec![1, 2]]).name, "Custom Level 2");
        assert_eq!(set.add_custom(vec![vec![2, 1]]).name, "Custom Level 3");
    }

    #[test]
    fn remove_deletes_by_name() {
        let mut set = LevelSet::new();
        set.push(Level::default_level());
        set.add_custom(vec![vec![1, 2]]);
        assert!(set.remove("Custom Level 2"));
        assert!(!set.remove("Custom Level 2"));
        assert_eq!(set.len(), 1);
        assert!(set.get("Default Level").is_some());
    }

    #[test]
    fn balance_check() {
        assert!(Level::new("ok", [1, 2], vec![vec![1, 2]]).is_balanced());
        assert!(!Level::new("uneven", [1, 3], vec![vec![1, 1, 2]]).is_balanced());
        assert!(!Level::new("empty", [1, 1], vec![vec![0]]).is_balanced());
    }
}
