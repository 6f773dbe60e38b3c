//! Types that make up the game board.

use self::grid::Grid;
pub use self::{
    cell::{Cell, Player},
    dimensions::{Coord, Dimensions},
};

mod cell;
mod dimensions;
mod grid;

/// Offsets to the 8 surrounding cells, in row-major order. Clone range, and
/// the neighborhood converted after a move lands.
fn adjacent_offsets() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .flat_map(|drow| (-1..=1).map(move |dcol| (drow, dcol)))
        .filter(|&offset| offset != (0, 0))
}

/// Offsets to cells at Chebyshev distance exactly 2, in row-major order.
/// Jump range.
fn jump_offsets() -> impl Iterator<Item = (isize, isize)> {
    (-2..=2)
        .flat_map(|drow| (-2..=2).map(move |dcol| (drow, dcol)))
        .filter(|&(drow, dcol): &(isize, isize)| drow.abs().max(dcol.abs()) == 2)
}

/// A game board: the grid of cell values plus the spatial rules of Ataxx
/// (adjacency, jump range, traversability, piece counting). The board has no
/// notion of turns; see [`Game`][crate::game::Game] for turn arbitration.
///
/// The grid is only ever mutated through [`apply_move`][Board::apply_move];
/// everything else is read access for the presentation layer.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create an empty board of the given dimensions.
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
        }
    }

    /// Create a board from already-decoded cells in row-major order, as
    /// produced by [`Level::to_board`][crate::level::Level::to_board]. Piece
    /// parity is not validated here; layouts are taken as given.
    pub fn from_cells(dim: Dimensions, cells: Vec<Cell>) -> Self {
        Self {
            grid: Grid::from_cells(dim, cells),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dim
    }

    /// Get the cell at the given coordinate. Returns `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// Whether the coordinate is within bounds and traversable (not an
    /// obstacle).
    pub fn is_open(&self, coord: Coord) -> bool {
        matches!(self.grid.get(coord), Some(cell) if !cell.is_blocked())
    }

    /// All destinations a piece at `pos` could move to: the union of clone
    /// moves (the 8 surrounding cells) and jump moves (Chebyshev distance
    /// exactly 2), restricted to open, empty cells. Offset iteration order is
    /// deterministic and duplicates are impossible by construction.
    pub fn legal_moves(&self, pos: Coord) -> Vec<Coord> {
        let dim = self.grid.dim;
        let mut moves = Vec::new();
        for (drow, dcol) in adjacent_offsets().chain(jump_offsets()) {
            if let Some(to) = pos.offset(drow, dcol, dim) {
                if self.grid[to] == Cell::Empty {
                    moves.push(to);
                }
            }
        }
        moves
    }

    /// Execute a move for `player` and return the converted coordinates.
    ///
    /// A move at Chebyshev distance greater than 1 is a jump and vacates the
    /// origin; a clone leaves the origin occupied by the moving player. After
    /// the destination is filled, every one of the 8 neighbors of `to` that
    /// holds an opponent piece flips to `player`. Conversion runs identically
    /// for clone and jump moves.
    ///
    /// The move is not validated; callers are expected to propose only
    /// destinations from [`legal_moves`][Board::legal_moves].
    pub fn apply_move(&mut self, from: Coord, to: Coord, player: Player) -> Vec<Coord> {
        if from.chebyshev(to) > 1 {
            self.grid[from] = Cell::Empty;
        }
        self.grid[to] = Cell::Piece(player);

        let dim = self.grid.dim;
        let mut converted = Vec::new();
        for (drow, dcol) in adjacent_offsets() {
            if let Some(adj) = to.offset(drow, dcol, dim) {
                if self.grid[adj] == Cell::Piece(player.opponent()) {
                    self.grid[adj] = Cell::Piece(player);
                    converted.push(adj);
                }
            }
        }
        converted
    }

    /// Total occupied-cell tally for each player, as
    /// `(player 1 count, player 2 count)`.
    pub fn piece_counts(&self) -> (usize, usize) {
        let mut counts = (0, 0);
        for &cell in self.grid.cells.iter() {
            match cell {
                Cell::Piece(Player::One) => counts.0 += 1,
                Cell::Piece(Player::Two) => counts.1 += 1,
                _ => {}
            }
        }
        counts
    }

    /// Whether `player` has at least one legal move anywhere on the board.
    /// Scans in row-major order and short-circuits on the first hit.
    pub fn has_any_move(&self, player: Player) -> bool {
        self.grid.dim.iter_coordinates().flatten().any(|pos| {
            self.grid[pos] == Cell::Piece(player) && !self.legal_moves(pos).is_empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_values(values: &[&[u8]]) -> Board {
        let dim = Dimensions::new(values.len(), values[0].len());
        let cells = values
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| Cell::from_value(v).unwrap())
            .collect();
        Board::from_cells(dim, cells)
    }

    #[test]
    fn legal_moves_stay_on_open_empty_cells() {
        let board = board_from_values(&[
            &[1, 0, 0, 0, 0, 0, 2],
            &[0, 9, 0, 0, 0, 0, 0],
            &[0, 0, 2, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[2, 0, 0, 0, 0, 0, 1],
        ]);
        let dim = board.dimensions();
        for pos in dim.iter_coordinates().flatten() {
            for to in board.legal_moves(pos) {
                assert!(dim.contains(to));
                assert_eq!(board.get(to), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn legal_moves_reach_exactly_chebyshev_one_and_two() {
        let board = board_from_values(&[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ]);
        let pos = Coord::new(3, 3);
        let moves = board.legal_moves(pos);
        // 8 clone destinations plus 16 jump destinations on an open board.
        assert_eq!(moves.len(), 24);
        for to in board.dimensions().iter_coordinates().flatten() {
            let reachable = moves.contains(&to);
            let dist = pos.chebyshev(to);
            assert_eq!(
                reachable,
                dist == 1 || dist == 2,
                "distance {} to {:?}",
                dist,
                to
            );
        }
    }

    #[test]
    fn corner_piece_moves() {
        let board = board_from_values(&[
            &[1, 0, 0, 0, 0, 0, 2],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[2, 0, 0, 0, 0, 0, 1],
        ]);
        let moves = board.legal_moves(Coord::new(0, 0));
        assert!(moves.contains(&Coord::new(1, 1)));
        assert!(moves.contains(&Coord::new(0, 2)));
        assert!(moves.contains(&Coord::new(2, 0)));
        assert!(moves.contains(&Coord::new(2, 2)));
        // 3 clone + 5 jump destinations fit on the board from a corner.
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn obstacles_and_occupied_cells_excluded() {
        let board = board_from_values(&[
            &[1, 9, 0],
            &[2, 0, 0],
            &[0, 0, 0],
        ]);
        let moves = board.legal_moves(Coord::new(0, 0));
        assert!(!moves.contains(&Coord::new(0, 1)), "obstacle");
        assert!(!moves.contains(&Coord::new(1, 0)), "occupied");
        assert!(moves.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn clone_keeps_origin() {
        let mut board = board_from_values(&[
            &[1, 0, 0],
            &[0, 0, 0],
            &[0, 0, 0],
        ]);
        board.apply_move(Coord::new(0, 0), Coord::new(1, 1), Player::One);
        assert_eq!(board.get(Coord::new(0, 0)), Some(Cell::Piece(Player::One)));
        assert_eq!(board.get(Coord::new(1, 1)), Some(Cell::Piece(Player::One)));
    }

    #[test]
    fn jump_vacates_origin() {
        let mut board = board_from_values(&[
            &[1, 0, 0],
            &[0, 0, 0],
            &[0, 0, 0],
        ]);
        board.apply_move(Coord::new(0, 0), Coord::new(2, 2), Player::One);
        assert_eq!(board.get(Coord::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(Coord::new(2, 2)), Some(Cell::Piece(Player::One)));
    }

    #[test]
    fn conversion_flips_all_adjacent_opponents_and_nothing_else() {
        let mut board = board_from_values(&[
            &[1, 0, 0, 0],
            &[0, 0, 2, 0],
            &[0, 2, 2, 2],
            &[0, 0, 2, 0],
        ]);
        let converted = board.apply_move(Coord::new(0, 0), Coord::new(1, 1), Player::One);
        // Neighbors of (1,1) holding player 2: (1,2), (2,1), (2,2).
        assert_eq!(converted.len(), 3);
        for &coord in &[Coord::new(1, 2), Coord::new(2, 1), Coord::new(2, 2)] {
            assert!(converted.contains(&coord));
            assert_eq!(board.get(coord), Some(Cell::Piece(Player::One)));
        }
        // Out of range of the landing cell; untouched.
        assert_eq!(board.get(Coord::new(2, 3)), Some(Cell::Piece(Player::Two)));
        assert_eq!(board.get(Coord::new(3, 2)), Some(Cell::Piece(Player::Two)));
    }

    #[test]
    fn conversion_runs_for_jumps_too() {
        let mut board = board_from_values(&[
            &[1, 0, 0],
            &[0, 0, 2],
            &[0, 0, 0],
        ]);
        let converted = board.apply_move(Coord::new(0, 0), Coord::new(0, 2), Player::One);
        assert_eq!(converted, vec![Coord::new(1, 2)]);
        assert_eq!(board.get(Coord::new(1, 2)), Some(Cell::Piece(Player::One)));
    }

    #[test]
    fn piece_counts_skip_obstacles() {
        let board = board_from_values(&[
            &[1, 9, 2],
            &[1, 9, 2],
            &[0, 1, 0],
        ]);
        assert_eq!(board.piece_counts(), (3, 2));
    }

    #[test]
    fn has_any_move_short_circuits_correctly() {
        // Everything within jump range of player 1's only piece is blocked.
        let board = board_from_values(&[
            &[1, 9, 9, 0],
            &[9, 9, 9, 0],
            &[9, 9, 9, 2],
        ]);
        assert!(!board.has_any_move(Player::One));
        assert!(board.has_any_move(Player::Two));
    }
}
