//! Cell storage for the board.

use std::ops::{Index, IndexMut};

use crate::board::{Cell, Coord, Dimensions};

/// Row-major cell storage addressed by [`Dimensions`] linearization.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell empty.
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = vec![Cell::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Create a grid from already-decoded cells in row-major order.
    /// The caller must supply exactly `dim.total_size()` cells.
    pub(super) fn from_cells(dim: Dimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dim.total_size());
        Self {
            dim,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Get the cell at the given [`Coord`]. Returns `None` if out of bounds.
    pub(super) fn get(&self, coord: Coord) -> Option<Cell> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i).copied())
    }

}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        match self.dim.try_linearize(coord) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is out of bounds for {:?}", coord, self.dim),
        }
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        match self.dim.try_linearize(coord) {
            Some(i) => &mut self.cells[i],
            None => panic!("{:?} is out of bounds for {:?}", coord, self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(Dimensions::new(7, 7));
        assert!(grid.cells.iter().all(|&cell| cell == Cell::Empty));
    }

    #[test]
    fn get_and_index_agree() {
        let mut grid = Grid::new(Dimensions::new(3, 3));
        let coord = Coord::new(1, 2);
        grid[coord] = Cell::Piece(Player::One);
        assert_eq!(grid.get(coord), Some(Cell::Piece(Player::One)));
        assert_eq!(grid[coord], Cell::Piece(Player::One));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
    }
}
