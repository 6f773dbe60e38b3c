use std::fmt;

/// Position of a cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Construct a [`Coord`] from the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another coordinate: the number of king steps
    /// between them. Distance 1 is clone range, distance 2 is jump range.
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// Offset this coordinate by a signed delta, returning `None` if the
    /// result falls outside `dim`.
    pub fn offset(self, drow: isize, dcol: isize, dim: Dimensions) -> Option<Coord> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        let coord = Coord::new(row, col);
        if dim.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coord {
    /// Construct a [`Coord`] from a `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    /// Convert the [`Coord`] into a `(row, col)` pair.
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Dimensions of a board. Handles bounds checks and linearizing coordinates
/// into row-major cell storage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if either is 0 or if `rows * cols` exceeds `usize::max_value()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None if rows == 0 || cols == 0 => {
                panic!("Dimensions must be nonzero, got {}x{}", rows, cols)
            }
            None => panic!(
                "Dimensions too large: {} * {} > {}",
                rows,
                cols,
                usize::max_value()
            ),
        }
    }

    /// Create new [`Dimensions`], returning `None` if either side is 0 or
    /// `rows * cols` exceeds `usize::max_value()`.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the given coordinate is within bounds.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Convert a coordinate to a linear index into row-major storage.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this board. Each row is an iterator over
    /// the coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coord>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }
}
