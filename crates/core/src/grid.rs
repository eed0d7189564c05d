//! Grid module - the bitwise mosaic
//!
//! A square grid where cell (row, col) is set when `row & col == 0`.
//! Uses a flat vector in row-major order (row * side + col).
//! The result is the Sierpinski triangle: the first row and column are always
//! set, and the grid is symmetric because `&` is commutative.

/// The rule behind every cell: NOT (row AND col), on the integer coordinates.
#[inline(always)]
pub const fn cell_at(row: usize, col: usize) -> bool {
    row & col == 0
}

/// An immutable side x side grid of boolean cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    /// Flat array of cells, row-major order (row * side + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Build the full grid for `side`.
    ///
    /// O(side²) time and memory. Bounds on `side` are the caller's business.
    pub fn generate(side: usize) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            cells.extend((0..side).map(|col| cell_at(row, col)));
        }
        Self { side, cells }
    }

    /// Side length (the grid is side x side)
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(row * self.side + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.side {
            return None;
        }
        let start = row * self.side;
        Some(&self.cells[start..start + self.side])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks_exact panics on 0, and an empty grid has no rows anyway.
        self.cells.chunks_exact(self.side.max(1))
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of set cells.
    ///
    /// For a power-of-two side `2^k` this is `3^k`.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Generate the grid for `side`. Same as [`Grid::generate`].
pub fn generate(side: usize) -> Grid {
    Grid::generate(side)
}
