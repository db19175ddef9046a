use super::cell::GridCell;

/// Flat row-major storage for a `width x height` block of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: GridCell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn is_in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn set(&mut self, coord: (u16, u16), cell: GridCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Sets every cell of column `x` to `cell`.
    pub fn fill_column(&mut self, x: u16, cell: GridCell) {
        (0..self.height).for_each(|y| self.set((x, y), cell));
    }

    /// Sets every cell of row `y` to `cell`.
    pub fn fill_row(&mut self, y: u16, cell: GridCell) {
        let start = self.ravel_index(0, y);
        self.data[start..start + self.width as usize].fill(cell);
    }

    /// Returns row `y` as a slice.
    pub fn row(&self, y: u16) -> &[GridCell] {
        let start = self.ravel_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.data
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 4, GridCell::Path);
        grid.set((2, 3), GridCell::Wall);
        assert_eq!(grid[(2, 3)], GridCell::Wall);
        assert_eq!(grid.cells()[3 * 5 + 2], GridCell::Wall);
    }

    #[test]
    fn test_fill_row_and_column() {
        let mut grid = Grid::new(4, 3, GridCell::Path);
        grid.fill_row(1, GridCell::Wall);
        grid.fill_column(3, GridCell::Wall);
        assert!(grid.row(1).iter().all(|c| c.is_wall()));
        assert!((0..3).all(|y| grid[(3, y)].is_wall()));
        assert_eq!(grid[(0, 0)], GridCell::Path);
        assert_eq!(grid[(2, 2)], GridCell::Path);
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5, 5, GridCell::Wall);
        assert!(!grid.is_in_bounds(5, 5));
        assert!(!grid.is_in_bounds(0, 5));
        assert!(!grid.is_in_bounds(5, 0));
        assert!(grid.is_in_bounds(4, 4));
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(4, 2));
        assert!(!grid.is_boundary(2, 2));
    }
}
