use crate::{Position, Size, Tile};

/// One grid cell: `None` is the unset/blank state a fresh grid starts in,
/// distinct from an explicitly painted [`Tile::Air`]. Both encode to the
/// same symbol, but the undo log restores the exact prior state.
pub type Cell = Option<Tile>;

/// The live rows × cols matrix of tile cells.
///
/// Always rectangular with at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: Size,
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Creates a grid with every cell unset.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        assert!(size.width > 0 && size.height > 0, "invalid grid size {size}");
        TileGrid {
            size,
            cells: vec![None; (size.width * size.height) as usize],
        }
    }

    pub(crate) fn from_tiles(size: Size, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (size.width * size.height) as usize);
        TileGrid {
            size,
            cells: tiles.into_iter().map(Some).collect(),
        }
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.size.width || pos.y >= self.size.height {
            return None;
        }
        Some((pos.y * self.size.width + pos.x) as usize)
    }

    /// The cell at `pos`; unset and out-of-bounds both read as `None`.
    pub fn get(&self, pos: impl Into<Position>) -> Cell {
        self.index(pos.into()).and_then(|i| self.cells[i])
    }

    /// The symbol the cell at `pos` encodes to (unset cells encode as Air).
    pub fn symbol(&self, pos: impl Into<Position>) -> char {
        self.get(pos).unwrap_or(Tile::Air).symbol()
    }

    /// Paints `tile` at `pos` and returns the prior cell state, for the
    /// caller to push onto the undo stack.
    ///
    /// Returns `None` without touching anything when the cell already holds
    /// `tile` or `pos` is out of bounds, so no-op edits never produce undo
    /// entries.
    pub fn set(&mut self, pos: impl Into<Position>, tile: Tile) -> Option<Cell> {
        let index = self.index(pos.into())?;
        let previous = self.cells[index];
        if previous == Some(tile) {
            return None;
        }
        self.cells[index] = Some(tile);
        Some(previous)
    }

    /// Writes a cell state unconditionally, including back to unset.
    /// Out-of-bounds writes are ignored. Used by undo restoration.
    pub fn set_cell(&mut self, pos: impl Into<Position>, cell: Cell) {
        if let Some(index) = self.index(pos.into()) {
            self.cells[index] = cell;
        }
    }

    /// Overwrites every cell with an explicitly painted Air tile.
    pub fn clear(&mut self) {
        self.cells.fill(Some(Tile::Air));
    }

    /// Changes the grid dimensions.
    ///
    /// Cells that exist at the same coordinates in the old grid keep their
    /// state, newly introduced cells default to Air, removed cells are
    /// discarded. Repeated calls with the same size leave the grid
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn resize(&mut self, size: impl Into<Size>) {
        let size = size.into();
        assert!(size.width > 0 && size.height > 0, "invalid grid size {size}");
        if size == self.size {
            return;
        }
        let mut cells = vec![Some(Tile::Air); (size.width * size.height) as usize];
        for y in 0..size.height.min(self.size.height) {
            for x in 0..size.width.min(self.size.width) {
                cells[(y * size.width + x) as usize] = self.cells[(y * self.size.width + x) as usize];
            }
        }
        self.size = size;
        self.cells = cells;
    }
}
