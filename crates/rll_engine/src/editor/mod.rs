//! Edit dispatch: couples one grid with its undo log.

pub mod undo_stack;
pub use undo_stack::*;

use crate::{DirectionLinks, Position, Size, Tile, TileGrid, codec};

/// Owns the level being edited: the grid, its direction links and the undo
/// stack. The editing surface funnels every mutation through here so that
/// each effective cell edit is recorded exactly once.
pub struct EditState {
    grid: TileGrid,
    links: DirectionLinks,
    undo_stack: UndoStack,
}

impl EditState {
    pub fn new(size: impl Into<Size>) -> Self {
        Self::from_grid(TileGrid::new(size))
    }

    pub fn from_grid(grid: TileGrid) -> Self {
        Self {
            grid,
            links: DirectionLinks::NONE,
            undo_stack: UndoStack::new(),
        }
    }

    pub fn get_grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn get_links(&self) -> DirectionLinks {
        self.links
    }

    pub fn set_links(&mut self, links: DirectionLinks) {
        self.links = links;
    }

    /// Paints `tile` at `pos`, recording the edit for undo.
    ///
    /// Returns `false` for no-ops (cell already holds `tile`, or `pos` is
    /// out of bounds); those leave the undo stack untouched.
    pub fn set_tile(&mut self, pos: impl Into<Position>, tile: Tile) -> bool {
        let pos = pos.into();
        if let Some(previous) = self.grid.set(pos, tile) {
            self.undo_stack.push(EditAction { pos, previous });
            return true;
        }
        false
    }

    /// Overwrites every cell with Air. Not undoable; earlier actions stay
    /// on the stack and still apply to their cells.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
    }

    /// Resizes the grid. Not undoable; undoing an edit whose cell was cut
    /// off is a no-op for that cell.
    pub fn resize_grid(&mut self, size: impl Into<Size>) {
        self.grid.resize(size);
    }

    /// Replaces grid and links with the decoded content of `text`.
    ///
    /// On a decode error nothing changes, the level being edited stays
    /// exactly as it was.
    pub fn load_encoded(&mut self, text: &str) -> crate::Result<()> {
        let (grid, links) = codec::decode(text)?;
        self.grid = grid;
        self.links = links;
        Ok(())
    }

    /// Encodes the current grid with the current links, ready for the
    /// store.
    pub fn encode(&self) -> String {
        codec::encode(&self.grid, Some(&self.links))
    }

    /// Drops the undo history. Call after a successful save; history does
    /// not survive a save.
    pub fn clear_undo_stack(&mut self) {
        self.undo_stack.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }
}

impl UndoState for EditState {
    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(action) => {
                self.grid.set_cell(action.pos, action.previous);
                true
            }
            None => false,
        }
    }
}
