use crate::{Cell, Position};

/// Everything needed to invert exactly one cell mutation.
///
/// `previous == None` means the cell was unset before the edit; undoing
/// restores the blank state rather than a painted Air tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditAction {
    pub pos: Position,
    pub previous: Cell,
}

/// LIFO log of reversible single-cell edits, unbounded, no redo.
///
/// Cleared in full when a save completes; once popped an action is gone.
#[derive(Debug, Default)]
pub struct UndoStack {
    actions: Vec<EditAction>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one action. Call once per effective grid edit, never for
    /// no-ops.
    pub fn push(&mut self, action: EditAction) {
        self.actions.push(action);
    }

    /// Removes and returns the most recent action.
    pub fn pop(&mut self) -> Option<EditAction> {
        self.actions.pop()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

pub trait UndoState {
    fn can_undo(&self) -> bool;

    /// Reverts the most recent edit; `false` when there is nothing to undo.
    fn undo(&mut self) -> bool;
}
