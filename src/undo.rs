use crate::operation::EditOperation;

/// Linear undo/redo history. Recording a new operation discards any redo
/// path, so the history is always a single timeline.
pub struct UndoHistory {
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record a freshly executed operation. Clears the redo stack.
    pub fn record(&mut self, op: EditOperation) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }

    pub fn pop_undo(&mut self) -> Option<EditOperation> {
        self.undo_stack.pop()
    }

    /// Re-file an undone operation so it can be redone. Does not clear
    /// anything.
    pub fn push_redo(&mut self, op: EditOperation) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<EditOperation> {
        self.redo_stack.pop()
    }

    /// Re-file a redone operation back onto the undo stack.
    pub fn push_undo(&mut self, op: EditOperation) {
        self.undo_stack.push(op);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undoable operations, oldest first.
    pub fn undo_ops(&self) -> &[EditOperation] {
        &self.undo_stack
    }

    /// Redoable operations, oldest first.
    pub fn redo_ops(&self) -> &[EditOperation] {
        &self.redo_stack
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}
