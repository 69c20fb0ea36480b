use log::{debug, warn};

use crate::buffer::{EditError, TextBuffer};
use crate::operation::EditOperation;
use crate::undo::UndoHistory;

/// One editing session: a buffer and the history of operations applied to it.
///
/// All access is sequential; callers that share a session across threads are
/// responsible for serializing access to it.
pub struct EditSession {
    buffer: TextBuffer,
    history: UndoHistory,
    recording: Option<(String, Vec<EditOperation>)>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: UndoHistory::new(),
            recording: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            history: UndoHistory::new(),
            recording: None,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Execute a new operation. On success it becomes the newest undoable
    /// entry (or joins the open macro recording); on failure the buffer error
    /// propagates and neither stack changes.
    pub fn execute(&mut self, op: EditOperation) -> Result<(), EditError> {
        op.execute(&mut self.buffer)?;
        debug!("executed: {op}");
        if let Some((_, ops)) = &mut self.recording {
            ops.push(op);
        } else {
            self.history.record(op);
        }
        Ok(())
    }

    /// Undo the newest operation. Returns its description, or `None` when
    /// there is nothing to undo.
    ///
    /// Undo of an operation this session executed cannot fail; if the buffer
    /// still rejects it (only possible when the buffer was mutated behind the
    /// session's back) the failure is logged and the operation is filed as
    /// redoable anyway.
    pub fn undo(&mut self) -> Option<String> {
        let Some(op) = self.history.pop_undo() else {
            debug!("nothing to undo");
            return None;
        };
        if let Err(err) = op.undo(&mut self.buffer) {
            warn!("undo of `{op}` failed: {err}");
        } else {
            debug!("undid: {op}");
        }
        let description = op.to_string();
        self.history.push_redo(op);
        Some(description)
    }

    /// Redo the newest undone operation. Returns its description, or `None`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<String> {
        let Some(op) = self.history.pop_redo() else {
            debug!("nothing to redo");
            return None;
        };
        if let Err(err) = op.execute(&mut self.buffer) {
            warn!("redo of `{op}` failed: {err}");
        } else {
            debug!("redid: {op}");
        }
        let description = op.to_string();
        self.history.push_undo(op);
        Some(description)
    }

    /// Start grouping subsequent operations into one undoable macro. Nested
    /// calls keep the outermost recording, the way transactions group in the
    /// editor history.
    pub fn begin_macro(&mut self, label: impl Into<String>) {
        if self.recording.is_none() {
            self.recording = Some((label.into(), Vec::new()));
        }
    }

    /// Close the open recording. A non-empty recording becomes a single
    /// `Macro` history entry; an empty one is discarded.
    pub fn end_macro(&mut self) {
        if let Some((label, ops)) = self.recording.take() {
            if !ops.is_empty() {
                self.history.record(EditOperation::macro_of(label, ops));
            }
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
