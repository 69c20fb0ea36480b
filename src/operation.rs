use std::fmt;

use crate::buffer::{EditError, TextBuffer};

/// One reversible edit. Delete and Replace snapshot the text they remove at
/// construction time, so undo never has to consult the buffer for anything
/// that is already gone.
#[derive(Clone, Debug)]
pub enum EditOperation {
    Insert {
        at: usize,
        text: String,
    },
    Delete {
        start: usize,
        count: usize,
        captured: String,
    },
    Replace {
        start: usize,
        count: usize,
        text: String,
        captured: String,
    },
    Macro {
        label: String,
        ops: Vec<EditOperation>,
    },
}

impl EditOperation {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        EditOperation::Insert {
            at,
            text: text.into(),
        }
    }

    /// Snapshot the doomed span from `buffer` now; the operation is
    /// self-sufficient from here on.
    pub fn delete(buffer: &TextBuffer, start: usize, count: usize) -> Self {
        EditOperation::Delete {
            start,
            count,
            captured: buffer.slice_at(start, count),
        }
    }

    pub fn replace(
        buffer: &TextBuffer,
        start: usize,
        count: usize,
        text: impl Into<String>,
    ) -> Self {
        EditOperation::Replace {
            start,
            count,
            text: text.into(),
            captured: buffer.slice_at(start, count),
        }
    }

    pub fn macro_of(label: impl Into<String>, ops: Vec<EditOperation>) -> Self {
        EditOperation::Macro {
            label: label.into(),
            ops,
        }
    }

    /// Append a child to a macro before its first execution. No-op on other
    /// variants.
    pub fn push(&mut self, op: EditOperation) {
        if let EditOperation::Macro { ops, .. } = self {
            ops.push(op);
        }
    }

    pub fn execute(&self, buffer: &mut TextBuffer) -> Result<(), EditError> {
        match self {
            EditOperation::Insert { at, text } => buffer.insert(*at, text),
            EditOperation::Delete { start, count, .. } => buffer.delete(*start, *count),
            EditOperation::Replace {
                start, count, text, ..
            } => buffer.replace(*start, *count, text),
            EditOperation::Macro { ops, .. } => {
                for op in ops {
                    op.execute(buffer)?;
                }
                Ok(())
            }
        }
    }

    /// Exact inverse of the most recent `execute`. Children of a macro are
    /// unwound in reverse order, otherwise offsets captured by later children
    /// would no longer line up.
    pub fn undo(&self, buffer: &mut TextBuffer) -> Result<(), EditError> {
        match self {
            EditOperation::Insert { at, text } => {
                let count = text.chars().count();
                if count == 0 {
                    return Ok(());
                }
                buffer.delete(*at, count)
            }
            EditOperation::Delete { start, captured, .. } => buffer.insert(*start, captured),
            EditOperation::Replace {
                start,
                text,
                captured,
                ..
            } => buffer.replace(*start, text.chars().count(), captured),
            EditOperation::Macro { ops, .. } => {
                for op in ops.iter().rev() {
                    op.undo(buffer)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOperation::Insert { at, text } => write!(f, "insert {text:?} at {at}"),
            EditOperation::Delete { start, count, .. } => {
                write!(f, "delete {count} chars at {start}")
            }
            EditOperation::Replace {
                start, count, text, ..
            } => write!(f, "replace {count} chars at {start} with {text:?}"),
            EditOperation::Macro { label, ops } => {
                write!(f, "macro {label:?} ({} ops)", ops.len())
            }
        }
    }
}
