//! Undoable text-edit engine: a rope-backed buffer, reversible edit
//! operations that snapshot their own undo data, and a linear undo/redo
//! history driven by an editing session.

pub mod buffer;
pub mod operation;
pub mod session;
pub mod undo;

#[cfg(test)]
mod tests;

pub use buffer::{EditError, TextBuffer};
pub use operation::EditOperation;
pub use session::EditSession;
pub use undo::UndoHistory;
