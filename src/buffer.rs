use ropey::Rope;

/// 编辑错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("position {at} out of range (buffer length {len})")]
    OutOfRange { at: usize, len: usize },
}

/// Text content plus a cursor, all offsets are char indices.
///
/// The cursor always stays inside `0..=len()`. Every mutation validates its
/// range before touching the rope, so a rejected edit leaves the buffer
/// untouched.
pub struct TextBuffer {
    content: Rope,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            content: Rope::new(),
            cursor: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            content: Rope::from_str(text),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    pub fn text(&self) -> String {
        self.content.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, at: usize) -> Result<(), EditError> {
        if at > self.len() {
            return Err(EditError::OutOfRange { at, len: self.len() });
        }
        self.cursor = at;
        Ok(())
    }

    /// Clamped read of `count` chars starting at `start`. Used to snapshot
    /// text before a delete or replace removes it.
    pub fn slice_at(&self, start: usize, count: usize) -> String {
        let len = self.len();
        if start >= len {
            return String::new();
        }
        let end = (start + count).min(len);
        self.content.slice(start..end).to_string()
    }

    /// Insert `text` at char offset `at`. Cursor lands after the inserted text.
    pub fn insert(&mut self, at: usize, text: &str) -> Result<(), EditError> {
        let len = self.len();
        if at > len {
            return Err(EditError::OutOfRange { at, len });
        }
        self.content.insert(at, text);
        self.cursor = at + text.chars().count();
        Ok(())
    }

    /// Remove up to `count` chars starting at `start`; the span is clamped to
    /// the end of the buffer. Cursor lands at `start`.
    pub fn delete(&mut self, start: usize, count: usize) -> Result<(), EditError> {
        let len = self.len();
        if count == 0 || start >= len {
            return Err(EditError::OutOfRange { at: start, len });
        }
        let end = (start + count).min(len);
        self.content.remove(start..end);
        self.cursor = start;
        Ok(())
    }

    /// Swap the (clamped) span `start..start+count` for `text` in one
    /// mutation. Cursor lands after the new text.
    ///
    /// `start == len` is allowed only for zero-length spans, so that undoing a
    /// replace that shrank the buffer to exactly `start` chars stays in range.
    pub fn replace(&mut self, start: usize, count: usize, text: &str) -> Result<(), EditError> {
        let len = self.len();
        if start > len || (count > 0 && start >= len) {
            return Err(EditError::OutOfRange { at: start, len });
        }
        let end = (start + count).min(len);
        self.content.remove(start..end);
        self.content.insert(start, text);
        self.cursor = start + text.chars().count();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.content = Rope::new();
        self.cursor = 0;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
