/// Receives the caret position once the host has re-rendered.
pub trait CursorSink {
    /// Select `start..end` in character offsets. A caret is an empty selection.
    fn set_selection(&mut self, start: usize, end: usize);
}

impl<F: FnMut(usize, usize)> CursorSink for F {
    fn set_selection(&mut self, start: usize, end: usize) {
        self(start, end)
    }
}

/// Deferred caret placement.
///
/// Replacing a widget's value usually moves its caret to the end. The host
/// keeps this value until the new text is on screen, then calls
/// [`CursorRestore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the caret is only restored when `apply` is called"]
pub struct CursorRestore {
    offset: usize,
}

impl CursorRestore {
    pub(crate) fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn apply<S: CursorSink + ?Sized>(self, sink: &mut S) {
        sink.set_selection(self.offset, self.offset);
    }
}
