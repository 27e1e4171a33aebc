//! Row stack used while scanning nested rows

/// An open row, from its row-open marker until its close marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFrame {
    /// Line index of the row-open marker
    pub origin_line: usize,
    /// Argument text between `row` and the closing dashes
    pub raw_args: String,
    /// Resolved style per argument. Always empty on the scanner's stack;
    /// set on the frames returned by `resolve_styles`.
    pub resolved_styles: Vec<String>,
}

impl RowFrame {
    pub fn new(origin_line: usize, raw_args: impl Into<String>) -> Self {
        RowFrame {
            origin_line,
            raw_args: raw_args.into(),
            resolved_styles: Vec::new(),
        }
    }
}

/// Last-in-first-out stack of open rows.
///
/// Popping an empty stack is not an error: callers check `top` first and
/// treat a closer with no open row as plain text.
#[derive(Debug, Default, Clone)]
pub struct RowStack {
    frames: Vec<RowFrame>,
}

impl RowStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: RowFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<RowFrame> {
        self.frames.pop()
    }

    /// Innermost open row
    pub fn top(&self) -> Option<&RowFrame> {
        self.frames.last()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pop every remaining frame, innermost first
    pub fn drain_innermost_first(&mut self) -> Vec<RowFrame> {
        let mut drained = Vec::with_capacity(self.frames.len());
        while let Some(frame) = self.frames.pop() {
            drained.push(frame);
        }
        drained
    }
}
