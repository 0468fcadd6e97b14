use common_framework::TextSpan;

/// Mutable state a parser accumulates while consuming tokens.
///
/// `data` is the detector-specific side channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext<D> {
    span: Option<TextSpan>,
    level: usize,
    pub data: D,
}

impl<D> ParseContext<D> {
    /// Creates an empty context around `data`.
    pub fn new(data: D) -> Self {
        Self {
            span: None,
            level: 0,
            data,
        }
    }

    /// The union of every joined token so far, or `None` before the first join.
    pub fn span(&self) -> Option<TextSpan> {
        self.span
    }

    /// Extends the accumulated span over `span`.
    pub fn join(&mut self, span: &TextSpan) {
        match &mut self.span {
            Some(current) => current.join(span),
            None => self.span = Some(*span),
        }
    }

    /// Returns the current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Enters one nesting level.
    pub fn open(&mut self) {
        self.level += 1;
    }

    /// Closes one nesting level.
    ///
    /// Returns true when the closing bracket matched at level 0; the level
    /// is left untouched in that case.
    pub fn close(&mut self) -> bool {
        if self.level == 0 {
            true
        } else {
            self.level -= 1;
            false
        }
    }
}
