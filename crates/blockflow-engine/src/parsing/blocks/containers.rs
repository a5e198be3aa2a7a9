use super::types::{Anomaly, AnomalyKind};

/// The nesting stack shared by both structural builders.
///
/// Each open block is one frame; the brace builder stores restore depths,
/// the indentation builder stores column widths. Depth bookkeeping and
/// anomaly recording are the same for both.
#[derive(Debug, Clone)]
pub struct DepthStack<F> {
    frames: Vec<F>,
    anomalies: Vec<Anomaly>,
}

impl<F> DepthStack<F> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            anomalies: Vec::new(),
        }
    }

    /// A stack whose bottom frame can never be popped.
    pub fn with_base(base: F) -> Self {
        Self {
            frames: vec![base],
            anomalies: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: F) {
        self.frames.push(frame);
    }

    /// Pops the innermost frame, recording `UnmatchedCloser` if there is none.
    pub fn pop(&mut self, line: usize) -> Option<F> {
        let frame = self.frames.pop();
        if frame.is_none() {
            self.record(line, AnomalyKind::UnmatchedCloser);
        }
        frame
    }

    /// Pops the innermost frame unless it is the last one.
    pub fn pop_above_base(&mut self) -> Option<F> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> Option<&F> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn record(&mut self, line: usize, kind: AnomalyKind) {
        log::warn!("line {line}: {kind}, continuing");
        self.anomalies.push(Anomaly { line, kind });
    }

    pub fn into_anomalies(self) -> Vec<Anomaly> {
        self.anomalies
    }
}

impl<F> Default for DepthStack<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_on_empty_records_unmatched_closer() {
        let mut stack: DepthStack<usize> = DepthStack::new();
        assert_eq!(stack.pop(7), None);
        assert_eq!(
            stack.into_anomalies(),
            vec![Anomaly {
                line: 7,
                kind: AnomalyKind::UnmatchedCloser
            }]
        );
    }

    #[test]
    fn base_frame_survives_pop_above_base() {
        let mut stack = DepthStack::with_base(0usize);
        stack.push(4);
        assert_eq!(stack.pop_above_base(), Some(4));
        assert_eq!(stack.pop_above_base(), None);
        assert_eq!(stack.frame_count(), 1);
        assert!(stack.into_anomalies().is_empty());
    }
}
