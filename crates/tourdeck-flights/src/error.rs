use serde::Serialize;
use thiserror::Error;

/// A line of pasted booking text that could not be read as a flight segment.
///
/// Issues are data, not control flow: the paste parser records them and keeps
/// going, so a garbled line never loses the segments around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("line {line}: {reason}")]
pub struct ParseIssue {
    /// 1-based line number within the pasted text.
    pub line: usize,
    pub reason: String,
}

impl ParseIssue {
    pub(crate) fn unrecognized(line: usize, content: &str) -> Self {
        Self {
            line,
            reason: format!("unrecognized segment line: {content:?}"),
        }
    }
}
