use std::fmt;
use std::io;
use std::path::PathBuf;

/// Structural errors found by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A `]` appeared with no open loop to close.
    #[error("unexpected closing bracket at offset {offset}")]
    UnbalancedClose { offset: usize },

    /// Input ended with `open` loops still open. `offset` is the outermost unclosed `[`.
    #[error("excessive opening brackets: {open} unclosed, outermost at offset {offset}")]
    UnbalancedOpen { offset: usize, open: usize },
}

impl ValidationError {
    /// Byte offset of the offending bracket in the source.
    pub fn offset(&self) -> usize {
        match self {
            ValidationError::UnbalancedClose { offset } => *offset,
            ValidationError::UnbalancedOpen { offset, .. } => *offset,
        }
    }

    pub fn kind(&self) -> UnmatchedBracketKind {
        match self {
            ValidationError::UnbalancedClose { .. } => UnmatchedBracketKind::Close,
            ValidationError::UnbalancedOpen { .. } => UnmatchedBracketKind::Open,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    Open,
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'['"),
            UnmatchedBracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Every way a single `bf2js` invocation can fail. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum Bf2JsError {
    #[error("missing required argument <{name}>")]
    MissingArgument { name: &'static str },

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Bf2JsError {
    /// Process exit status for this failure: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Bf2JsError::MissingArgument { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let close = ValidationError::UnbalancedClose { offset: 3 };
        assert_eq!(close.to_string(), "unexpected closing bracket at offset 3");

        let open = ValidationError::UnbalancedOpen { offset: 0, open: 2 };
        assert!(open.to_string().starts_with("excessive opening brackets"));
        assert_eq!(open.offset(), 0);
        assert_eq!(open.kind(), UnmatchedBracketKind::Open);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Bf2JsError::MissingArgument { name: "INPUT" }.exit_code(), 2);
        let err: Bf2JsError = ValidationError::UnbalancedClose { offset: 0 }.into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "unexpected closing bracket at offset 0");
    }
}
