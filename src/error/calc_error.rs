use crate::error::{ErrorCategory, ErrorKind};

/// Result type shared by the lexer, parser and evaluator.
pub type CalcResult<T> = Result<T, CalcError>;

/// A failure raised by any stage of the pipeline.
///
/// `position` is the character offset in the source text, or `None` when the
/// failure has no single location (for example the input ended early).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error{}: {kind}", location(.position))]
pub struct CalcError {
    /// What went wrong, including the message arguments.
    pub kind:     ErrorKind,
    /// Character offset in the source, if there is one.
    pub position: Option<usize>,
}

fn location(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |p| format!(" at position {p}"))
}

impl CalcError {
    /// Creates an error located at `position`.
    #[must_use]
    pub const fn at(kind: ErrorKind, position: usize) -> Self {
        Self { kind,
               position: Some(position) }
    }

    /// Creates an error with no source location.
    #[must_use]
    pub const fn unlocated(kind: ErrorKind) -> Self {
        Self { kind,
               position: None }
    }

    /// Returns the stage this error was raised by.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns the stable string code of this error, e.g. `"InvalidToken"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// True when the error reports a defect in the calculator rather than bad
    /// input.
    ///
    /// # Example
    /// ```
    /// use numerate::calculate;
    ///
    /// let err = calculate("(1 + 2").unwrap_err();
    /// assert!(!err.is_internal());
    /// assert_eq!(err.code(), "MissingCloseParenthesis");
    /// ```
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.category(), ErrorCategory::Internal)
    }
}
