use std::collections::TryReserveError;

use thiserror::Error;

/// Result type used by the compiler.
pub type CompileResult<T> = Result<T, CompileError>;

/// Classifies why an expression could not be compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// An opening parenthesis was never closed, or a closing one was never
    /// opened.
    #[error("missing parenthesis in supplied expression")]
    MissingParenthesis,
    /// A numeric literal has an exponent marker that is not followed by
    /// digits.
    #[error("wrong floating point value notation")]
    RealNotation,
    /// Two adjacent operators that cannot be chained, such as `++`.
    #[error("operator chain not recognized")]
    OperatorFrequency,
    /// A function name that is not immediately followed by a parenthesised
    /// argument.
    #[error("function argument not enclosed in parenthesis")]
    FunctionParenthesis,
    /// A binary operator lacking one of its operands.
    #[error("missing binary operator operands")]
    BinaryOperatorOperands,
    /// A character that starts no known token.
    #[error("invalid character in supplied expression")]
    InvalidCharacter,
    /// A token appeared where the expression structure does not allow it.
    #[error("unexpected symbol in supplied expression")]
    UnexpectedSymbol,
    /// The expression is empty.
    #[error("nothing to parse")]
    NothingToParse,
    /// One of the internal stacks could not grow.
    #[error("memory allocation failed")]
    MemoryError,
}

/// An error produced by [`compile`](crate::compile).
///
/// The offset counts characters (not bytes) from the start of the source and
/// is absent only for errors that are not tied to a position, namely
/// [`ErrorKind::NothingToParse`] and [`ErrorKind::MemoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("syntax error: {kind}{}", .offset.map(|at| format!(" at offset {at}")).unwrap_or_default())]
pub struct CompileError {
    kind:   ErrorKind,
    offset: Option<usize>,
}

impl CompileError {
    /// Creates an error of the given kind located at a character offset.
    #[must_use]
    pub const fn at(kind: ErrorKind, offset: usize) -> Self {
        Self { kind,
               offset: Some(offset) }
    }

    /// Creates an error of the given kind that has no source position.
    #[must_use]
    pub const fn unlocated(kind: ErrorKind) -> Self {
        Self { kind,
               offset: None }
    }

    /// The class of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Character offset of the failure, if the error has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Renders the source with a `^` marker under the failing position.
    ///
    /// Returns `None` when the error has no offset.
    ///
    /// # Example
    /// ```
    /// use funcplot::compile;
    ///
    /// let source = "2*sin5";
    /// let err = compile(source).unwrap_err();
    ///
    /// assert_eq!(err.caret(source).unwrap(), "  2*sin5\n       ^");
    /// ```
    #[must_use]
    pub fn caret(&self, source: &str) -> Option<String> {
        self.offset
            .map(|at| format!("  {source}\n  {}^", " ".repeat(at)))
    }
}

impl From<TryReserveError> for CompileError {
    fn from(_: TryReserveError) -> Self {
        Self::unlocated(ErrorKind::MemoryError)
    }
}
