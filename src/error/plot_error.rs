use thiserror::Error;

/// Errors raised while reading a viewport in `xmin:xmax:ymin:ymax` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    /// The text did not split into exactly four fields.
    #[error("expected 4 limits in xmin:xmax:ymin:ymax format, found {found}")]
    FieldCount {
        /// Number of `:`-separated fields that were found.
        found: usize,
    },
    /// A field is not a number.
    #[error("limit '{field}' is not a number")]
    InvalidNumber {
        /// The offending field.
        field: String,
    },
    /// A field parsed to infinity or NaN.
    #[error("limit '{field}' is not finite")]
    NonFinite {
        /// The offending field.
        field: String,
    },
    /// The lower bound of an axis is not below its upper bound.
    #[error("empty {axis} range: minimum must be smaller than maximum")]
    EmptyRange {
        /// The axis name, `x` or `y`.
        axis: char,
    },
}

/// Errors raised while writing a plot document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The destination rejected a write.
    #[error("failed to write plot: {0}")]
    Io(#[from] std::io::Error),
}
