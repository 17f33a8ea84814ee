/// Compilation errors.
///
/// Defines the syntax-error taxonomy raised while turning an infix expression
/// into a postfix program. Every error carries the character offset in the
/// source at which the failing token sequence begins, so that callers can
/// point at it with a caret.
pub mod compile_error;
/// Plotting errors.
///
/// Contains the errors raised while reading a plot viewport from its textual
/// form and while writing a rendered plot to its destination.
pub mod plot_error;

pub use compile_error::{CompileError, ErrorKind};
pub use plot_error::{LimitsError, RenderError};
