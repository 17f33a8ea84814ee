//! # funcplot
//!
//! funcplot compiles arithmetic expressions in one variable `x` into postfix
//! programs, evaluates them, and plots them as PostScript documents.
//! Expressions support `+ - * / ^`, unary signs, parentheses and a fixed set
//! of elementary functions.
//!
//! ```
//! use funcplot::{compile, evaluate};
//!
//! let program = compile("2*abs(x-3)").unwrap();
//! assert_eq!(evaluate(&program, 1.5), 3.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types of compilation and plotting.
///
/// This module defines every failure the library reports: the syntax errors
/// raised while compiling an expression, and the errors raised while reading
/// a plot viewport or writing a plot. Errors carry enough context for user
/// feedback, including the offset of a syntax error in its source.
///
/// # Responsibilities
/// - Classifies syntax errors into a closed set of kinds.
/// - Locates syntax errors by character offset and renders a caret marker.
/// - Wraps I/O failures raised while writing plots.
pub mod error;
/// Defines the compiled form of an expression.
///
/// This module declares operators, functions, the postfix instructions built
/// from them, and the [`Program`] that holds a compiled expression.
///
/// # Responsibilities
/// - Names the operators and functions an expression may use.
/// - Stores programs in postfix order together with their stack depth.
/// - Prints programs in their postfix listing.
pub mod instruction;
/// Compiles and evaluates expressions.
///
/// This module ties the lexer, the shunting-yard compiler and the postfix
/// evaluator together. It exposes the entry points that turn source text
/// into a program and a program into a number.
///
/// # Responsibilities
/// - Tokenizes expressions.
/// - Resolves precedence, associativity and unary signs into postfix order.
/// - Executes programs against a value of `x`.
pub mod interpreter;
/// Samples and draws expression curves.
///
/// # Responsibilities
/// - Reads and validates the plot viewport.
/// - Samples a program across the viewport and clips the curve to it.
/// - Writes the result as a PostScript page.
pub mod plot;
/// General utilities for numeric conversion and source text.
///
/// # Responsibilities
/// - Safely converts `usize` values to `f64` without silent data loss.
/// - Converts byte offsets into character offsets.
pub mod util;

pub use error::{CompileError, ErrorKind};
pub use instruction::{Function, Instruction, Operator, Program};
pub use interpreter::{compiler::compile, evaluator::evaluate};
