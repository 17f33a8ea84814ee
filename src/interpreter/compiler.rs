/// The shunting-yard pass.
///
/// Scans the token stream once from left to right, keeping operators and
/// function names on a working stack until their operands have been emitted,
/// and reports the first syntax error together with its source offset.
pub mod core;

/// Operator priorities.
///
/// Compares the entry on top of the operator working stack with an incoming
/// operator to decide whether the entry is emitted first.
pub mod precedence;

/// The growing program.
///
/// Appends instructions while tracking the evaluation stack depth, which
/// rejects any operator or function that would run without its operands.
pub mod emitter;

pub use self::core::compile;
