/// The postfix virtual machine.
///
/// Runs a compiled program over a private value stack for one binding of
/// `x` and returns the value left on top.
pub mod core;

/// Unary function evaluation.
///
/// Maps each supported function keyword to its floating-point definition.
pub mod function;

/// Binary operator evaluation.
///
/// Applies the arithmetic operators to operands in the order they were
/// written.
pub mod operator;

pub use self::core::evaluate;
