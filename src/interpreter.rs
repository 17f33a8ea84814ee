/// The compiler module turns infix text into a postfix program.
///
/// It drives the lexer over the source and resolves operator precedence with
/// the shunting-yard algorithm, producing a [`Program`](crate::Program) or
/// the first syntax error with its offset.
///
/// # Responsibilities
/// - Orders operators by priority and associativity.
/// - Desugars unary signs and binds functions to their parenthesised
///   argument.
/// - Classifies syntax errors and locates them in the source.
pub mod compiler;
/// The evaluator module executes compiled programs.
///
/// A program is run against one value of `x` on a private stack, so the same
/// program can be evaluated repeatedly and concurrently.
///
/// # Responsibilities
/// - Executes constants, the variable, operators and functions in postfix
///   order.
/// - Follows IEEE float semantics instead of reporting runtime errors.
pub mod evaluator;
/// The lexer module classifies the characters of an expression into tokens.
///
/// # Responsibilities
/// - Recognises numeric literals, operators, parentheses, function keywords
///   and the variable `x`.
/// - Computes literal values by place-value weighting.
/// - Reports invalid characters and malformed exponents.
pub mod lexer;
/// The stack module provides the LIFO used by both passes.
pub mod stack;
