/// Numeric conversion helpers.
///
/// Converts sample indices and counts to `f64` without silent precision loss.
pub mod num;
/// Source text helpers.
///
/// Translates byte offsets produced by the lexer into the character offsets
/// shown to users.
pub mod text;
