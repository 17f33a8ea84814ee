use logos::Logos;

use crate::{
    error::ErrorKind,
    instruction::{Function, Operator},
};

/// Represents a lexical token of an expression.
///
/// Function keywords are matched case-sensitively and by longest match, so
/// `sinh` is one token rather than `sin` followed by a stray `h`. The only
/// variable is `x`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal such as `42`, `3.14`, `.5`, `2.` or `1.5e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_literal)]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]*)?", parse_literal)]
    Number(f64),
    /// One of `+ - * / ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("^", |_| Operator::Power)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A function keyword.
    #[token("abs", |_| Function::Abs)]
    #[token("exp", |_| Function::Exp)]
    #[token("sin", |_| Function::Sin)]
    #[token("cos", |_| Function::Cos)]
    #[token("tan", |_| Function::Tan)]
    #[token("cotan", |_| Function::Cotan)]
    #[token("asin", |_| Function::Asin)]
    #[token("acos", |_| Function::Acos)]
    #[token("atan", |_| Function::Atan)]
    #[token("acotan", |_| Function::Acotan)]
    #[token("log", |_| Function::Log)]
    #[token("ln", |_| Function::Ln)]
    #[token("sinh", |_| Function::Sinh)]
    #[token("cosh", |_| Function::Cosh)]
    #[token("tanh", |_| Function::Tanh)]
    #[token("todeg", |_| Function::ToDeg)]
    #[token("torad", |_| Function::ToRad)]
    Function(Function),
    /// The variable `x`.
    #[token("x")]
    Variable,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Lexical failures.
///
/// Any character that starts no token is an invalid character; this is the
/// error logos reports by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts at this character.
    #[default]
    InvalidCharacter,
    /// An exponent marker or exponent sign is not followed by a digit.
    RealNotation,
}

impl From<LexError> for ErrorKind {
    fn from(error: LexError) -> Self {
        match error {
            LexError::InvalidCharacter => Self::InvalidCharacter,
            LexError::RealNotation => Self::RealNotation,
        }
    }
}

/// Computes the value of the literal under the lexer cursor.
fn parse_literal(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    literal_value(lex.slice()).ok_or(LexError::RealNotation)
}

/// Computes the value of a numeric literal by place-value weighting.
///
/// The integer digits are accumulated by repeated multiplication by ten, each
/// fractional digit is added with a weight of `0.1`, `0.01`, ... and the
/// result is finally scaled by the decimal exponent. A lone `.` is zero.
///
/// # Returns
/// - `Some(f64)`: the value of the literal.
/// - `None`: if an exponent marker (with or without a sign) is not followed by
///   at least one digit.
///
/// # Example
/// ```
/// use funcplot::interpreter::lexer::literal_value;
///
/// assert_eq!(literal_value("42"), Some(42.0));
/// assert_eq!(literal_value(".5E2"), Some(50.0));
/// assert_eq!(literal_value("."), Some(0.0));
/// assert_eq!(literal_value("1.5e-"), None);
/// ```
#[must_use]
pub fn literal_value(text: &str) -> Option<f64> {
    let mut bytes = text.bytes().peekable();
    let mut value = 0.0;

    while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
        value = value * 10.0 + f64::from(digit - b'0');
    }

    if bytes.next_if_eq(&b'.').is_some() {
        let mut weight = 0.1;
        while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
            value += f64::from(digit - b'0') * weight;
            weight /= 10.0;
        }
    }

    if bytes.next_if(|&b| matches!(b, b'e' | b'E')).is_some() {
        let negative = bytes.next_if(|&b| matches!(b, b'+' | b'-')) == Some(b'-');
        let mut exponent: i32 = 0;
        let mut digits = 0;

        while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
            exponent = exponent.saturating_mul(10)
                               .saturating_add(i32::from(digit - b'0'));
            digits += 1;
        }
        if digits == 0 {
            return None;
        }

        value *= 10f64.powi(if negative { -exponent } else { exponent });
    }

    Some(value)
}
