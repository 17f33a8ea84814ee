use funcplot::{
    Function, Operator,
    interpreter::lexer::{LexError, Token, literal_value},
};
use logos::Logos;

fn tokens(src: &str) -> Vec<Result<Token, LexError>> {
    Token::lexer(src).collect()
}

#[test]
fn classifies_every_token_kind() {
    assert_eq!(tokens("2.5*sin(x) - .5"),
               vec![Ok(Token::Number(2.5)),
                    Ok(Token::Operator(Operator::Multiply)),
                    Ok(Token::Function(Function::Sin)),
                    Ok(Token::LParen),
                    Ok(Token::Variable),
                    Ok(Token::RParen),
                    Ok(Token::Operator(Operator::Subtract)),
                    Ok(Token::Number(0.5))]);
}

#[test]
fn longest_keyword_wins() {
    assert_eq!(tokens("sinh"), vec![Ok(Token::Function(Function::Sinh))]);
    assert_eq!(tokens("acotan"), vec![Ok(Token::Function(Function::Acotan))]);
    assert_eq!(tokens("cotan"), vec![Ok(Token::Function(Function::Cotan))]);
    assert_eq!(tokens("ln"), vec![Ok(Token::Function(Function::Ln))]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(tokens(" \t x \n"), vec![Ok(Token::Variable)]);
    assert!(tokens("   ").is_empty());
}

#[test]
fn unknown_characters_are_errors() {
    assert_eq!(tokens("2 # 3"),
               vec![Ok(Token::Number(2.0)),
                    Err(LexError::InvalidCharacter),
                    Ok(Token::Number(3.0))]);
}

#[test]
fn literal_forms() {
    assert_eq!(literal_value("0"), Some(0.0));
    assert_eq!(literal_value("007"), Some(7.0));
    assert_eq!(literal_value("125"), Some(125.0));
    assert_eq!(literal_value("2."), Some(2.0));
    assert_eq!(literal_value(".25"), Some(0.25));
    assert_eq!(literal_value("1e3"), Some(1000.0));
    assert_eq!(literal_value("1E+2"), Some(100.0));
    assert_eq!(literal_value("2.5e2"), Some(250.0));

    let small = literal_value("1.5e-3").unwrap();
    assert!((small - 0.0015).abs() < 1e-15);
}

#[test]
fn exponent_needs_digits() {
    assert_eq!(literal_value("1e"), None);
    assert_eq!(literal_value("1e+"), None);
    assert_eq!(literal_value(".5E-"), None);
    assert_eq!(tokens("1e"), vec![Err(LexError::RealNotation)]);
}
