use funcplot::{ErrorKind, Instruction, Operator, Program, compile};

fn assert_listing(src: &str, listing: &str) {
    match compile(src) {
        Ok(program) => assert_eq!(program.to_string(), listing, "listing of '{src}'"),
        Err(e) => panic!("'{src}' failed to compile: {e}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind, offset: Option<usize>) {
    match compile(src) {
        Ok(program) => panic!("'{src}' compiled to '{program}' but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "kind of error for '{src}'");
            assert_eq!(e.offset(), offset, "offset of error for '{src}'");
        },
    }
}

#[test]
fn precedence_and_associativity() {
    assert_listing("2+2*6+4", "2 2 6 * + 4 +");
    assert_listing("6/2*4", "6 2 / 4 *");
    assert_listing("2-3-4", "2 3 - 4 -");
    assert_listing("2^3^2", "2 3 2 ^ ^");
    assert_listing("(2^3)^2", "2 3 ^ 2 ^");
    assert_listing("2*3^2", "2 3 2 ^ *");
}

#[test]
fn unary_signs() {
    assert_listing("-5+2", "0 5 - 2 +");
    assert_listing("5+-4", "5 0 + 4 -");
    assert_listing("-(2+5)", "0 2 5 + -");
    assert_listing("+x", "0 x +");
}

#[test]
fn signs_after_power_fold_into_the_operand() {
    assert_listing("2^-3", "2 -3 ^");
    assert_listing("2^--3", "2 -3 ^");
    assert_listing("2^-+3", "2 -3 ^");
    assert_listing("2^-x", "2 x -1 * ^");
    assert_listing("2^-(1+1)", "2 1 1 + -1 * ^");
    assert_listing("2^-sin(x)", "2 x sin -1 * ^");
    assert_listing("2^+3", "2 3 ^");
}

#[test]
fn repeated_signs_after_power_negate_once() {
    assert_eq!(compile("2^--3").unwrap().evaluate(0.0), 0.125);
    assert_eq!(compile("2^---x").unwrap().evaluate(1.0), 0.5);
}

#[test]
fn sign_after_multiplication_keeps_zero_desugaring() {
    assert_listing("2*-3", "2 0 * 3 -");
    assert_eq!(compile("2*-3").unwrap().evaluate(0.0), -3.0);
}

#[test]
fn functions_bind_their_argument() {
    assert_listing("sin(x)", "x sin");
    assert_listing("2*sin(1.92)", "2 1.92 sin *");
    assert_listing("sin(cos(x))", "x cos sin");
    assert_listing("sinh(x)+cosh(x)", "x sinh x cosh +");
}

#[test]
fn empty_group_is_an_empty_program() {
    let program = compile("()").unwrap();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.max_depth(), 0);
    assert_eq!(program.evaluate(3.0), 0.0);
}

#[test]
fn adjacent_operands_are_accepted() {
    assert_eq!(compile("2 5").unwrap().evaluate(0.0), 5.0);
    assert_eq!(compile("(2+3)(4)").unwrap().evaluate(0.0), 4.0);
}

#[test]
fn program_tracks_stack_depth() {
    let program = compile("2+2*6+4").unwrap();

    assert_eq!(program.len(), 7);
    assert_eq!(program.max_depth(), 3);
    assert_eq!(program.instructions()[2], Instruction::from(6.0));
    assert_eq!(program.instructions()[3], Instruction::Operator(Operator::Multiply));
}

#[test]
fn compilation_is_deterministic() {
    let source = "x*sin(x)+2^-x";
    assert_eq!(compile(source).unwrap(), compile(source).unwrap());

    let parsed: Program = source.parse().unwrap();
    assert_eq!(parsed, compile(source).unwrap());
}

#[test]
fn missing_parentheses() {
    assert_error("25*(225-52", ErrorKind::MissingParenthesis, Some(10));
    assert_error("sin(5", ErrorKind::MissingParenthesis, Some(5));
    assert_error("2)", ErrorKind::MissingParenthesis, Some(1));
    assert_error("(", ErrorKind::MissingParenthesis, Some(1));
}

#[test]
fn operator_chains() {
    assert_error("5++4", ErrorKind::OperatorFrequency, Some(2));
    assert_error("5--4", ErrorKind::OperatorFrequency, Some(2));
    assert_error("--5--4", ErrorKind::OperatorFrequency, Some(1));
    assert_error("5-+4", ErrorKind::OperatorFrequency, Some(2));
}

#[test]
fn missing_operands() {
    assert_error("-", ErrorKind::BinaryOperatorOperands, Some(1));
    assert_error("*", ErrorKind::BinaryOperatorOperands, Some(0));
    assert_error("2*", ErrorKind::BinaryOperatorOperands, Some(2));
    assert_error("^10", ErrorKind::BinaryOperatorOperands, Some(0));
    assert_error("2^*3", ErrorKind::BinaryOperatorOperands, Some(2));
    assert_error("2*()", ErrorKind::BinaryOperatorOperands, Some(1));
}

#[test]
fn function_without_argument() {
    assert_error("sin5", ErrorKind::FunctionParenthesis, Some(3));
    assert_error("2*sin5", ErrorKind::FunctionParenthesis, Some(5));
    assert_error("sin", ErrorKind::FunctionParenthesis, Some(3));
    assert_error("sin()", ErrorKind::FunctionParenthesis, Some(0));
    assert_error("(sin)", ErrorKind::FunctionParenthesis, Some(4));
    assert_error("sin x", ErrorKind::FunctionParenthesis, Some(4));
    assert_error("sinsin(x)", ErrorKind::FunctionParenthesis, Some(3));
}

#[test]
fn misplaced_and_unknown_symbols() {
    assert_error("2(3)", ErrorKind::UnexpectedSymbol, Some(1));
    assert_error("x (1)", ErrorKind::UnexpectedSymbol, Some(2));
    assert_error("!?", ErrorKind::InvalidCharacter, Some(0));
    assert_error("2+y", ErrorKind::InvalidCharacter, Some(2));
    assert_error("X", ErrorKind::InvalidCharacter, Some(0));
    assert_error("SIN(x)", ErrorKind::InvalidCharacter, Some(0));
}

#[test]
fn malformed_exponents() {
    assert_error("1e+", ErrorKind::RealNotation, Some(3));
    assert_error("2*1.5e", ErrorKind::RealNotation, Some(6));
    assert_error("1E-*2", ErrorKind::RealNotation, Some(3));
}

#[test]
fn nothing_to_parse() {
    assert_error("", ErrorKind::NothingToParse, None);
    assert_error(" \t ", ErrorKind::NothingToParse, None);
}

#[test]
fn end_of_input_errors_point_past_the_last_character() {
    assert_error("(x  ", ErrorKind::MissingParenthesis, Some(4));
}

#[test]
fn error_messages_and_caret() {
    let source = "sin5";
    let err = compile(source).unwrap_err();

    assert_eq!(err.to_string(),
               "syntax error: function argument not enclosed in parenthesis at offset 3");
    assert_eq!(err.caret(source).unwrap(), "  sin5\n     ^");

    let err = compile("").unwrap_err();
    assert_eq!(err.to_string(), "syntax error: nothing to parse");
    assert_eq!(err.caret(""), None);
}
