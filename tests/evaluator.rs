use std::f64::consts::PI;

use funcplot::{Instruction, Operator, compile, evaluate};

fn eval_at(src: &str, x: f64) -> f64 {
    match compile(src) {
        Ok(program) => evaluate(&program, x),
        Err(e) => panic!("'{src}' failed to compile: {e}"),
    }
}

fn assert_close(src: &str, x: f64, expected: f64) {
    let result = eval_at(src, x);
    assert!((result - expected).abs() < 1e-9,
            "'{src}' at x = {x} evaluated to {result}, expected {expected}");
}

#[test]
fn operators_take_operands_in_source_order() {
    assert_eq!(Operator::Subtract.apply(5.0, 2.0), 3.0);
    assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);

    assert_eq!(eval_at("x-1", 5.0), 4.0);
    assert_eq!(eval_at("1/x", 4.0), 0.25);
    assert_eq!(eval_at("x^3", 2.0), 8.0);
}

#[test]
fn function_table() {
    assert_close("abs(x)", -2.5, 2.5);
    assert_close("exp(x)", 1.0, 1f64.exp());
    assert_close("sin(x)", 0.5, 0.5f64.sin());
    assert_close("cos(x)", 0.5, 0.5f64.cos());
    assert_close("tan(x)", 0.5, 0.5f64.tan());
    assert_close("cotan(x)", 0.5, 1.0 / 0.5f64.tan());
    assert_close("asin(x)", 0.5, 0.5f64.asin());
    assert_close("acos(x)", 0.5, 0.5f64.acos());
    assert_close("atan(x)", 2.0, 2f64.atan());
    assert_close("acotan(x)", 2.0, 0.5f64.atan());
    assert_close("log(x)", 100.0, 2.0);
    assert_close("ln(x)", 2.0, 2f64.ln());
    assert_close("sinh(x)", 1.0, 1f64.sinh());
    assert_close("cosh(x)", 1.0, 1f64.cosh());
    assert_close("tanh(x)", 1.0, 1f64.tanh());
    assert_close("todeg(x)", PI, 180.0);
    assert_close("torad(x)", 180.0, PI);
}

#[test]
fn every_function_name_compiles() {
    let names = ["abs", "exp", "sin", "cos", "tan", "cotan", "asin", "acos", "atan", "acotan",
                 "log", "ln", "sinh", "cosh", "tanh", "todeg", "torad"];

    for name in names {
        let src = format!("{name}(x)");
        let program = compile(&src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
        assert_eq!(program.to_string(), format!("x {name}"));
        assert!(matches!(program.instructions()[1], Instruction::Function(func) if func.name() == name));
    }
}

#[test]
fn float_edge_cases_are_results() {
    assert_eq!(eval_at("2/0", 0.0), f64::INFINITY);
    assert_eq!(eval_at("-2/0", 0.0), f64::NEG_INFINITY);
    assert_eq!(eval_at("0^0", 0.0), 1.0);
    assert_eq!(eval_at("ln(x)", 0.0), f64::NEG_INFINITY);
    assert!(eval_at("0/0", 0.0).is_nan());
    assert!(eval_at("log(x)", -1.0).is_nan());
    assert!(eval_at("asin(x)", 2.0).is_nan());
}

#[test]
fn variable_binding_changes_per_call() {
    let program = compile("x*sin(x)+x").unwrap();

    assert_eq!(program.evaluate(0.0), 0.0);
    assert!((program.evaluate(1.5) - 2.996_242).abs() < 1e-6);
    assert!((program.evaluate(-1.5) - 1.5f64.mul_add(1.5f64.sin(), -1.5)).abs() < 1e-9);
}

#[test]
fn programs_evaluate_from_many_threads() {
    let program = compile("x^2-1").unwrap();

    let results = std::thread::scope(|scope| {
        let handles = (0..4).map(|i| {
                                let program = &program;
                                scope.spawn(move || program.evaluate(f64::from(i)))
                            })
                            .collect::<Vec<_>>();
        handles.into_iter()
               .map(|handle| handle.join().unwrap())
               .collect::<Vec<_>>()
    });

    assert_eq!(results, vec![-1.0, 0.0, 3.0, 8.0]);
}
