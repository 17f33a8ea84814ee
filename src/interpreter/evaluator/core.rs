use crate::{
    instruction::{Instruction, Program},
    interpreter::stack::Stack,
};

/// Evaluates a compiled program with `x` bound to `variable_value`.
///
/// Instructions run left to right over a fresh value stack sized from
/// [`Program::max_depth`]. Operands are popped in reverse of the order they
/// were written, so for `a - b` the right operand comes off first.
///
/// Evaluation cannot fail: division by zero, logarithms of negative numbers
/// and the like produce IEEE infinities or NaN, which are returned as they
/// are. An empty program evaluates to `0.0`.
///
/// # Example
/// ```
/// use funcplot::{compile, evaluate};
///
/// let program = compile("1/x").unwrap();
///
/// assert_eq!(evaluate(&program, 4.0), 0.25);
/// assert_eq!(evaluate(&program, 0.0), f64::INFINITY);
/// assert_eq!(evaluate(&compile("()").unwrap(), 1.0), 0.0);
/// ```
#[must_use]
pub fn evaluate(program: &Program, variable_value: f64) -> f64 {
    let mut stack = Stack::with_capacity(program.max_depth());

    for instruction in program.instructions() {
        match *instruction {
            Instruction::Constant(value) => stack.push(value.into_inner()),
            Instruction::Variable => stack.push(variable_value),
            Instruction::Function(func) => {
                let operand = stack.pop().unwrap_or_default();
                stack.push(func.apply(operand));
            },
            Instruction::Operator(op) => {
                let right = stack.pop().unwrap_or_default();
                let left = stack.pop().unwrap_or_default();
                stack.push(op.apply(left, right));
            },
        }
    }

    stack.pop().unwrap_or(0.0)
}
