use std::{fmt, str::FromStr};

use ordered_float::OrderedFloat;

use crate::{error::CompileError, interpreter::compiler::compile};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`, the only right-associative operator.
    Power,
}

impl Operator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }

    /// Whether the operator may also appear as a unary sign.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unary function callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Absolute value.
    Abs,
    /// `e^x`.
    Exp,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Cotangent, `1 / tan(x)`.
    Cotan,
    /// Arcsine.
    Asin,
    /// Arccosine.
    Acos,
    /// Arctangent.
    Atan,
    /// Arccotangent, `atan(1 / x)`.
    Acotan,
    /// Base 10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Radians to degrees.
    ToDeg,
    /// Degrees to radians.
    ToRad,
}

impl Function {
    /// The keyword that names the function in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cotan => "cotan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Acotan => "acotan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::ToDeg => "todeg",
            Self::ToRad => "torad",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a postfix program.
///
/// Constants are wrapped in [`OrderedFloat`] so that instructions, and with
/// them whole programs, can be compared and hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Pushes a number.
    Constant(OrderedFloat<f64>),
    /// Pushes the value bound to `x`.
    Variable,
    /// Pops two operands and pushes the result.
    Operator(Operator),
    /// Pops one operand and pushes the result.
    Function(Function),
}

impl Instruction {
    /// Number of values the instruction pops from the evaluation stack.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable => 0,
            Self::Function(_) => 1,
            Self::Operator(_) => 2,
        }
    }
}

impl From<f64> for Instruction {
    fn from(value: f64) -> Self {
        Self::Constant(OrderedFloat(value))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable => f.write_str("x"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

/// A compiled expression: instructions in postfix order.
///
/// A `Program` is only produced by a successful compilation, which
/// guarantees that every operator and function finds its operands. It is
/// never mutated afterwards, so one program may be evaluated any number of
/// times and from several threads at once.
///
/// # Example
/// ```
/// use funcplot::Program;
///
/// let program: Program = "2^3^x".parse().unwrap();
///
/// assert_eq!(program.to_string(), "2 3 x ^ ^");
/// assert_eq!(program.evaluate(2.0), 512.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Program {
    instructions: Vec<Instruction>,
    max_depth:    usize,
}

impl Program {
    pub(crate) const fn new(instructions: Vec<Instruction>, max_depth: usize) -> Self {
        Self { instructions,
               max_depth }
    }

    /// The instructions in execution order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions. An empty program evaluates
    /// to `0.0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The largest number of values the evaluation stack holds while the
    /// program runs.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluates the program with `x` bound to `variable_value`.
    ///
    /// Shorthand for [`evaluate`](crate::evaluate).
    #[must_use]
    pub fn evaluate(&self, variable_value: f64) -> f64 {
        crate::interpreter::evaluator::evaluate(self, variable_value)
    }
}

impl FromStr for Program {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}
