use crate::{
    error::ErrorKind,
    instruction::{Instruction, Program},
};

/// Builds a [`Program`] one instruction at a time.
///
/// The emitter simulates the evaluation stack depth as it goes. An
/// instruction that would pop more values than the program has pushed so far
/// is refused, which is what lets the evaluator run without arity checks.
#[derive(Debug, Default)]
pub struct Emitter {
    instructions: Vec<Instruction>,
    depth:        usize,
    max_depth:    usize,
}

impl Emitter {
    /// Creates an emitter with no instructions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Appends an instruction.
    ///
    /// # Errors
    /// - `FunctionParenthesis` if a function would find no argument.
    /// - `BinaryOperatorOperands` if an operator would find fewer than two
    ///   operands.
    /// - `MemoryError` if the program cannot grow.
    ///
    /// # Example
    /// ```
    /// use funcplot::{ErrorKind, Instruction, Operator, interpreter::compiler::emitter::Emitter};
    ///
    /// let mut emitter = Emitter::new();
    /// emitter.emit(Instruction::from(2.0)).unwrap();
    ///
    /// assert_eq!(emitter.emit(Instruction::Operator(Operator::Add)),
    ///            Err(ErrorKind::BinaryOperatorOperands));
    /// ```
    pub fn emit(&mut self, instruction: Instruction) -> Result<(), ErrorKind> {
        let operands = instruction.operands();
        if self.depth < operands {
            return Err(match instruction {
                Instruction::Function(_) => ErrorKind::FunctionParenthesis,
                _ => ErrorKind::BinaryOperatorOperands,
            });
        }

        self.instructions
            .try_reserve(1)
            .map_err(|_| ErrorKind::MemoryError)?;
        self.instructions.push(instruction);

        self.depth = self.depth - operands + 1;
        self.max_depth = self.max_depth.max(self.depth);

        Ok(())
    }

    /// Consumes the emitter and returns the finished program.
    #[must_use]
    pub fn finish(self) -> Program {
        Program::new(self.instructions, self.max_depth)
    }
}
