use std::mem;

use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::{CompileError, ErrorKind, compile_error::CompileResult},
    instruction::{Function, Instruction, Operator, Program},
    interpreter::{
        compiler::{emitter::Emitter, precedence::Priority},
        lexer::{LexError, Token},
        stack::Stack,
    },
    util::text::char_offset,
};

/// The kind of the previously accepted lexeme.
///
/// After a closing parenthesis this is reset to `None` whenever the group was
/// empty or operators were emitted while closing it; otherwise the constant or
/// variable that ended the group stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Constant,
    Variable,
    Operator(Operator),
    LeftParen,
    Function,
}

/// What an operator working stack entry is waiting to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LeftParen,
    Function(Function),
}

impl Pending {
    const fn instruction(self) -> Option<Instruction> {
        match self {
            Self::Operator(op) => Some(Instruction::Operator(op)),
            Self::Function(func) => Some(Instruction::Function(func)),
            Self::LeftParen => None,
        }
    }
}

/// An operator working stack entry.
#[derive(Debug, Clone, Copy)]
struct Entry {
    pending: Pending,
    /// Byte offset of the lexeme that pushed the entry.
    offset:  usize,
    /// Set when a sign folded after `^` applies to the whole group or
    /// function call this entry opens.
    negated: bool,
}

impl Entry {
    const fn new(pending: Pending, offset: usize, negated: bool) -> Self {
        Self { pending,
               offset,
               negated }
    }

    fn priority(&self, incoming: Operator) -> Priority {
        match self.pending {
            Pending::Operator(op) => op.priority(incoming),
            Pending::LeftParen | Pending::Function(_) => Priority::Incomparable,
        }
    }
}

/// State of one shunting-yard pass.
struct Compiler<'s> {
    source:      &'s str,
    last:        Option<Last>,
    /// Sign folded from a unary `-` directly after `^`, waiting for the next
    /// operand.
    negate_next: bool,
    operators:   Stack<Entry>,
    output:      Emitter,
}

/// Compiles an infix expression into a postfix [`Program`].
///
/// The expression may use numbers (`2`, `.5`, `1.5e-3`), the variable `x`,
/// the operators `+ - * / ^`, parentheses, and the functions listed in
/// [`Function`]. Whitespace is ignored.
///
/// # Errors
/// Returns the first syntax error found, with the character offset at which
/// the failing token sequence begins; see [`ErrorKind`] for the taxonomy.
/// No partial program is returned.
///
/// # Example
/// ```
/// use funcplot::{ErrorKind, compile, evaluate};
///
/// let program = compile("2+2*6+4").unwrap();
/// assert_eq!(evaluate(&program, 0.0), 18.0);
///
/// let err = compile("25*(225-52").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingParenthesis);
/// assert_eq!(err.offset(), Some(10));
/// ```
pub fn compile(source: &str) -> CompileResult<Program> {
    let result = Compiler::new(source).run();

    match &result {
        Ok(program) => debug!(instructions = program.len(),
                              max_depth = program.max_depth(),
                              "compiled expression"),
        Err(error) => debug!(kind = ?error.kind(),
                             offset = ?error.offset(),
                             "rejected expression"),
    }

    result
}

/// Builds the error for `kind` found at byte offset `at` of `source`.
fn locate(source: &str, kind: ErrorKind, at: usize) -> CompileError {
    match kind {
        ErrorKind::MemoryError | ErrorKind::NothingToParse => CompileError::unlocated(kind),
        _ => CompileError::at(kind, char_offset(source, at)),
    }
}

impl<'s> Compiler<'s> {
    fn new(source: &'s str) -> Self {
        Self { source,
               last: None,
               negate_next: false,
               operators: Stack::new(),
               output: Emitter::new() }
    }

    fn run(mut self) -> CompileResult<Program> {
        if self.source.trim().is_empty() {
            return Err(CompileError::unlocated(ErrorKind::NothingToParse));
        }

        let mut lexer = Token::lexer(self.source);
        while let Some(token) = lexer.next() {
            let span = lexer.span();
            match token {
                Ok(token) => self.accept(token, span.start)?,
                // The exponent digits were expected right where the match ended.
                Err(LexError::RealNotation) => {
                    return Err(self.error(ErrorKind::RealNotation, span.end));
                },
                Err(error) => return Err(self.error(error.into(), span.start)),
            }
        }

        self.finish()
    }

    fn error(&self, kind: ErrorKind, at: usize) -> CompileError {
        locate(self.source, kind, at)
    }

    fn accept(&mut self, token: Token, at: usize) -> CompileResult<()> {
        match token {
            Token::Number(value) => self.number(value, at),
            Token::Variable => self.variable(at),
            Token::Operator(op) => self.operator(op, at),
            Token::LParen => self.open(at),
            Token::RParen => self.close(at),
            Token::Function(func) => self.function(func, at),
            Token::Ignored => Ok(()),
        }
    }

    fn emit(&mut self, instruction: Instruction, at: usize) -> CompileResult<()> {
        let source = self.source;
        self.output
            .emit(instruction)
            .map_err(|kind| locate(source, kind, at))
    }

    /// Emits `-1 *`, negating the value on top of the stack.
    fn emit_negation(&mut self, at: usize) -> CompileResult<()> {
        self.emit(Instruction::from(-1.0), at)?;
        self.emit(Instruction::Operator(Operator::Multiply), at)
    }

    /// Emits the instruction an entry was holding back, if any, followed by
    /// its folded sign.
    fn release(&mut self, entry: Entry) -> CompileResult<()> {
        if let Some(instruction) = entry.pending.instruction() {
            trace!(%instruction, "releasing pending instruction");
            self.emit(instruction, entry.offset)?;
        }
        if entry.negated {
            self.emit_negation(entry.offset)?;
        }
        Ok(())
    }

    fn reject_after_function(&self, at: usize) -> CompileResult<()> {
        if self.last == Some(Last::Function) {
            return Err(self.error(ErrorKind::FunctionParenthesis, at));
        }
        Ok(())
    }

    fn number(&mut self, value: f64, at: usize) -> CompileResult<()> {
        self.reject_after_function(at)?;

        let value = if mem::take(&mut self.negate_next) { -value } else { value };
        self.emit(Instruction::from(value), at)?;
        self.last = Some(Last::Constant);

        Ok(())
    }

    fn variable(&mut self, at: usize) -> CompileResult<()> {
        self.reject_after_function(at)?;

        self.emit(Instruction::Variable, at)?;
        if mem::take(&mut self.negate_next) {
            self.emit_negation(at)?;
        }
        self.last = Some(Last::Variable);

        Ok(())
    }

    fn operator(&mut self, op: Operator, at: usize) -> CompileResult<()> {
        self.reject_after_function(at)?;

        let unary = match self.last {
            None => self.output.is_empty(),
            Some(Last::Operator(_) | Last::LeftParen) => true,
            Some(_) => false,
        };

        if unary {
            if !op.is_sign() {
                return Err(self.error(ErrorKind::BinaryOperatorOperands, at));
            }

            if let Some(Last::Operator(previous)) = self.last {
                // `+-` is the only sign pair allowed to touch.
                if previous.is_sign() && (previous, op) != (Operator::Add, Operator::Subtract) {
                    return Err(self.error(ErrorKind::OperatorFrequency, at));
                }

                if previous == Operator::Power {
                    if op == Operator::Subtract {
                        self.negate_next = true;
                    }
                    return Ok(());
                }
            }

            // `-a` compiles as `0 - a`.
            self.emit(Instruction::from(0.0), at)?;
        }

        while let Some(entry) =
            self.operators
                .pop_if(|entry| entry.priority(op).pops_before(op))
        {
            self.release(entry)?;
        }

        self.operators
            .try_push(Entry::new(Pending::Operator(op), at, false))?;
        self.last = Some(Last::Operator(op));

        Ok(())
    }

    fn open(&mut self, at: usize) -> CompileResult<()> {
        if matches!(self.last, Some(Last::Constant | Last::Variable)) {
            return Err(self.error(ErrorKind::UnexpectedSymbol, at));
        }

        let negated = mem::take(&mut self.negate_next);
        self.operators
            .try_push(Entry::new(Pending::LeftParen, at, negated))?;
        self.last = Some(Last::LeftParen);

        Ok(())
    }

    fn close(&mut self, at: usize) -> CompileResult<()> {
        self.reject_after_function(at)?;

        let empty_group = self.last == Some(Last::LeftParen);
        let mut released_operator = false;

        loop {
            let Some(entry) = self.operators.pop() else {
                return Err(self.error(ErrorKind::MissingParenthesis, at));
            };
            let is_paren = entry.pending == Pending::LeftParen;
            self.release(entry)?;
            if is_paren {
                break;
            }
            released_operator = true;
        }

        // A function waiting under the parenthesis takes the group as its
        // argument.
        if let Some(call) = self.operators
                                .pop_if(|entry| matches!(entry.pending, Pending::Function(_)))
        {
            self.release(call)?;
        }

        if empty_group || released_operator {
            self.last = None;
        }

        Ok(())
    }

    fn function(&mut self, func: Function, at: usize) -> CompileResult<()> {
        self.reject_after_function(at)?;

        let negated = mem::take(&mut self.negate_next);
        self.operators
            .try_push(Entry::new(Pending::Function(func), at, negated))?;
        self.last = Some(Last::Function);

        Ok(())
    }

    fn finish(mut self) -> CompileResult<Program> {
        let end = self.source.len();

        match self.last {
            Some(Last::Operator(_)) => {
                return Err(self.error(ErrorKind::BinaryOperatorOperands, end));
            },
            Some(Last::Function) => return Err(self.error(ErrorKind::FunctionParenthesis, end)),
            _ => {},
        }

        while let Some(entry) = self.operators.pop() {
            if entry.pending == Pending::LeftParen {
                return Err(self.error(ErrorKind::MissingParenthesis, end));
            }
            self.release(entry)?;
        }

        Ok(self.output.finish())
    }
}
