use std::cmp::Ordering;

use crate::instruction::Operator;

/// How one operator ranks against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Binds tighter.
    Higher,
    /// Same priority class.
    Equal,
    /// Binds looser.
    Lower,
    /// No ordering exists, as between an operator and an opening parenthesis.
    Incomparable,
}

impl Priority {
    /// Whether a pending stack entry ranked `self` against `incoming` must be
    /// emitted before `incoming` is pushed.
    ///
    /// Higher entries always go first. Equal entries go first only when the
    /// incoming operator is left-associative, which keeps `2^3^2` equal to
    /// `2^(3^2)`.
    ///
    /// # Example
    /// ```
    /// use funcplot::{Operator, interpreter::compiler::precedence::Priority};
    ///
    /// assert!(Priority::Equal.pops_before(Operator::Subtract));
    /// assert!(!Priority::Equal.pops_before(Operator::Power));
    /// assert!(!Priority::Incomparable.pops_before(Operator::Add));
    /// ```
    #[must_use]
    pub const fn pops_before(self, incoming: Operator) -> bool {
        match self {
            Self::Higher => true,
            Self::Equal => incoming.is_left_associative(),
            Self::Lower | Self::Incomparable => false,
        }
    }
}

/// Priority classes, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Additive,
    Multiplicative,
    Exponential,
}

impl Operator {
    const fn class(self) -> Class {
        match self {
            Self::Add | Self::Subtract => Class::Additive,
            Self::Multiply | Self::Divide => Class::Multiplicative,
            Self::Power => Class::Exponential,
        }
    }

    /// Ranks `self` against `other`.
    ///
    /// `^` outranks everything, `*` and `/` outrank `+` and `-`, and operators
    /// of the same class are equal.
    ///
    /// # Example
    /// ```
    /// use funcplot::{Operator, interpreter::compiler::precedence::Priority};
    ///
    /// assert_eq!(Operator::Power.priority(Operator::Multiply), Priority::Higher);
    /// assert_eq!(Operator::Subtract.priority(Operator::Add), Priority::Equal);
    /// assert_eq!(Operator::Divide.priority(Operator::Power), Priority::Lower);
    /// ```
    #[must_use]
    pub fn priority(self, other: Self) -> Priority {
        match self.class().cmp(&other.class()) {
            Ordering::Greater => Priority::Higher,
            Ordering::Equal => Priority::Equal,
            Ordering::Less => Priority::Lower,
        }
    }

    /// Whether operators of equal priority group from the left. Only `^`
    /// groups from the right.
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        !matches!(self, Self::Power)
    }
}
