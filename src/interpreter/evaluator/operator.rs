use crate::instruction::Operator;

impl Operator {
    /// Applies the operator to `left` and `right`, where `left` was written
    /// first in the expression.
    ///
    /// Follows IEEE 754 throughout: `x / 0` is a signed infinity, `0 / 0` is
    /// NaN, and `0 ^ 0` is `1`.
    ///
    /// # Example
    /// ```
    /// use funcplot::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(5.0, 2.0), 3.0);
    /// assert_eq!(Operator::Power.apply(2.0, -3.0), 0.125);
    /// assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Power => left.powf(right),
        }
    }
}
