use std::f64::consts::PI;

use crate::instruction::Function;

impl Function {
    /// Applies the function to one operand.
    ///
    /// `log` is the base 10 logarithm and `ln` the natural one. `cotan` is
    /// `1 / tan(x)` and `acotan` is `atan(1 / x)`. `todeg` and `torad`
    /// convert between radians and degrees.
    ///
    /// # Example
    /// ```
    /// use funcplot::Function;
    ///
    /// assert!((Function::Log.apply(1000.0) - 3.0).abs() < 1e-12);
    /// assert!((Function::ToDeg.apply(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    /// assert!(Function::Ln.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Abs => value.abs(),
            Self::Exp => value.exp(),
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Cotan => 1.0 / value.tan(),
            Self::Asin => value.asin(),
            Self::Acos => value.acos(),
            Self::Atan => value.atan(),
            Self::Acotan => (1.0 / value).atan(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
            Self::ToDeg => value * 180.0 / PI,
            Self::ToRad => value * PI / 180.0,
        }
    }
}
