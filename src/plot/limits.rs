use std::{fmt, str::FromStr};

use crate::error::LimitsError;

/// The visible part of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Limits {
    /// Creates a viewport.
    ///
    /// # Errors
    /// Returns `EmptyRange` if a minimum is not strictly below its maximum,
    /// and `NonFinite` if any bound is infinite or NaN.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, LimitsError> {
        for value in [x_min, x_max, y_min, y_max] {
            if !value.is_finite() {
                return Err(LimitsError::NonFinite { field: value.to_string() });
            }
        }
        if x_min >= x_max {
            return Err(LimitsError::EmptyRange { axis: 'x' });
        }
        if y_min >= y_max {
            return Err(LimitsError::EmptyRange { axis: 'y' });
        }

        Ok(Self { x_min,
                  x_max,
                  y_min,
                  y_max })
    }

    /// Width of the x range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the y range.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `y` is a finite value inside the vertical range.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y.is_finite() && (self.y_min..=self.y_max).contains(&y)
    }
}

impl Default for Limits {
    /// The square from `-10` to `10` on both axes.
    fn default() -> Self {
        Self { x_min: -10.0,
               x_max: 10.0,
               y_min: -10.0,
               y_max: 10.0 }
    }
}

impl FromStr for Limits {
    type Err = LimitsError;

    /// Parses `xmin:xmax:ymin:ymax`.
    ///
    /// # Example
    /// ```
    /// use funcplot::plot::Limits;
    ///
    /// let limits: Limits = "-1:1:-0.5:2".parse().unwrap();
    /// assert_eq!(limits.x_min, -1.0);
    /// assert_eq!(limits.y_max, 2.0);
    ///
    /// assert!("1:2:3".parse::<Limits>().is_err());
    /// assert!("2:1:0:1".parse::<Limits>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(':').collect::<Vec<_>>();
        let [x_min, x_max, y_min, y_max] = fields[..] else {
            return Err(LimitsError::FieldCount { found: fields.len() });
        };

        let parse = |field: &str| {
            let field = field.trim();
            let value = field.parse::<f64>()
                             .map_err(|_| LimitsError::InvalidNumber { field: field.to_string() })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(LimitsError::NonFinite { field: field.to_string() })
            }
        };

        Self::new(parse(x_min)?, parse(x_max)?, parse(y_min)?, parse(y_max)?)
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.x_min, self.x_max, self.y_min, self.y_max)
    }
}
