use tracing::debug;

use crate::{Program, plot::Limits, util::num::usize_to_f64_checked};

/// Sample count used when none is requested.
pub const DEFAULT_SAMPLES: usize = 10_001;
/// Upper bound on the sample count.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A point on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

/// A run of consecutive visible points, drawn as one path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    points: Vec<Point>,
}

impl Segment {
    /// The points of the segment, in increasing `x` order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points in the segment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the segment holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The sampled curve of a program over a viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    segments: Vec<Segment>,
    min:      Option<Point>,
    max:      Option<Point>,
}

impl Plot {
    /// The drawable segments of the curve.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The visible sample with the smallest `y`, if any sample was visible.
    #[must_use]
    pub const fn min(&self) -> Option<Point> {
        self.min
    }

    /// The visible sample with the largest `y`, if any sample was visible.
    #[must_use]
    pub const fn max(&self) -> Option<Point> {
        self.max
    }

    fn record(&mut self, point: Point) {
        if self.min.is_none_or(|min| point.y < min.y) {
            self.min = Some(point);
        }
        if self.max.is_none_or(|max| point.y > max.y) {
            self.max = Some(point);
        }
    }
}

/// Evaluates a program at evenly spaced abscissas across a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    limits:  Limits,
    samples: usize,
}

impl Sampler {
    /// Creates a sampler over `limits`.
    ///
    /// `samples` is clamped into `2..=MAX_SAMPLES` so both ends of the x range
    /// are always evaluated.
    #[must_use]
    pub fn new(limits: Limits, samples: usize) -> Self {
        Self { limits,
               samples: samples.clamp(2, MAX_SAMPLES) }
    }

    /// The effective sample count.
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// The viewport being sampled.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Samples `program` across the viewport.
    ///
    /// Runs of visible points become segments. Where the curve leaves or
    /// enters the vertical range between two finite samples, the segment is
    /// extended to the edge it crosses. Non-finite samples end a segment
    /// without an edge point.
    ///
    /// # Example
    /// ```
    /// use funcplot::plot::{Limits, Sampler};
    ///
    /// let program = "x^2".parse().unwrap();
    /// let limits = Limits::new(-2.0, 2.0, 0.0, 1.0).unwrap();
    /// let plot = Sampler::new(limits, 401).sample(&program);
    ///
    /// assert_eq!(plot.segments().len(), 1);
    /// let segment = &plot.segments()[0];
    /// assert!((segment.points()[0].x + 1.0).abs() < 1e-9);
    /// assert!((segment.points()[segment.len() - 1].x - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn sample(&self, program: &Program) -> Plot {
        let mut plot = Plot::default();
        let mut current = Vec::new();
        let mut previous: Option<Point> = None;

        for index in 0..self.samples {
            let x = self.abscissa(index);
            let point = Point { x,
                                y: program.evaluate(x) };

            if self.limits.contains_y(point.y) {
                if current.is_empty()
                   && let Some(before) = previous
                   && before.y.is_finite()
                {
                    current.push(self.edge_crossing(point, before));
                }
                current.push(point);
                plot.record(point);
            } else if let Some(&last) = current.last() {
                if point.y.is_finite() {
                    current.push(self.edge_crossing(last, point));
                }
                plot.segments.push(Segment { points: std::mem::take(&mut current) });
            }

            previous = Some(point);
        }

        if !current.is_empty() {
            plot.segments.push(Segment { points: current });
        }

        debug!(samples = self.samples,
               segments = plot.segments.len(),
               points = plot.segments.iter().map(Segment::len).sum::<usize>(),
               "sampled curve");

        plot
    }

    fn abscissa(&self, index: usize) -> f64 {
        let last = self.samples - 1;
        if index == last {
            return self.limits.x_max;
        }
        let fraction = match (usize_to_f64_checked(index), usize_to_f64_checked(last)) {
            (Some(index), Some(last)) => index / last,
            _ => 0.0,
        };
        self.limits.x_min + self.limits.width() * fraction
    }

    /// The point where the line from the visible `inside` to the finite
    /// out-of-range `outside` crosses the viewport edge.
    fn edge_crossing(&self, inside: Point, outside: Point) -> Point {
        let edge = if outside.y > self.limits.y_max {
            self.limits.y_max
        } else {
            self.limits.y_min
        };
        let t = (edge - inside.y) / (outside.y - inside.y);

        Point { x: inside.x + t * (outside.x - inside.x),
                y: edge }
    }
}
