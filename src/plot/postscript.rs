use std::io::Write;

use crate::{
    error::RenderError,
    plot::{Limits, Plot, Point},
    util::num::usize_to_f64_checked,
};

/// Lower page coordinate of the plot area, in points, on both axes.
pub const PAGE_MIN: f64 = 25.0;
/// Upper page coordinate of the plot area, in points, on both axes.
pub const PAGE_MAX: f64 = 570.0;

const FONT: &str = "Times-Roman";
const FONT_SIZE: u32 = 10;
const GRID_GRAY: f64 = 0.7;
const AXIS_COLOR: (f64, f64, f64) = (1.0, 0.4, 0.4);
const CURVE_COLOR: (f64, f64, f64) = (0.0, 0.0, 1.0);
const GRID_LINES: f64 = 10.0;
/// Upper bound on grid lines per axis.
const MAX_TICKS: usize = 1_000;
/// Helper lines closer than this to the frame, in points, are not drawn.
const EDGE_MARGIN: f64 = 1.0;

/// Writes `plot` as a single-page PostScript document.
///
/// The page holds a frame around the viewport, a labelled grid, the axes
/// when zero is in range, and the title `f(x) = expression`. It also draws
/// one stroked path per segment. Grey helper lines run through the visible
/// minimum and maximum, labelled with their coordinates, unless they would
/// lie on the frame.
///
/// # Errors
/// Returns `RenderError::Io` if `out` rejects a write.
///
/// # Example
/// ```
/// use funcplot::plot::{Limits, Sampler, postscript};
///
/// let program = "sin(x)".parse().unwrap();
/// let limits = Limits::default();
/// let plot = Sampler::new(limits, 101).sample(&program);
///
/// let mut document = Vec::new();
/// postscript::render(&mut document, "sin(x)", &limits, &plot).unwrap();
///
/// let text = String::from_utf8(document).unwrap();
/// assert!(text.starts_with("%!PS-Adobe-2.0\n"));
/// assert!(text.contains("(f\\(x\\) = sin\\(x\\)) show"));
/// assert!(text.trim_end().ends_with("%%EOF"));
/// ```
pub fn render<W: Write>(out: &mut W,
                        expression: &str,
                        limits: &Limits,
                        plot: &Plot)
                        -> Result<(), RenderError> {
    let page = Page { limits };
    let title = format!("f(x) = {expression}");

    writeln!(out, "%!PS-Adobe-2.0")?;
    writeln!(out, "%%Creator: funcplot {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "%%Title: {}", title.replace(['\n', '\r'], " "))?;
    writeln!(out, "%%BoundingBox: 0 0 595 600")?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "/{FONT} findfont {FONT_SIZE} scalefont setfont")?;
    writeln!(out, "1 setlinejoin 1 setlinecap")?;

    page.grid(out)?;
    page.extrema(out, plot)?;
    page.axes(out)?;

    writeln!(out, "0 setgray 1 setlinewidth")?;
    writeln!(out, "newpath {PAGE_MIN} {PAGE_MIN} moveto {PAGE_MAX} {PAGE_MIN} lineto \
                   {PAGE_MAX} {PAGE_MAX} lineto {PAGE_MIN} {PAGE_MAX} lineto closepath stroke")?;
    writeln!(out, "{PAGE_MIN} {} moveto ({}) show", PAGE_MAX + 12.0, escape(&title))?;

    let (r, g, b) = CURVE_COLOR;
    writeln!(out, "{r} {g} {b} setrgbcolor 1 setlinewidth")?;
    for segment in plot.segments().iter().filter(|segment| segment.len() >= 2) {
        writeln!(out, "newpath")?;
        for (index, point) in segment.points().iter().enumerate() {
            let verb = if index == 0 { "moveto" } else { "lineto" };
            writeln!(out, "{:.2} {:.2} {verb}", page.x(point.x), page.y(point.y))?;
        }
        writeln!(out, "stroke")?;
    }

    writeln!(out, "showpage")?;
    writeln!(out, "%%EOF")?;
    Ok(())
}

/// Maps viewport coordinates onto the page.
struct Page<'a> {
    limits: &'a Limits,
}

impl Page<'_> {
    fn x(&self, x: f64) -> f64 {
        PAGE_MIN + (x - self.limits.x_min) / self.limits.width() * (PAGE_MAX - PAGE_MIN)
    }

    fn y(&self, y: f64) -> f64 {
        PAGE_MIN + (y - self.limits.y_min) / self.limits.height() * (PAGE_MAX - PAGE_MIN)
    }

    fn grid<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        writeln!(out, "{GRID_GRAY} setgray 0.5 setlinewidth")?;

        for value in ticks(self.limits.x_min, self.limits.x_max) {
            let x = self.x(value);
            writeln!(out, "newpath {x:.2} {PAGE_MIN} moveto {x:.2} {PAGE_MAX} lineto stroke")?;
            writeln!(out, "{:.2} {} moveto ({}) show", x + 2.0, PAGE_MIN - 12.0, label(value))?;
        }
        for value in ticks(self.limits.y_min, self.limits.y_max) {
            let y = self.y(value);
            writeln!(out, "newpath {PAGE_MIN} {y:.2} moveto {PAGE_MAX} {y:.2} lineto stroke")?;
            writeln!(out, "{} {:.2} moveto ({}) show", PAGE_MIN + 2.0, y + 2.0, label(value))?;
        }
        Ok(())
    }

    fn extrema<W: Write>(&self, out: &mut W, plot: &Plot) -> Result<(), RenderError> {
        let mut points = Vec::with_capacity(2);
        points.extend(plot.min());
        points.extend(plot.max().filter(|max| Some(*max) != plot.min()));
        if points.is_empty() {
            return Ok(());
        }

        writeln!(out, "% extrema")?;
        writeln!(out, "{GRID_GRAY} setgray 0.5 setlinewidth")?;
        for point in &points {
            let (x, y) = (self.x(point.x), self.y(point.y));
            if inside_frame(x) {
                writeln!(out, "newpath {x:.2} {PAGE_MIN} moveto {x:.2} {PAGE_MAX} lineto stroke")?;
            }
            if inside_frame(y) {
                writeln!(out, "newpath {PAGE_MIN} {y:.2} moveto {PAGE_MAX} {y:.2} lineto stroke")?;
            }
        }

        writeln!(out, "0 setgray")?;
        for &Point { x: value_x, y: value_y } in &points {
            let (x, y) = (self.x(value_x), self.y(value_y));
            if inside_frame(x) {
                writeln!(out,
                         "{:.2} {} moveto ({}) show",
                         x - 10.0,
                         PAGE_MIN - 22.0,
                         label(value_x))?;
            }
            if inside_frame(y) {
                writeln!(out,
                         "{} {:.2} moveto ({}) show",
                         PAGE_MIN - 23.0,
                         y - 3.0,
                         label(value_y))?;
            }
        }
        Ok(())
    }

    fn axes<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        let (r, g, b) = AXIS_COLOR;
        writeln!(out, "{r} {g} {b} setrgbcolor 1 setlinewidth")?;

        if self.limits.x_min <= 0.0 && 0.0 <= self.limits.x_max {
            let x = self.x(0.0);
            writeln!(out, "newpath {x:.2} {PAGE_MIN} moveto {x:.2} {PAGE_MAX} lineto stroke")?;
        }
        if self.limits.contains_y(0.0) {
            let y = self.y(0.0);
            writeln!(out, "newpath {PAGE_MIN} {y:.2} moveto {PAGE_MAX} {y:.2} lineto stroke")?;
        }
        Ok(())
    }
}

/// A grid step of `1`, `2` or `5` times a power of ten that splits `range`
/// into roughly ten parts.
///
/// # Example
/// ```
/// use funcplot::plot::postscript::grid_step;
///
/// assert_eq!(grid_step(20.0), 2.0);
/// assert_eq!(grid_step(200.0), 20.0);
/// assert_eq!(grid_step(45.0), 5.0);
/// ```
#[must_use]
pub fn grid_step(range: f64) -> f64 {
    let raw = range / GRID_LINES;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;

    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn inside_frame(page: f64) -> bool {
    PAGE_MIN + EDGE_MARGIN < page && page < PAGE_MAX - EDGE_MARGIN
}

/// Multiples of the grid step lying inside `min..=max`, at most `MAX_TICKS`
/// of them.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ticks(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let step = grid_step(max - min);
    let first = (min / step).ceil();
    let last = (max / step).floor();

    let count = if step.is_finite() && step > 0.0 && last >= first {
        ((last - first) as usize).saturating_add(1).min(MAX_TICKS)
    } else {
        0
    };

    (0..count).filter_map(usize_to_f64_checked)
              .map(move |i| (first + i) * step)
}

/// Formats a grid label with at most four significant digits.
///
/// # Example
/// ```
/// use funcplot::plot::postscript::label;
///
/// assert_eq!(label(2.0), "2");
/// assert_eq!(label(0.30000000000000004), "0.3");
/// assert_eq!(label(-1.25), "-1.25");
/// assert_eq!(label(-0.0), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    let decimals = usize::try_from(3 - exponent).unwrap_or(0);
    let text = format!("{value:.decimals$}");

    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Escapes text for a PostScript string literal.
///
/// Parentheses and backslashes are escaped. Other control or non-ASCII
/// characters are written as octal escapes of their UTF-8 bytes.
///
/// # Example
/// ```
/// use funcplot::plot::postscript::escape;
///
/// assert_eq!(escape("f(x) = 1\\2"), "f\\(x\\) = 1\\\\2");
/// assert_eq!(escape("π"), "\\317\\200");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'(' | b')' | b'\\' => {
                escaped.push('\\');
                escaped.push(char::from(byte));
            },
            b' '..=b'~' => escaped.push(char::from(byte)),
            _ => escaped.push_str(&format!("\\{byte:03o}")),
        }
    }
    escaped
}
