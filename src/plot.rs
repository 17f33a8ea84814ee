/// The plot viewport.
///
/// Holds the visible ranges of both axes and reads them from the
/// `xmin:xmax:ymin:ymax` form used on the command line.
pub mod limits;
/// PostScript output.
///
/// Writes a sampled plot, its frame, grid and axes as a PostScript document.
pub mod postscript;
/// Curve sampling.
///
/// Evaluates a program across the viewport and splits the results into
/// drawable segments, clipping them at the viewport edges.
pub mod sampler;

pub use limits::Limits;
pub use sampler::{Plot, Point, Sampler, Segment};
