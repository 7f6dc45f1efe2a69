//! PostScript text emission.
//!
//! - `RenderCfg`: pins how numbers are printed and how scaled shapes render.
//! - `PsWriter`: append-only buffer shared by a whole tree traversal.
//! - `document`: wraps a rendering into a standalone page.
//!
//! Output conventions
//! - Every self-contained drawing unit is bracketed by `gsave`/`grestore`.
//! - Paths use relative moves (`rmoveto`, `rlineto`) from the current point,
//!   which a parent positions at the center of the child's bounding box.

use std::fmt::Write as _;

use nalgebra::Vector2;

use crate::shape::{Geometry, Shape};

/// How floating point numbers are turned into PostScript literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// Fixed number of fractional digits (`Fixed(6)` matches C `%f`).
    Fixed(usize),
    /// Shortest decimal that round-trips to the same `f64`.
    Shortest,
}

/// What a `Scaled` node emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaledRender {
    /// Empty text; only the reported dimensions are scaled.
    Placeholder,
    /// Child wrapped in `gsave <x> <y> scale ... grestore`.
    Transform,
}

/// Render configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCfg {
    pub numbers: NumberFormat,
    pub scaled: ScaledRender,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            numbers: NumberFormat::Fixed(6),
            scaled: ScaledRender::Placeholder,
        }
    }
}

/// Append-only PostScript buffer.
#[derive(Debug)]
pub struct PsWriter {
    cfg: RenderCfg,
    out: String,
}

impl PsWriter {
    pub fn new(cfg: RenderCfg) -> Self {
        Self {
            cfg,
            out: String::new(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &RenderCfg {
        &self.cfg
    }

    /// Verbatim text.
    #[inline]
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.out.push_str(s);
        self
    }

    /// A number literal in the configured format (no separators added).
    pub fn num(&mut self, x: f64) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = match self.cfg.numbers {
            NumberFormat::Fixed(digits) => write!(self.out, "{x:.digits$}"),
            NumberFormat::Shortest => write!(self.out, "{x}"),
        };
        self
    }

    /// `<dx> <dy> rmoveto\n`.
    pub fn rmoveto(&mut self, d: Vector2<f64>) -> &mut Self {
        self.num(d.x).raw(" ").num(d.y).raw(" rmoveto\n")
    }

    /// `<dx> <dy> rlineto\n`.
    pub fn rlineto(&mut self, d: Vector2<f64>) -> &mut Self {
        self.num(d.x).raw(" ").num(d.y).raw(" rlineto\n")
    }

    /// Closes and strokes the current path, ending the unit opened by `gsave`.
    pub fn close_stroke(&mut self) -> &mut Self {
        self.raw("closepath\nstroke\ngrestore\n")
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Minimal standalone page: the shape is drawn centered at `origin`.
pub fn document(shape: &Shape, cfg: RenderCfg, origin: Vector2<f64>) -> String {
    let mut ps = PsWriter::new(cfg);
    ps.raw("%!PS-Adobe-3.0\n")
        .raw("%%BoundingBox: 0 0 ")
        .raw(&format!(
            "{} {}\n",
            (origin.x + shape.width() / 2.0).ceil().max(0.0),
            (origin.y + shape.height() / 2.0).ceil().max(0.0)
        ))
        .num(origin.x)
        .raw(" ")
        .num(origin.y)
        .raw(" moveto\n");
    shape.render(&mut ps);
    ps.raw("showpage\n");
    ps.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn fixed_matches_c_percent_f() {
        let mut ps = PsWriter::new(RenderCfg::default());
        ps.num(1.0).raw(" ").num(-0.5).raw(" ").num(1.0 / 3.0);
        assert_eq!(ps.finish(), "1.000000 -0.500000 0.333333");
    }

    #[test]
    fn shortest_round_trips() {
        let cfg = RenderCfg {
            numbers: NumberFormat::Shortest,
            ..RenderCfg::default()
        };
        let mut ps = PsWriter::new(cfg);
        ps.rmoveto(vector![0.1, -2.0]);
        assert_eq!(ps.finish(), "0.1 -2 rmoveto\n");
    }

    #[test]
    fn document_wraps_body() {
        let c = crate::make::circle(1.0);
        let doc = document(&c, RenderCfg::default(), vector![100.0, 200.0]);
        assert!(doc.starts_with("%!PS-Adobe-3.0\n%%BoundingBox: 0 0 101 201\n"));
        assert!(doc.contains("100.000000 200.000000 moveto\n"));
        assert!(doc.contains(&c.post_script()));
        assert!(doc.ends_with("showpage\n"));
    }
}
