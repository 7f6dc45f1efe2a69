//! Leaf shapes with closed-form dimensions.
//!
//! Polygon conventions
//! - Regular `n`-gon with side `s`; the first edge is horizontal at the bottom.
//! - Even `n`: flat top and bottom, height is twice the apothem.
//! - Odd `n`: a vertex sits on the vertical axis at the top, height is
//!   apothem + circumradius.
//! - `n % 4 == 0`: flat left and right edges, width equals height. Other even
//!   `n` have vertices on the horizontal axis (width = circumdiameter). Odd `n`
//!   use the widest vertex pair.
//! - The formulas below are used verbatim by layout; do not re-derive them.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::Geometry;
use crate::ps::PsWriter;

/// Circle centered on the current point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry for Circle {
    fn height(&self) -> f64 {
        2.0 * self.radius
    }
    fn width(&self) -> f64 {
        2.0 * self.radius
    }
    fn render(&self, ps: &mut PsWriter) {
        ps.raw("gsave currentpoint translate newpath 0 0 ")
            .num(self.radius)
            .raw(" 0 360 arc closepath stroke grestore\n");
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Geometry for Rectangle {
    fn height(&self) -> f64 {
        self.height
    }
    fn width(&self) -> f64 {
        self.width
    }
    /// Moves from the center to the bottom-left corner, then draws three edges;
    /// `closepath` supplies the fourth.
    fn render(&self, ps: &mut PsWriter) {
        let (w, h) = (self.width, self.height);
        ps.raw("gsave\n")
            .rmoveto(Vector2::new(-w / 2.0, -h / 2.0))
            .num(w)
            .raw(" 0 rlineto\n")
            .raw(" 0 ")
            .num(h)
            .raw(" rlineto\n")
            .raw("-")
            .num(w)
            .raw(" 0 rlineto\n")
            .close_stroke();
    }
}

/// Invisible box that only takes up room in a layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    width: f64,
    height: f64,
}

impl Spacer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Geometry for Spacer {
    fn height(&self) -> f64 {
        self.height
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn render(&self, _ps: &mut PsWriter) {}
}

/// Regular polygon with a horizontal bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    sides: u32,
    side_length: f64,
}

impl Polygon {
    pub fn new(sides: u32, side_length: f64) -> Self {
        Self { sides, side_length }
    }

    pub fn square(side_length: f64) -> Self {
        Self::new(4, side_length)
    }

    pub fn triangle(side_length: f64) -> Self {
        Self::new(3, side_length)
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Edge `i` as a relative vector; edge 0 points along +x.
    #[inline]
    fn edge(&self, i: u32) -> Vector2<f64> {
        let dir = f64::from(i) * 2.0 * PI / f64::from(self.sides);
        Vector2::new(self.side_length * dir.cos(), self.side_length * dir.sin())
    }

    /// Vertices relative to the bounding-box center, counterclockwise from the
    /// bottom-left one.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let mut p = self.start();
        let mut out = Vec::with_capacity(self.sides as usize);
        out.push(p);
        for i in 0..self.sides.saturating_sub(1) {
            p += self.edge(i);
            out.push(p);
        }
        out
    }

    #[inline]
    fn start(&self) -> Vector2<f64> {
        Vector2::new(-self.side_length / 2.0, -self.height() / 2.0)
    }
}

impl Geometry for Polygon {
    fn height(&self) -> f64 {
        let n = f64::from(self.sides);
        let s = self.side_length;
        if self.sides % 2 == 0 {
            s * (PI / n).cos() / (PI / n).sin()
        } else {
            s * (1.0 + (PI / n).cos()) / (2.0 * (PI / n).sin())
        }
    }

    fn width(&self) -> f64 {
        let n = f64::from(self.sides);
        let s = self.side_length;
        if self.sides % 4 == 0 {
            s * (PI / n).cos() / (PI / n).sin()
        } else if self.sides % 2 == 0 {
            s / (PI / n).sin()
        } else {
            s * (PI * (n - 1.0) / (2.0 * n)).sin() / (PI / n).sin()
        }
    }

    /// Emits `n - 1` edges; `closepath` draws the last one.
    fn render(&self, ps: &mut PsWriter) {
        ps.raw("gsave\n").rmoveto(self.start());
        for i in 0..self.sides.saturating_sub(1) {
            ps.rlineto(self.edge(i));
        }
        ps.close_stroke();
    }
}
