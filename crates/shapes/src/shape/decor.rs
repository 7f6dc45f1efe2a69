//! Single-child decorators: scaling and quarter-turn rotation.

use super::{Geometry, ShapeRef};
use crate::error::GeometryError;
use crate::ps::{PsWriter, ScaledRender};

/// Child with independently scaled axes.
///
/// Rendering follows `RenderCfg::scaled`; the default placeholder emits
/// nothing, so only the reported dimensions change.
#[derive(Clone, Debug)]
pub struct Scaled {
    child: ShapeRef,
    x_scale: f64,
    y_scale: f64,
}

impl Scaled {
    pub fn new(child: ShapeRef, x_scale: f64, y_scale: f64) -> Self {
        Self {
            child,
            x_scale,
            y_scale,
        }
    }
    #[inline]
    pub fn child(&self) -> &ShapeRef {
        &self.child
    }
    #[inline]
    pub fn factors(&self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }
}

impl Geometry for Scaled {
    fn height(&self) -> f64 {
        self.y_scale * self.child.height()
    }
    fn width(&self) -> f64 {
        self.x_scale * self.child.width()
    }
    fn render(&self, ps: &mut PsWriter) {
        let mode = ps.cfg().scaled;
        match mode {
            ScaledRender::Placeholder => {}
            ScaledRender::Transform => {
                ps.raw("gsave\n")
                    .num(self.x_scale)
                    .raw(" ")
                    .num(self.y_scale)
                    .raw(" scale\n");
                self.child.render(ps);
                ps.raw("grestore\n");
            }
        }
    }
}

/// Counterclockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Accepts any angle congruent to 90, 180 or 270 modulo 360.
    pub fn from_degrees(deg: i32) -> Result<Self, GeometryError> {
        match deg.rem_euclid(360) {
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => Err(GeometryError::UnsupportedRotation(deg)),
        }
    }

    /// Quarter turns that exchange the axes.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        !matches!(self, Rotation::R180)
    }
}

/// Child rotated about the current point.
#[derive(Clone, Debug)]
pub struct Rotated {
    child: ShapeRef,
    rotation: Rotation,
}

impl Rotated {
    pub fn new(child: ShapeRef, rotation: Rotation) -> Self {
        Self { child, rotation }
    }
    #[inline]
    pub fn child(&self) -> &ShapeRef {
        &self.child
    }
    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl Geometry for Rotated {
    fn height(&self) -> f64 {
        if self.rotation.swaps_axes() {
            self.child.width()
        } else {
            self.child.height()
        }
    }
    fn width(&self) -> f64 {
        if self.rotation.swaps_axes() {
            self.child.height()
        } else {
            self.child.width()
        }
    }
    fn render(&self, ps: &mut PsWriter) {
        ps.raw("gsave\n")
            .raw(&self.rotation.degrees().to_string())
            .raw(" rotate\n");
        self.child.render(ps);
        ps.raw("grestore\n");
    }
}
