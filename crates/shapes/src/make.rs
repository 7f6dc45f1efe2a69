//! Construction facade: one function per shape kind, returning a shared handle.
//!
//! - Plain constructors (`circle`, `polygon`, ...) accept any input. Degenerate
//!   parameters give degenerate but well-defined geometry (zero, negative,
//!   infinite or NaN dimensions).
//! - `try_*` constructors validate first and report a `GeometryError`. This is
//!   stricter than the plain path, not a replacement for it.

use std::sync::Arc;

use crate::compound::{Arrangement, Compound};
use crate::error::GeometryError;
use crate::shape::{Circle, Polygon, Rectangle, Rotated, Rotation, Scaled, Shape, ShapeRef, Spacer};

#[inline]
fn share(s: impl Into<Shape>) -> ShapeRef {
    Arc::new(s.into())
}

pub fn circle(radius: f64) -> ShapeRef {
    share(Circle::new(radius))
}

pub fn rectangle(width: f64, height: f64) -> ShapeRef {
    share(Rectangle::new(width, height))
}

pub fn spacer(width: f64, height: f64) -> ShapeRef {
    share(Spacer::new(width, height))
}

pub fn polygon(sides: u32, side_length: f64) -> ShapeRef {
    share(Polygon::new(sides, side_length))
}

pub fn square(side_length: f64) -> ShapeRef {
    share(Polygon::square(side_length))
}

pub fn triangle(side_length: f64) -> ShapeRef {
    share(Polygon::triangle(side_length))
}

pub fn scaled(child: ShapeRef, x_scale: f64, y_scale: f64) -> ShapeRef {
    share(Scaled::new(child, x_scale, y_scale))
}

pub fn rotated(child: ShapeRef, rotation: Rotation) -> ShapeRef {
    share(Rotated::new(child, rotation))
}

pub fn layered(children: impl IntoIterator<Item = ShapeRef>) -> ShapeRef {
    share(Compound::new(Arrangement::Layered, children))
}

pub fn vertical(children: impl IntoIterator<Item = ShapeRef>) -> ShapeRef {
    share(Compound::new(Arrangement::Vertical, children))
}

pub fn horizontal(children: impl IntoIterator<Item = ShapeRef>) -> ShapeRef {
    share(Compound::new(Arrangement::Horizontal, children))
}

// Validated constructors.

fn reject(err: GeometryError) -> GeometryError {
    tracing::debug!(%err, "rejected shape parameters");
    err
}

#[inline]
fn positive(x: f64) -> bool {
    x > 0.0 && x.is_finite()
}

#[inline]
fn non_negative(x: f64) -> bool {
    x >= 0.0 && x.is_finite()
}

pub fn try_circle(radius: f64) -> Result<ShapeRef, GeometryError> {
    if !positive(radius) {
        return Err(reject(GeometryError::NonPositiveRadius(radius)));
    }
    Ok(circle(radius))
}

pub fn try_rectangle(width: f64, height: f64) -> Result<ShapeRef, GeometryError> {
    for (what, value) in [("width", width), ("height", height)] {
        if !positive(value) {
            return Err(reject(GeometryError::NonPositiveExtent { what, value }));
        }
    }
    Ok(rectangle(width, height))
}

pub fn try_spacer(width: f64, height: f64) -> Result<ShapeRef, GeometryError> {
    for (what, value) in [("width", width), ("height", height)] {
        if !non_negative(value) {
            return Err(reject(GeometryError::NegativeExtent { what, value }));
        }
    }
    Ok(spacer(width, height))
}

pub fn try_polygon(sides: u32, side_length: f64) -> Result<ShapeRef, GeometryError> {
    if sides < 3 {
        return Err(reject(GeometryError::TooFewSides(sides)));
    }
    if !positive(side_length) {
        return Err(reject(GeometryError::NonPositiveSide(side_length)));
    }
    Ok(polygon(sides, side_length))
}

pub fn try_square(side_length: f64) -> Result<ShapeRef, GeometryError> {
    try_polygon(4, side_length)
}

pub fn try_triangle(side_length: f64) -> Result<ShapeRef, GeometryError> {
    try_polygon(3, side_length)
}

pub fn try_scaled(child: ShapeRef, x_scale: f64, y_scale: f64) -> Result<ShapeRef, GeometryError> {
    if !positive(x_scale) || !positive(y_scale) {
        return Err(reject(GeometryError::NonPositiveScale {
            x: x_scale,
            y: y_scale,
        }));
    }
    Ok(scaled(child, x_scale, y_scale))
}

/// Rotation given in degrees; see `Rotation::from_degrees`.
pub fn try_rotated(child: ShapeRef, degrees: i32) -> Result<ShapeRef, GeometryError> {
    let rotation = Rotation::from_degrees(degrees).map_err(reject)?;
    Ok(rotated(child, rotation))
}

fn try_compound(
    arrangement: Arrangement,
    children: impl IntoIterator<Item = ShapeRef>,
) -> Result<ShapeRef, GeometryError> {
    let c = Compound::new(arrangement, children);
    if c.is_empty() {
        return Err(reject(GeometryError::EmptyComposition));
    }
    Ok(share(c))
}

pub fn try_layered(children: impl IntoIterator<Item = ShapeRef>) -> Result<ShapeRef, GeometryError> {
    try_compound(Arrangement::Layered, children)
}

pub fn try_vertical(children: impl IntoIterator<Item = ShapeRef>) -> Result<ShapeRef, GeometryError> {
    try_compound(Arrangement::Vertical, children)
}

pub fn try_horizontal(
    children: impl IntoIterator<Item = ShapeRef>,
) -> Result<ShapeRef, GeometryError> {
    try_compound(Arrangement::Horizontal, children)
}
