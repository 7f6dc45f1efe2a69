//! Composable vector shapes rendered as PostScript.
//!
//! A shape tree is built from leaves (circle, rectangle, spacer, regular
//! polygon), decorators (scaled, rotated) and compositions (layered,
//! vertical, horizontal). Any node reports its bounding-box height and width
//! and renders itself as PostScript drawing commands relative to the current
//! point.
//!
//! Layout
//! - `shape`: the `Shape` sum type, `Geometry` trait, leaves and decorators.
//! - `compound`: shared fold traversal plus the three placement policies.
//! - `make`: construction facade (plain and validated).
//! - `ps`: text emission and render configuration.
//! - `rand`: replayable random trees for benches and tests.

pub mod compound;
pub mod error;
pub mod make;
pub mod ps;
pub mod rand;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeometryError;
pub use nalgebra::Vector2 as Vec2;
pub use shape::{Geometry, Shape, ShapeKind, ShapeRef};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compound::{Arrangement, Compound, Offset, Policy};
    pub use crate::error::GeometryError;
    pub use crate::make::{
        circle, horizontal, layered, polygon, rectangle, rotated, scaled, spacer, square,
        triangle, vertical,
    };
    pub use crate::ps::{document, NumberFormat, RenderCfg, ScaledRender};
    pub use crate::shape::{Geometry, Rotation, Shape, ShapeKind, ShapeRef};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests_props;
