//! Shape tree: one closed sum type over every node kind.
//!
//! Purpose
//! - `Shape` covers leaves (`primitive`), single-child decorators (`decor`)
//!   and multi-child compositions (`crate::compound`).
//! - `Geometry` is the capability set every node answers: bounding-box
//!   height, width, and PostScript rendering.
//!
//! Ownership
//! - Children are held through `ShapeRef = Arc<Shape>`, so one subtree can sit
//!   under several parents and trees can be read from several threads.
//! - Nodes are immutable after construction. Cycles cannot be built through
//!   the public constructors; nothing detects them.
//!
//! Conventions
//! - A node renders relative to the current point, which its parent places at
//!   the center of the node's bounding box.

pub mod decor;
pub mod primitive;

use std::sync::Arc;

use crate::compound::{Arrangement, Compound};
use crate::ps::{PsWriter, RenderCfg};

pub use decor::{Rotated, Rotation, Scaled};
pub use primitive::{Circle, Polygon, Rectangle, Spacer};

/// Shared handle to an immutable shape.
pub type ShapeRef = Arc<Shape>;

/// Dimensions and rendering of a node.
///
/// All methods are pure: repeated calls on the same tree give identical
/// results.
pub trait Geometry {
    fn height(&self) -> f64;
    fn width(&self) -> f64;
    /// Append this node's drawing to `ps`.
    fn render(&self, ps: &mut PsWriter);

    /// Rendering with the default configuration.
    fn post_script(&self) -> String {
        self.post_script_with(&RenderCfg::default())
    }

    fn post_script_with(&self, cfg: &RenderCfg) -> String {
        let mut ps = PsWriter::new(*cfg);
        self.render(&mut ps);
        ps.finish()
    }
}

/// Any node of a shape tree.
#[derive(Clone, Debug)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Spacer(Spacer),
    Polygon(Polygon),
    Scaled(Scaled),
    Rotated(Rotated),
    Compound(Compound),
}

/// Variant tag, with compositions split by arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Spacer,
    Polygon,
    Scaled,
    Rotated,
    Layered,
    Vertical,
    Horizontal,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Spacer(_) => ShapeKind::Spacer,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Scaled(_) => ShapeKind::Scaled,
            Shape::Rotated(_) => ShapeKind::Rotated,
            Shape::Compound(c) => match c.arrangement() {
                Arrangement::Layered => ShapeKind::Layered,
                Arrangement::Vertical => ShapeKind::Vertical,
                Arrangement::Horizontal => ShapeKind::Horizontal,
            },
        }
    }

    /// Direct children in order (empty for leaves).
    pub fn children(&self) -> &[ShapeRef] {
        match self {
            Shape::Circle(_) | Shape::Rectangle(_) | Shape::Spacer(_) | Shape::Polygon(_) => &[],
            Shape::Scaled(s) => std::slice::from_ref(s.child()),
            Shape::Rotated(r) => std::slice::from_ref(r.child()),
            Shape::Compound(c) => c.children(),
        }
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Number of nodes; a shared subtree counts once per occurrence.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    #[inline]
    fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Circle(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Spacer(s) => s,
            Shape::Polygon(s) => s,
            Shape::Scaled(s) => s,
            Shape::Rotated(s) => s,
            Shape::Compound(s) => s,
        }
    }
}

impl Geometry for Shape {
    #[inline]
    fn height(&self) -> f64 {
        self.as_geometry().height()
    }
    #[inline]
    fn width(&self) -> f64 {
        self.as_geometry().width()
    }
    #[inline]
    fn render(&self, ps: &mut PsWriter) {
        self.as_geometry().render(ps)
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident),*) => {
        $(impl From<$ty> for Shape {
            #[inline]
            fn from(s: $ty) -> Self {
                Shape::$ty(s)
            }
        })*
    };
}

impl_from_variant!(Circle, Rectangle, Spacer, Polygon, Scaled, Rotated, Compound);
