//! Multi-child compositions (layered, vertical, horizontal).
//!
//! Purpose
//! - One traversal for all arrangements: dimensions are a left fold over the
//!   children starting at 0, rendering is `gsave`, then per child a relative
//!   move followed by the child's own output, then `grestore`.
//! - What differs per arrangement lives in a `Policy` record (`policy.rs`).
//!
//! Placement
//! - Moves are relative and accumulate: after child `i` the current point is
//!   the sum of every offset so far. Offsets are never recomputed as absolute
//!   coordinates.

pub mod policy;

use nalgebra::Vector2;

use crate::ps::PsWriter;
use crate::shape::{Geometry, ShapeRef};

pub use policy::{Offset, Policy, HORIZONTAL, LAYERED, VERTICAL};

/// How a composition places its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arrangement {
    /// All children share the same origin.
    Layered,
    /// Stacked along y.
    Vertical,
    /// Stacked along x.
    Horizontal,
}

impl Arrangement {
    pub fn policy(self) -> &'static Policy {
        match self {
            Arrangement::Layered => &LAYERED,
            Arrangement::Vertical => &VERTICAL,
            Arrangement::Horizontal => &HORIZONTAL,
        }
    }
}

/// Ordered children under one arrangement. Insertion order is drawing order.
#[derive(Clone, Debug)]
pub struct Compound {
    arrangement: Arrangement,
    children: Vec<ShapeRef>,
}

impl Compound {
    pub fn new(arrangement: Arrangement, children: impl IntoIterator<Item = ShapeRef>) -> Self {
        Self {
            arrangement,
            children: children.into_iter().collect(),
        }
    }

    #[inline]
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    #[inline]
    pub fn policy(&self) -> &'static Policy {
        self.arrangement.policy()
    }

    #[inline]
    pub fn children(&self) -> &[ShapeRef] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Relative move issued before child `i`, or `None` past the last child.
    pub fn placement(&self, i: usize) -> Option<Offset> {
        self.children.get(i).map(|_| self.offset(i))
    }

    /// `i` must index a child.
    #[inline]
    fn offset(&self, i: usize) -> Offset {
        (self.policy().offset)(self, i)
    }

    /// Current point after each child's move, relative to where the
    /// composition started.
    pub fn anchors(&self) -> Vec<Vector2<f64>> {
        let mut at = Vector2::zeros();
        (0..self.len())
            .map(|i| {
                at += self.offset(i).as_vector();
                at
            })
            .collect()
    }
}

impl Geometry for Compound {
    fn height(&self) -> f64 {
        let reduce = self.policy().combined_height;
        self.children.iter().fold(0.0, |acc, c| reduce(acc, c))
    }

    fn width(&self) -> f64 {
        let reduce = self.policy().combined_width;
        self.children.iter().fold(0.0, |acc, c| reduce(acc, c))
    }

    fn render(&self, ps: &mut PsWriter) {
        tracing::trace!(
            arrangement = self.policy().name,
            children = self.children.len(),
            "render compound"
        );
        ps.raw("gsave\n");
        for (i, child) in self.children.iter().enumerate() {
            match self.offset(i) {
                Offset::Zero => ps.raw("0 0 rmoveto\n"),
                Offset::Vertical(dy) => ps.raw("0 ").num(dy).raw(" rmoveto\n"),
                Offset::Horizontal(dx) => ps.num(dx).raw(" 0 rmoveto\n"),
            };
            child.render(ps);
        }
        ps.raw("grestore\n");
    }
}

#[cfg(test)]
mod tests;
