//! Composition policies as plain records of functions.
//!
//! A policy supplies the two dimension reducers folded over the children and
//! the relative move issued before each child is drawn.
//!
//! Reducer quirks (kept as-is; rendered output depends on them)
//! - Every width reducer reads the child's *height*.
//! - Vertical height and horizontal width keep only the last child's value.

use super::Compound;
use crate::shape::{Geometry, Shape};

/// Relative move emitted before child `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// `0 0 rmoveto`.
    Zero,
    /// `0 <dy> rmoveto`.
    Vertical(f64),
    /// `<dx> 0 rmoveto`.
    Horizontal(f64),
}

impl Offset {
    pub fn as_vector(self) -> nalgebra::Vector2<f64> {
        match self {
            Offset::Zero => nalgebra::Vector2::zeros(),
            Offset::Vertical(dy) => nalgebra::Vector2::new(0.0, dy),
            Offset::Horizontal(dx) => nalgebra::Vector2::new(dx, 0.0),
        }
    }
}

/// Reducers and placement for one arrangement.
#[derive(Clone, Copy)]
pub struct Policy {
    pub name: &'static str,
    pub combined_height: fn(f64, &Shape) -> f64,
    pub combined_width: fn(f64, &Shape) -> f64,
    pub offset: fn(&Compound, usize) -> Offset,
}

impl std::fmt::Debug for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Policy").field("name", &self.name).finish()
    }
}

pub static LAYERED: Policy = Policy {
    name: "layered",
    combined_height: max_height,
    combined_width: max_height,
    offset: no_offset,
};

pub static VERTICAL: Policy = Policy {
    name: "vertical",
    combined_height: last_height,
    combined_width: max_height,
    offset: vertical_offset,
};

pub static HORIZONTAL: Policy = Policy {
    name: "horizontal",
    combined_height: max_height,
    combined_width: last_height,
    offset: horizontal_offset,
};

fn max_height(acc: f64, child: &Shape) -> f64 {
    acc.max(child.height())
}

fn last_height(_acc: f64, child: &Shape) -> f64 {
    child.height()
}

fn no_offset(_c: &Compound, _i: usize) -> Offset {
    Offset::Zero
}

fn vertical_offset(c: &Compound, i: usize) -> Offset {
    let ch = c.children();
    if i == 0 {
        Offset::Vertical(ch[0].height() / 2.0 - c.height() / 2.0)
    } else {
        Offset::Vertical(ch[i].height() / 2.0 + ch[i - 1].height() / 2.0)
    }
}

fn horizontal_offset(c: &Compound, i: usize) -> Offset {
    let ch = c.children();
    if i == 0 {
        Offset::Horizontal(ch[0].width() / 2.0 - c.width() / 2.0)
    } else {
        Offset::Horizontal(ch[i].width() / 2.0 + ch[i - 1].width() / 2.0)
    }
}
