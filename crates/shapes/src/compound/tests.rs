use std::sync::Arc;

use nalgebra::vector;

use super::*;
use crate::make::{circle, horizontal, layered, rectangle, spacer, vertical};
use crate::shape::Shape;

#[test]
fn layered_width_reduces_on_height() {
    // A: h=4 w=2, B: h=2 w=6. Width folds over heights too.
    let s = layered([rectangle(2.0, 4.0), rectangle(6.0, 2.0)]);
    assert_eq!(s.height(), 4.0);
    assert_eq!(s.width(), 4.0);
}

#[test]
fn vertical_height_is_last_child() {
    let s = vertical([rectangle(1.0, 4.0), rectangle(1.0, 6.0)]);
    assert_eq!(s.height(), 6.0);
    let s = vertical([rectangle(1.0, 6.0), rectangle(1.0, 4.0)]);
    assert_eq!(s.height(), 4.0);
    // Width is the largest child height.
    assert_eq!(s.width(), 6.0);
}

#[test]
fn horizontal_width_is_last_child_height() {
    let s = horizontal([rectangle(2.0, 4.0), rectangle(6.0, 2.0)]);
    assert_eq!(s.height(), 4.0);
    assert_eq!(s.width(), 2.0);
}

#[test]
fn empty_composition() {
    for s in [
        layered(Vec::<ShapeRef>::new()),
        vertical(Vec::<ShapeRef>::new()),
        horizontal(Vec::<ShapeRef>::new()),
    ] {
        assert_eq!(s.height(), 0.0);
        assert_eq!(s.width(), 0.0);
        assert_eq!(s.post_script(), "gsave\ngrestore\n");
    }
}

#[test]
fn layered_output_uses_zero_moves() {
    let a = rectangle(2.0, 4.0);
    let b = circle(1.0);
    let s = layered([a.clone(), b.clone()]);
    assert_eq!(
        s.post_script(),
        format!(
            "gsave\n0 0 rmoveto\n{}0 0 rmoveto\n{}grestore\n",
            a.post_script(),
            b.post_script()
        )
    );
}

#[test]
fn vertical_offsets_are_relative() {
    let a = rectangle(2.0, 4.0);
    let b = rectangle(2.0, 6.0);
    let s = vertical([a.clone(), b.clone()]);
    let Shape::Compound(c) = &*s else {
        panic!("expected compound");
    };
    // First: 4/2 - 6/2; then 6/2 + 4/2.
    assert_eq!(c.placement(0), Some(Offset::Vertical(-1.0)));
    assert_eq!(c.placement(1), Some(Offset::Vertical(5.0)));
    assert_eq!(c.placement(2), None);
    assert_eq!(c.anchors(), vec![vector![0.0, -1.0], vector![0.0, 4.0]]);
    assert_eq!(
        s.post_script(),
        format!(
            "gsave\n0 -1.000000 rmoveto\n{}0 5.000000 rmoveto\n{}grestore\n",
            a.post_script(),
            b.post_script()
        )
    );
}

#[test]
fn horizontal_offsets_are_relative() {
    let a = rectangle(2.0, 4.0);
    let b = rectangle(6.0, 2.0);
    let s = horizontal([a.clone(), b.clone()]);
    let Shape::Compound(c) = &*s else {
        panic!("expected compound");
    };
    // Total width is 2 (last child's height): 2/2 - 2/2, then 6/2 + 2/2.
    assert_eq!(c.placement(0), Some(Offset::Horizontal(0.0)));
    assert_eq!(c.placement(1), Some(Offset::Horizontal(4.0)));
    assert_eq!(
        s.post_script(),
        format!(
            "gsave\n0.000000 0 rmoveto\n{}4.000000 0 rmoveto\n{}grestore\n",
            a.post_script(),
            b.post_script()
        )
    );
}

#[test]
fn placement_past_the_end_is_none() {
    let s = layered(Vec::<ShapeRef>::new());
    let Shape::Compound(c) = &*s else {
        panic!("expected compound");
    };
    assert_eq!(c.placement(0), None);
    assert!(c.anchors().is_empty());

    let s = horizontal([circle(1.0)]);
    let Shape::Compound(c) = &*s else {
        panic!("expected compound");
    };
    assert_eq!(c.placement(0), Some(Offset::Horizontal(0.0)));
    assert_eq!(c.placement(1), None);
    assert_eq!(c.placement(usize::MAX), None);
}

#[test]
fn spacer_takes_room_but_draws_nothing() {
    let s = vertical([spacer(1.0, 3.0), circle(1.0)]);
    assert_eq!(s.height(), 2.0);
    assert_eq!(s.width(), 3.0);
    assert_eq!(
        s.post_script(),
        format!(
            "gsave\n0 0.500000 rmoveto\n0 2.500000 rmoveto\n{}grestore\n",
            circle(1.0).post_script()
        )
    );
}

#[test]
fn policies_are_data() {
    assert_eq!(Arrangement::Layered.policy().name, "layered");
    assert_eq!(Arrangement::Vertical.policy().name, "vertical");
    assert_eq!(Arrangement::Horizontal.policy().name, "horizontal");
    let child = rectangle(10.0, 3.0);
    assert_eq!((LAYERED.combined_width)(1.0, &child), 3.0);
    assert_eq!((VERTICAL.combined_height)(100.0, &child), 3.0);
    assert_eq!((HORIZONTAL.combined_width)(100.0, &child), 3.0);
    assert_eq!((HORIZONTAL.combined_height)(100.0, &child), 100.0);
}

#[test]
fn shared_child_under_two_parents() {
    let shared = circle(2.0);
    let a = vertical([shared.clone(), rectangle(1.0, 1.0)]);
    let b = horizontal([rectangle(1.0, 1.0), shared.clone()]);
    assert_eq!(Arc::strong_count(&shared), 3);
    let outer = layered([a.clone(), b.clone()]);
    assert!(outer.post_script().matches(" arc ").count() == 2);
    drop(outer);
    drop(a);
    drop(b);
    assert_eq!(Arc::strong_count(&shared), 1);
}

#[test]
fn render_is_idempotent() {
    let s = horizontal([
        vertical([circle(1.0), rectangle(2.0, 3.0)]),
        layered([spacer(1.0, 1.0), crate::make::triangle(2.0)]),
    ]);
    assert_eq!(s.post_script(), s.post_script());
    assert_eq!(s.height().to_bits(), s.height().to_bits());
}

#[test]
fn trees_are_readable_across_threads() {
    let s = vertical([circle(1.0), crate::make::square(2.0)]);
    let expected = s.post_script();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = Arc::clone(&s);
            std::thread::spawn(move || s.post_script())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
