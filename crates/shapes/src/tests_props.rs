//! Property tests over leaves, decorators and random trees.
//!
//! Inputs are drawn strictly positive; degenerate parameters are covered by
//! the unit tests in `make`.

use proptest::prelude::*;

use crate::make::{circle, polygon, rectangle, rotated, scaled, spacer, square, triangle};
use crate::rand::{random_tree, ReplayToken, TreeCfg};
use crate::shape::{Geometry, Rotation};

fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::R90),
        Just(Rotation::R180),
        Just(Rotation::R270)
    ]
}

proptest! {
    #[test]
    fn circle_is_its_diameter(r in 1e-6f64..1e6) {
        let c = circle(r);
        prop_assert_eq!(c.height(), 2.0 * r);
        prop_assert_eq!(c.width(), 2.0 * r);
    }

    #[test]
    fn square_is_side_by_side(s in 1e-3f64..1e3) {
        let q = square(s);
        prop_assert!((q.height() - s).abs() <= 1e-12 * s.max(1.0));
        prop_assert!((q.width() - s).abs() <= 1e-12 * s.max(1.0));
    }

    #[test]
    fn triangle_height(s in 1e-3f64..1e3) {
        let t = triangle(s);
        prop_assert!((t.height() - s * 3f64.sqrt() / 2.0).abs() <= 1e-12 * s.max(1.0));
    }

    #[test]
    fn polygon_dimensions_positive(n in 3u32..64, s in 1e-3f64..1e3) {
        let p = polygon(n, s);
        prop_assert!(p.height() > 0.0);
        prop_assert!(p.width() > 0.0);
    }

    #[test]
    fn scaled_multiplies(w in 0.1f64..100.0, h in 0.1f64..100.0, x in 0.1f64..10.0, y in 0.1f64..10.0) {
        let s = scaled(rectangle(w, h), x, y);
        prop_assert_eq!(s.width(), x * w);
        prop_assert_eq!(s.height(), y * h);
    }

    #[test]
    fn rotated_dimensions(w in 0.1f64..100.0, h in 0.1f64..100.0, rot in rotation()) {
        let r = rotated(rectangle(w, h), rot);
        if rot == Rotation::R180 {
            prop_assert_eq!((r.width(), r.height()), (w, h));
        } else {
            prop_assert_eq!((r.width(), r.height()), (h, w));
        }
    }

    #[test]
    fn spacer_never_draws(w in 0.0f64..100.0, h in 0.0f64..100.0) {
        prop_assert_eq!(spacer(w, h).post_script(), "");
    }

    #[test]
    fn random_trees_are_pure_and_non_negative(seed in any::<u64>(), index in 0u64..1000) {
        let t = random_tree(TreeCfg::default(), ReplayToken { seed, index });
        prop_assert!(t.height() >= 0.0);
        prop_assert!(t.width() >= 0.0);
        let first = t.post_script();
        prop_assert_eq!(&first, &t.post_script());
        prop_assert_eq!(
            first.matches("gsave").count(),
            first.matches("grestore").count()
        );
    }
}
