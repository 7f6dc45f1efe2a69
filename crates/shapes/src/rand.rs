//! Random shape trees (deterministic, replayable).
//!
//! Purpose
//! - Feed benchmarks and property tests with varied but reproducible trees.
//!
//! Model
//! - Each node is a leaf with probability growing with depth; at `max_depth`
//!   it always is. Inner nodes pick a decorator or a composition uniformly.
//! - All parameters are drawn strictly positive, so generated trees satisfy
//!   the validated constructors.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::make;
use crate::shape::{Rotation, ShapeRef};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TreeCfg {
    /// Maximum depth counted in nodes (1 = single leaf). Clamped to >= 1.
    pub max_depth: usize,
    /// Children per composition are drawn from `1..=max_children`.
    pub max_children: usize,
    /// Range for radii, side lengths and extents.
    pub extent: (f64, f64),
    /// Polygons get `3..=max_sides` sides.
    pub max_sides: u32,
    /// Scale factors are drawn from this range.
    pub scale: (f64, f64),
}

impl Default for TreeCfg {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_children: 4,
            extent: (0.5, 50.0),
            max_sides: 12,
            scale: (0.25, 4.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one tree. Same `(cfg, tok)` always yields the same tree.
pub fn random_tree(cfg: TreeCfg, tok: ReplayToken) -> ShapeRef {
    let mut rng = tok.to_std_rng();
    node(&cfg, &mut rng, 1)
}

fn node<R: Rng>(cfg: &TreeCfg, rng: &mut R, depth: usize) -> ShapeRef {
    let max_depth = cfg.max_depth.max(1);
    let leaf_p = depth as f64 / max_depth as f64;
    if depth >= max_depth || rng.gen_bool(leaf_p.clamp(0.0, 1.0)) {
        return leaf(cfg, rng);
    }
    match rng.gen_range(0..5) {
        0 => {
            let (x, y) = (draw(rng, cfg.scale), draw(rng, cfg.scale));
            make::scaled(node(cfg, rng, depth + 1), x, y)
        }
        1 => {
            let rot = match rng.gen_range(0..3) {
                0 => Rotation::R90,
                1 => Rotation::R180,
                _ => Rotation::R270,
            };
            make::rotated(node(cfg, rng, depth + 1), rot)
        }
        k => {
            let n = rng.gen_range(1..=cfg.max_children.max(1));
            let children: Vec<ShapeRef> = (0..n).map(|_| node(cfg, rng, depth + 1)).collect();
            match k {
                2 => make::layered(children),
                3 => make::vertical(children),
                _ => make::horizontal(children),
            }
        }
    }
}

fn leaf<R: Rng>(cfg: &TreeCfg, rng: &mut R) -> ShapeRef {
    match rng.gen_range(0..4) {
        0 => make::circle(draw(rng, cfg.extent)),
        1 => make::rectangle(draw(rng, cfg.extent), draw(rng, cfg.extent)),
        2 => make::spacer(draw(rng, cfg.extent), draw(rng, cfg.extent)),
        _ => make::polygon(rng.gen_range(3..=cfg.max_sides.max(3)), draw(rng, cfg.extent)),
    }
}

#[inline]
fn draw<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
