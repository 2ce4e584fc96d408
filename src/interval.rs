/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b].

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - NONNEGATIVE: [0, MAX]

    Used by the slab test to clip a ray's parametric
    range, and by point folding to grow per-axis ranges.

    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    // Upper bound is the largest finite distance, not infinity,
    // so that a clipped range never silently becomes (x, inf].
    pub const NONNEGATIVE: Self = Self {
        min: 0.0,
        max: FloatConst::MAX,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.max >= self.min
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

    /// Narrow this range to its overlap with [enter, exit].
    /// NaN bounds are ignored (f64::max / f64::min semantics).
    pub fn clip(&mut self, enter: Float, exit: Float) {
        self.min = self.min.max(enter);
        self.max = self.max.min(exit);
    }
}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
    const MAX: Self;
}

impl FloatConst for f32 {
    const INF: Self = f32::INFINITY;
    const NEG_INF: Self = f32::NEG_INFINITY;
    const MAX: Self = f32::MAX;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
    const MAX: Self = f64::MAX;
}
