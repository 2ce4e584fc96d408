/*

    Ray as origin + direction, with the inverse direction
    precomputed once so slab tests don't divide per box.

    Directions are NOT required to be normalized, and zero
    components are allowed: their inverse is +-inf and the
    slab test is written to tolerate that.

*/

use crate::prelude::*;


#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
    pub(crate) inv_direction: Vector3,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        if direction == Vector3::ZERO {
            trace!("Ray constructed with zero direction at {:?}", origin);
        }
        Self {
            origin,
            direction,
            inv_direction: direction.recip(), // 1/0 = inf, 1/-0 = -inf
        }
    }

    #[inline]
    pub fn inv_direction(&self) -> Vector3 {
        self.inv_direction
    }

    #[inline]
    pub fn at(&self, t: Float) -> Vector3 {
        self.origin + self.direction * t // r(t) = o + dt
    }
}
