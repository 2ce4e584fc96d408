/*

    Six plane view frustum used for culling.

    Planes are pulled out of a view-projection matrix by adding
    and subtracting its rows (Gribb & Hartmann). Depth range is
    assumed [0, 1], which is what bevy_math's perspective_rh
    produces. Plane normals point inward.

    @date: 11 Nov, 2025
*/

use crate::prelude::*;

use crate::bbox::BoundingBox;
use crate::bound::{Bound, Frustum, SceneObject};


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub d: Float,
}

impl Plane {
    /// Plane a*x + b*y + c*z + d = 0 given as (a, b, c, d), normalized.
    pub fn from_vec4(v: Vector4) -> Self {
        let normal = v.truncate();
        let len = normal.length();
        if approx_zero(len) {
            warn!("Degenerate frustum plane {:?}", v);
            return Self { normal, d: v.w };
        }
        Self {
            normal: normal / len,
            d: v.w / len,
        }
    }

    #[inline]
    pub fn distance_to(&self, p: &Vector3) -> Float {
        self.normal.dot(*p) + self.d
    }
}


#[derive(Debug, Clone, Copy)]
pub struct PlaneFrustum {
    planes: [Plane; 6], // left, right, bottom, top, near, far
}

impl PlaneFrustum {

    pub fn from_matrix(view_projection: &Matrix4) -> Self {
        let m = view_projection;
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));
        Self {
            planes: [
                Plane::from_vec4(r3 + r0),
                Plane::from_vec4(r3 - r0),
                Plane::from_vec4(r3 + r1),
                Plane::from_vec4(r3 - r1),
                Plane::from_vec4(r2),
                Plane::from_vec4(r3 - r2),
            ],
        }
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn contains_point(&self, p: Vector3) -> bool {
        self.planes.iter().all(|plane| plane.distance_to(&p) >= 0.0)
    }

    /// Conservative: true if the box is inside or straddles the frustum.
    /// Boxes near a frustum corner may pass while being fully outside.
    pub fn contains_aabb(&self, bbox: &BoundingBox) -> bool {
        let (min, max) = (bbox.min(), bbox.max());
        for plane in &self.planes {
            // Corner furthest along the plane normal
            let n = plane.normal;
            let p = Vector3::new(
                if n.x >= 0.0 { max.x } else { min.x },
                if n.y >= 0.0 { max.y } else { min.y },
                if n.z >= 0.0 { max.z } else { min.z },
            );
            if plane.distance_to(&p) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Same test through any volume's min/max.
    pub fn contains_bound(&self, bound: &dyn Bound) -> bool {
        self.contains_aabb(&BoundingBox::from_min_max(bound.min(), bound.max()))
    }
}

impl Frustum for PlaneFrustum {
    fn contains_box(&self, object: &dyn SceneObject) -> bool {
        if object.local_bounds().is_none() {
            return false; // nothing to draw
        }
        let mut world = BoundingBox::default();
        world.calculate_transform(object);
        self.contains_aabb(&world)
    }
}
