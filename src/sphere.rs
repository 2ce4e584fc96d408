/*

    Bounding sphere, the second volume behind the Bound trait.

    min/max/extents/size are derived from (center, radius) on
    read, so there is nothing to keep in sync here.

    @date: 10 Nov, 2025
*/

use crate::prelude::*;

use crate::bbox::BoundingBox;
use crate::bound::{Bound, BoundError, BoundSize, HeapAllocatedBound, SceneObject};
use crate::ray::Ray;


#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingSphere {
    pub center: Vector3,
    pub radius: Float,
}

impl BoundingSphere {
    pub fn new(center: Vector3, radius: Float) -> Self {
        Self { center, radius }
    }

    /// Circumscribed sphere of `bbox`.
    pub fn from_bounding_box(bbox: &BoundingBox) -> Self {
        Self {
            center: bbox.center(),
            radius: bbox.extents().length(),
        }
    }

    /// Smallest sphere around both this sphere and (center, radius).
    fn enclose(&mut self, center: Vector3, radius: Float) {
        let offset = center - self.center;
        let dist = offset.length();

        if dist + radius <= self.radius {
            return; // already inside
        }
        if dist + self.radius <= radius {
            self.center = center;
            self.radius = radius;
            return;
        }

        let new_radius = (dist + self.radius + radius) * 0.5;
        // dist > 0 here, otherwise one of the containment cases above holds
        self.center += offset * ((new_radius - self.radius) / dist);
        self.radius = new_radius;
    }
}

impl Bound for BoundingSphere {
    fn center(&self) -> Vector3 {
        self.center
    }

    fn extents(&self) -> Vector3 {
        Vector3::splat(self.radius)
    }

    fn size(&self) -> Vector3 {
        Vector3::splat(self.radius * 2.0)
    }

    fn min(&self) -> Vector3 {
        self.center - self.radius
    }

    fn max(&self) -> Vector3 {
        self.center + self.radius
    }

    fn bounding_radius(&self) -> Float {
        self.radius
    }

    fn calculate_transform(&mut self, object: &dyn SceneObject) {
        let Some(local) = object.local_bounds() else {
            return;
        };
        let mat = object.world_matrix();
        let local_sphere = BoundingSphere::from_bounding_box(&local);

        self.center = transform_point(&mat, &local_sphere.center);
        self.radius = local_sphere.radius * max_axis_scale(&mat);
    }

    fn clone_bound(&self) -> HeapAllocatedBound {
        Box::new(*self)
    }

    fn merge(&mut self, other: &dyn Bound) {
        self.enclose(other.center(), other.bounding_radius());
    }

    fn intersects_ray(&self, ray: &Ray) -> Result<Option<Vector3>, BoundError> {
        // Ray-Sphere Intersection, |o + td - c|^2 = r^2
        let o_minus_c = ray.origin - self.center;
        let d_dot_d: Float = ray.direction.dot(ray.direction);
        if d_dot_d == 0.0 {
            // Not a ray, only the origin can be "hit"
            return Ok(self.contains_point(ray.origin).then_some(ray.origin));
        }
        let d_dot_oc: Float = ray.direction.dot(o_minus_c);
        let oc_dot_oc: Float = o_minus_c.dot(o_minus_c);
        let discriminant: Float = d_dot_oc.powi(2) - d_dot_d * (oc_dot_oc - self.radius.powi(2));
        if discriminant < 0. { // Negative square root
            return Ok(None);
        }

        let discriminant = discriminant.sqrt();
        let t1 = (-d_dot_oc + discriminant) / d_dot_d;
        let t2 = (-d_dot_oc - discriminant) / d_dot_d; // t2 <= t1

        let t = if t2 >= 0.0 { t2 } else { t1 }; // Pick smaller first
        if t < 0.0 {
            return Ok(None); // Sphere is behind the origin
        }
        Ok(Some(ray.at(t)))
    }

    fn contains_point(&self, point: Vector3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    fn set_from_center_and_size(&mut self, center: Vector3, size: BoundSize) {
        self.center = center;
        self.radius = match size {
            BoundSize::Uniform(s) => s * 0.5,
            BoundSize::PerAxis(v) => v.max_element() * 0.5,
        };
    }
}
