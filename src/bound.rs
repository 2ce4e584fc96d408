/*

    Capability contract shared by every bounding volume,
    plus the collaborator traits the volumes talk to
    (scene objects that own a transform, frustums that
    answer containment).

    Generic culling code should only depend on `Bound`,
    never on a concrete volume type.

    @date: 9 Nov, 2025
*/

use std::fmt::Debug;
use thiserror::Error;

use crate::prelude::*;
use crate::bbox::BoundingBox;
use crate::ray::Ray;

pub type HeapAllocatedBound = Box<dyn Bound>;


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundError {
    /// The volume does not provide this query; see the message for the alternative.
    #[error("{0} is not implemented for this bounding volume")]
    NotImplemented(&'static str),
}


/// Size argument of `set_from_center_and_size`: one scalar for every axis, or one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundSize {
    Uniform(Float),
    PerAxis(Vector3),
}

impl BoundSize {
    pub fn to_vec3(self) -> Vector3 {
        match self {
            BoundSize::Uniform(s) => Vector3::splat(s),
            BoundSize::PerAxis(v) => v,
        }
    }
}

impl From<Float> for BoundSize {
    fn from(s: Float) -> Self {
        BoundSize::Uniform(s)
    }
}

impl From<Vector3> for BoundSize {
    fn from(v: Vector3) -> Self {
        BoundSize::PerAxis(v)
    }
}


/// Anything in a scene graph that owns a world transform and, optionally, geometry.
pub trait SceneObject {
    fn world_matrix(&self) -> Matrix4;

    /// Object-space bounds of the geometry, None if the object has nothing to draw.
    fn local_bounds(&self) -> Option<BoundingBox>;
}

/// Frustum side of the culling test. Volumes delegate to this instead of doing plane math.
pub trait Frustum {
    fn contains_box(&self, object: &dyn SceneObject) -> bool;
}


// =======================================================================================================
// Bound Trait
// =======================================================================================================
pub trait Bound: Debug + Send + Sync {
    fn center(&self) -> Vector3;
    fn extents(&self) -> Vector3;
    fn size(&self) -> Vector3;
    fn min(&self) -> Vector3;
    fn max(&self) -> Vector3;

    /// Radius of a sphere centered at `center()` that covers the volume.
    fn bounding_radius(&self) -> Float {
        self.extents().length()
    }

    /// Recompute this volume from `object`'s world transform. No-op for objects without geometry.
    fn calculate_transform(&mut self, object: &dyn SceneObject);

    fn clone_bound(&self) -> HeapAllocatedBound;

    /// Expand in place so that `other` is covered.
    fn merge(&mut self, other: &dyn Bound);

    /// Ok(Some(hit point)) on hit, Ok(None) on miss.
    fn intersects_ray(&self, ray: &Ray) -> Result<Option<Vector3>, BoundError>;

    fn contains_point(&self, point: Vector3) -> bool;

    fn set_from_center_and_size(&mut self, center: Vector3, size: BoundSize);

    fn contains_frustum(&self, object: &dyn SceneObject, frustum: &dyn Frustum) -> bool {
        frustum.contains_box(object)
    }
}
