
pub mod numeric;
pub mod interval;
pub mod ray;
pub mod bound;
pub mod bbox;
pub mod sphere;
pub mod frustum;
pub mod camera;
pub mod scene;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;

pub use bbox::BoundingBox;
pub use bound::{Bound, BoundError, BoundSize, Frustum, SceneObject};
pub use frustum::PlaneFrustum;
pub use ray::Ray;
pub use sphere::BoundingSphere;
