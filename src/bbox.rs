/*

    Axis Aligned Bounding Box.

    The box keeps five views of the same volume stored side by side
    (center, extents, size, min, max) so any of them is an O(1) read
    during traversal. Fields are private and every mutation ends in
    one of two resync routines, so the views can't drift apart:

        min/max is the source    -> sync_from_min_max()
        center/size is the source -> set_from_center_and_size()

    Predicates decide on min/max only.

    @date: 9 Nov, 2025
*/

use crate::prelude::*;

use crate::bound::{Bound, BoundError, BoundSize, HeapAllocatedBound, SceneObject};
use crate::interval::Interval;
use crate::ray::Ray;

// Corner indices (see corners()) of the 12 triangles, two per face,
// counter clockwise when seen from outside the box.
//
//      7 ------ 6
//     /|       /|
//    3 ------ 2 |
//    | 4 -----|-5
//    |/       |/
//    0 ------ 1
//
// 0-3 lie on min.z, 4-7 on max.z.
#[rustfmt::skip]
const BOX_TRIANGLE_INDICES: [usize; 36] = [
    4, 5, 6,  4, 6, 7, // +z
    1, 0, 3,  1, 3, 2, // -z
    0, 4, 7,  0, 7, 3, // -x
    5, 1, 2,  5, 2, 6, // +x
    7, 6, 2,  7, 2, 3, // +y
    0, 1, 5,  0, 5, 4, // -y
];

pub const BOUND_VERTEX_COUNT: usize = BOX_TRIANGLE_INDICES.len();


#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    center: Vector3,
    extents: Vector3,
    size: Vector3,
    min: Vector3,
    max: Vector3,
}

impl Default for BoundingBox {
    /// Degenerate zero box at the origin.
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::ZERO)
    }
}

impl BoundingBox {

    pub fn new(center: Vector3, size: impl Into<BoundSize>) -> Self {
        let mut bbox = Self {
            center: Vector3::ZERO,
            extents: Vector3::ZERO,
            size: Vector3::ZERO,
            min: Vector3::ZERO,
            max: Vector3::ZERO,
        };
        bbox.set_from_center_and_size(center, size);
        bbox
    }

    pub fn from_min_max(min: Vector3, max: Vector3) -> Self {
        let mut bbox = Self::default();
        bbox.set_from_min_max(min, max);
        bbox
    }

    /// Fold `expand_by_point` over a zero box seeded at the origin.
    /// The origin is therefore always enclosed; use `from_points_exact`
    /// for the tight hull.
    pub fn from_points(points: &[Vector3]) -> Self {
        let mut bbox = Self::default();
        for p in points {
            bbox.expand_by_point(*p);
        }
        bbox
    }

    /// Tight hull of `points`, None if empty.
    pub fn from_points_exact(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self::from_min_max(*first, *first);
        for p in rest {
            bbox.expand_by_point(*p);
        }
        Some(bbox)
    }

    #[inline]
    pub fn center(&self) -> Vector3 {
        self.center
    }

    #[inline]
    pub fn extents(&self) -> Vector3 {
        self.extents
    }

    #[inline]
    pub fn size(&self) -> Vector3 {
        self.size
    }

    #[inline]
    pub fn min(&self) -> Vector3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vector3 {
        self.max
    }

    /// Stores min and max as given. An inverted pair (min > max on some axis)
    /// is not corrected: size goes negative and predicates become meaningless.
    pub fn set_from_min_max(&mut self, min: Vector3, max: Vector3) {
        if min.cmpgt(max).any() {
            trace!("Inverted bounds given, min: {:?} max: {:?}", min, max);
        }
        self.min = min;
        self.max = max;
        self.sync_from_min_max();
    }

    /// Recomputes all five fields. Negative sizes are accepted and give an inverted box.
    pub fn set_from_center_and_size(&mut self, center: Vector3, size: impl Into<BoundSize>) {
        let size = size.into().to_vec3();
        self.size = size;
        self.extents = size * 0.5;
        self.center = center;
        self.max = center + self.extents;
        self.min = center - self.extents;
    }

    /// Grow min/max to enclose `point`, then resync the derived fields.
    pub fn expand_by_point(&mut self, point: Vector3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self.sync_from_min_max();
    }

    #[inline]
    fn sync_from_min_max(&mut self) {
        self.size = self.max - self.min;
        self.extents = self.size * 0.5;
        self.center = self.min + self.extents;
    }

    // ===================================================================================================
    // Predicates
    // ===================================================================================================

    /// Inclusive separating axis test against the min/max of any volume.
    pub fn intersects(&self, other: &dyn Bound) -> bool {
        let (omin, omax) = (other.min(), other.max());
        self.min.x <= omax.x && self.max.x >= omin.x &&
        self.min.y <= omax.y && self.max.y >= omin.y &&
        self.min.z <= omax.z && self.max.z >= omin.z
    }

    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        self.intersects(other)
    }

    /// Tested against the sphere's enclosing box, so corners may report false positives.
    pub fn intersects_sphere(&self, other: &dyn Bound) -> bool {
        self.intersects(other)
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        self.min.x <= point.x && point.x <= self.max.x &&
        self.min.y <= point.y && point.y <= self.max.y &&
        self.min.z <= point.z && point.z <= self.max.z
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Exact comparison of center and extents, no epsilon.
    pub fn equals(&self, other: &BoundingBox) -> bool {
        self.center == other.center && self.extents == other.extents
    }

    /// Slab test. Hits behind the origin are not reported.
    pub fn intersect_ray(ray: &Ray, bounds: &BoundingBox) -> bool {
        Self::ray_interval(ray, bounds).is_some()
    }

    /// Parametric range [t_enter, t_exit] of `ray` inside `bounds`, clipped to t >= 0.
    pub fn ray_interval(ray: &Ray, bounds: &BoundingBox) -> Option<Interval> {
        let inv = ray.inv_direction();
        let mut ray_t = Interval::NONNEGATIVE;

        for axis in 0..3 {
            // Sign of the inverse (not the direction) so that -0 picks the swapped order
            let (near, far) = if inv[axis] < 0.0 {
                (bounds.max[axis], bounds.min[axis])
            } else {
                (bounds.min[axis], bounds.max[axis])
            };
            // Zero direction on a face plane gives 0 * inf = NaN here, clip() skips it
            let t_enter = (near - ray.origin[axis]) * inv[axis];
            let t_exit = (far - ray.origin[axis]) * inv[axis];
            ray_t.clip(t_enter, t_exit);
        }

        if ray_t.is_valid() { Some(ray_t) } else { None }
    }

    // ===================================================================================================
    // Vertex extraction
    // ===================================================================================================

    /// See the diagram above BOX_TRIANGLE_INDICES for the ordering.
    pub fn corners(&self) -> [Vector3; 8] {
        let (n, x) = (self.min, self.max);
        [
            Vector3::new(n.x, n.y, n.z),
            Vector3::new(x.x, n.y, n.z),
            Vector3::new(x.x, x.y, n.z),
            Vector3::new(n.x, x.y, n.z),
            Vector3::new(n.x, n.y, x.z),
            Vector3::new(x.x, n.y, x.z),
            Vector3::new(x.x, x.y, x.z),
            Vector3::new(n.x, x.y, x.z),
        ]
    }

    /// Flat x, y, z, w=1 buffer of the 36 triangle vertices of the box faces.
    pub fn get_bound_vertex(&self) -> Vec<Float> {
        let corners = self.corners();
        let mut out = Vec::with_capacity(BOUND_VERTEX_COUNT * 4);
        for &i in &BOX_TRIANGLE_INDICES {
            let c = corners[i];
            out.extend_from_slice(&[c.x, c.y, c.z, 1.0]);
        }
        out
    }
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}


impl Bound for BoundingBox {
    fn center(&self) -> Vector3 {
        self.center
    }

    fn extents(&self) -> Vector3 {
        self.extents
    }

    fn size(&self) -> Vector3 {
        self.size
    }

    fn min(&self) -> Vector3 {
        self.min
    }

    fn max(&self) -> Vector3 {
        self.max
    }


    fn calculate_transform(&mut self, object: &dyn SceneObject) {
        let Some(local) = object.local_bounds() else {
            return;
        };
        let mat = object.world_matrix();

        let (mut xint, mut yint, mut zint) = (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY);
        for corner in local.corners() {
            let p = transform_point(&mat, &corner);
            xint.expand(p.x);
            yint.expand(p.y);
            zint.expand(p.z);
        }

        self.set_from_min_max(
            Vector3::new(xint.min, yint.min, zint.min),
            Vector3::new(xint.max, yint.max, zint.max),
        );
    }

    fn clone_bound(&self) -> HeapAllocatedBound {
        Box::new(*self)
    }

    fn merge(&mut self, other: &dyn Bound) {
        self.min = self.min.min(other.min());
        self.max = self.max.max(other.max());
        self.sync_from_min_max();
    }

    fn intersects_ray(&self, _ray: &Ray) -> Result<Option<Vector3>, BoundError> {
        Err(BoundError::NotImplemented("intersects_ray"))
    }

    fn contains_point(&self, point: Vector3) -> bool {
        BoundingBox::contains_point(self, point)
    }

    fn set_from_center_and_size(&mut self, center: Vector3, size: BoundSize) {
        BoundingBox::set_from_center_and_size(self, center, size)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_consistent(b: &BoundingBox) {
        assert!(approx_eq_vec3(&b.min(), &(b.center() - b.extents())));
        assert!(approx_eq_vec3(&b.max(), &(b.center() + b.extents())));
        assert!(approx_eq_vec3(&b.size(), &(b.max() - b.min())));
        assert!(approx_eq_vec3(&b.extents(), &(b.size() * 0.5)));
    }

    fn unit_box() -> BoundingBox {
        BoundingBox::from_min_max(Vector3::splat(-1.), Vector3::splat(1.))
    }

    fn random_box(rng: &mut impl Rng) -> BoundingBox {
        let center = Vector3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        );
        let size = Vector3::new(
            rng.random_range(0.0..5.0),
            rng.random_range(0.0..5.0),
            rng.random_range(0.0..5.0),
        );
        BoundingBox::new(center, size)
    }

    #[test]
    fn test_construct_from_center_and_size() {
        let b = BoundingBox::new(Vector3::new(1., 2., 3.), Vector3::new(2., 4., 6.));
        assert_eq!(b.extents(), Vector3::new(1., 2., 3.));
        assert_eq!(b.min(), Vector3::ZERO);
        assert_eq!(b.max(), Vector3::new(2., 4., 6.));
        assert_consistent(&b);
    }

    #[test]
    fn test_uniform_size() {
        let b = BoundingBox::new(Vector3::ZERO, 4.0);
        assert_eq!(b.min(), Vector3::splat(-2.));
        assert_eq!(b.max(), Vector3::splat(2.));
    }

    #[test]
    fn test_set_from_min_max() {
        let mut b = BoundingBox::default();
        b.set_from_min_max(Vector3::new(0., 0., 0.), Vector3::new(2., 4., 8.));
        assert_eq!(b.center(), Vector3::new(1., 2., 4.));
        assert_eq!(b.size(), Vector3::new(2., 4., 8.));
        assert_consistent(&b);
    }

    #[test]
    fn test_inverted_min_max_is_kept_as_given() {
        let b = BoundingBox::from_min_max(Vector3::splat(1.), Vector3::splat(-1.));
        assert_eq!(b.min(), Vector3::splat(1.));
        assert_eq!(b.size(), Vector3::splat(-2.));
        assert!(!b.contains_point(Vector3::ZERO));
    }

    #[test]
    fn test_negative_size_is_deterministic() {
        let b = BoundingBox::new(Vector3::ZERO, Vector3::new(-2., 2., 2.));
        assert_eq!(b.min().x, 1.);
        assert_eq!(b.max().x, -1.);
        assert_consistent(&b);
    }

    #[test]
    fn test_consistency_after_every_mutation() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let mut a = random_box(&mut rng);
            assert_consistent(&a);
            let b = random_box(&mut rng);
            a.merge(&b);
            assert_consistent(&a);
            a.expand_by_point(Vector3::new(rng.random_range(-20.0..20.0), 0., 3.));
            assert_consistent(&a);
            a.set_from_center_and_size(b.center(), b.size());
            assert_consistent(&a);
        }
    }

    #[test]
    fn test_expand_by_point_resyncs() {
        let mut b = BoundingBox::default();
        b.expand_by_point(Vector3::new(2., 2., 2.));
        assert_eq!(b.min(), Vector3::ZERO);
        assert_eq!(b.max(), Vector3::splat(2.));
        assert_eq!(b.center(), Vector3::splat(1.));
        assert_eq!(b.extents(), Vector3::splat(1.));
    }

    #[test]
    fn test_from_points_encloses_origin_seed() {
        let points = [
            Vector3::new(1., 2., 3.),
            Vector3::new(4., -1., 5.),
            Vector3::new(2., 6., 1.),
        ];
        let b = BoundingBox::from_points(&points);
        // Seeded at the origin, so zero stays inside
        assert_eq!(b.min(), Vector3::new(0., -1., 0.));
        assert_eq!(b.max(), Vector3::new(4., 6., 5.));
        assert_eq!(b.center(), Vector3::new(2., 2.5, 2.5));
        assert_consistent(&b);
    }

    #[test]
    fn test_from_points_matches_componentwise_minmax() {
        let mut rng = rand::rng();
        let points: Vec<Vector3> = (0..50)
            .map(|_| Vector3::new(
                rng.random_range(-9.0..9.0),
                rng.random_range(-9.0..9.0),
                rng.random_range(-9.0..9.0),
            ))
            .collect();
        let b = BoundingBox::from_points(&points);
        let lo = points.iter().fold(Vector3::ZERO, |acc, p| acc.min(*p));
        let hi = points.iter().fold(Vector3::ZERO, |acc, p| acc.max(*p));
        assert_eq!(b.min(), lo);
        assert_eq!(b.max(), hi);
    }

    #[test]
    fn test_from_points_exact() {
        let points = [Vector3::new(1., 1., 1.), Vector3::new(3., 2., 5.)];
        let b = BoundingBox::from_points_exact(&points).unwrap();
        assert_eq!(b.min(), Vector3::new(1., 1., 1.));
        assert_eq!(b.max(), Vector3::new(3., 2., 5.));
        assert_eq!(b.center(), Vector3::new(2., 1.5, 3.));
        assert!(BoundingBox::from_points_exact(&[]).is_none());
    }

    #[test]
    fn test_merge_uses_merged_min_for_center() {
        let mut a = BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(1.));
        let b = BoundingBox::from_min_max(Vector3::splat(-1.), Vector3::ZERO);
        a.merge(&b);
        assert_eq!(a.min(), Vector3::splat(-1.));
        assert_eq!(a.max(), Vector3::splat(1.));
        assert_eq!(a.center(), Vector3::ZERO);

        // Other way around: this.min already below other.min
        let mut c = BoundingBox::from_min_max(Vector3::splat(-1.), Vector3::ZERO);
        c.merge(&BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(3.)));
        assert_eq!(c.center(), Vector3::splat(1.));
        assert_consistent(&c);
    }

    #[test]
    fn test_intersects_box_is_symmetric() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            assert_eq!(a.intersects_box(&b), b.intersects_box(&a));
        }
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(1.));
        let b = BoundingBox::from_min_max(Vector3::new(1., 0., 0.), Vector3::new(2., 1., 1.));
        assert!(a.intersects(&b));
        assert!(b.intersects_box(&a));

        let c = BoundingBox::from_min_max(Vector3::new(1.0001, 0., 0.), Vector3::new(2., 1., 1.));
        assert!(!a.intersects_box(&c));
    }

    #[test]
    fn test_zero_size_box_intersects_when_inside() {
        let point_box = BoundingBox::new(Vector3::splat(0.5), Vector3::ZERO);
        let a = BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(1.));
        assert!(a.intersects_box(&point_box));
        assert!(point_box.intersects_box(&point_box));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let b = BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(2.));
        assert!(b.contains_point(Vector3::ZERO));
        assert!(b.contains_point(Vector3::splat(2.)));
        assert!(b.contains_point(Vector3::splat(1.)));
        assert!(!b.contains_point(Vector3::new(2.0001, 1., 1.)));
    }

    #[test]
    fn test_contains_box() {
        let outer = BoundingBox::from_min_max(Vector3::ZERO, Vector3::splat(4.));
        let inner = BoundingBox::from_min_max(Vector3::splat(1.), Vector3::splat(4.));
        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
    }

    #[test]
    fn test_equals_is_exact() {
        let a = BoundingBox::new(Vector3::ZERO, 1.0);
        let b = BoundingBox::new(Vector3::new(1e-12, 0., 0.), 1.0);
        assert!(a.equals(&a));
        assert!(!a.equals(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = BoundingBox::new(Vector3::new(1., 1., 1.), 2.0);
        let mut copy = original.clone();
        assert!(copy.equals(&original));
        copy.set_from_center_and_size(Vector3::new(5., 5., 5.), 2.0);
        assert_eq!(original.center(), Vector3::new(1., 1., 1.));

        let mut boxed = original.clone_bound();
        boxed.merge(&BoundingBox::new(Vector3::splat(10.), 1.0));
        assert_eq!(original.max(), Vector3::splat(2.));
        assert_eq!(Bound::max(boxed.as_ref()), Vector3::splat(10.5));
    }

    #[test]
    fn test_ray_hits_box_in_front() {
        let ray = Ray::new(Vector3::new(-5., 0., 0.), Vector3::new(1., 0., 0.));
        assert!(BoundingBox::intersect_ray(&ray, &unit_box()));
        let t = BoundingBox::ray_interval(&ray, &unit_box()).unwrap();
        assert_eq!(t, Interval::new(4., 6.));
    }

    #[test]
    fn test_ray_misses_box_behind() {
        let ray = Ray::new(Vector3::new(-5., 0., 0.), Vector3::new(-1., 0., 0.));
        assert!(!BoundingBox::intersect_ray(&ray, &unit_box()));
    }

    #[test]
    fn test_ray_from_inside_starts_at_zero() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0., 0., -2.));
        let t = BoundingBox::ray_interval(&ray, &unit_box()).unwrap();
        assert_eq!(t.min, 0.);
        assert_eq!(t.max, 0.5);
    }

    #[test]
    fn test_ray_parallel_to_slab() {
        // Zero y, z direction; origin inside those slabs
        let inside = Ray::new(Vector3::new(-5., 0.5, 0.5), Vector3::new(1., 0., 0.));
        assert!(BoundingBox::intersect_ray(&inside, &unit_box()));

        // Origin outside the y slab can never enter it
        let outside = Ray::new(Vector3::new(-5., 3., 0.), Vector3::new(1., 0., 0.));
        assert!(!BoundingBox::intersect_ray(&outside, &unit_box()));

        // Lying exactly in the y = 1 face plane, 0 * inf = NaN is absorbed
        let on_face = Ray::new(Vector3::new(-5., 1., 0.), Vector3::new(1., 0., 0.));
        assert!(BoundingBox::intersect_ray(&on_face, &unit_box()));
        let on_face_neg = Ray::new(Vector3::new(-5., 1., 0.), Vector3::new(1., -0., 0.));
        assert!(BoundingBox::intersect_ray(&on_face_neg, &unit_box()));
    }

    #[test]
    fn test_ray_diagonal_negative_direction() {
        let ray = Ray::new(Vector3::splat(5.), Vector3::splat(-1.));
        assert!(BoundingBox::intersect_ray(&ray, &unit_box()));
        let away = Ray::new(Vector3::splat(5.), Vector3::new(-1., 1., -1.));
        assert!(!BoundingBox::intersect_ray(&away, &unit_box()));
    }

    #[test]
    fn test_intersects_ray_is_not_implemented() {
        let ray = Ray::new(Vector3::new(-5., 0., 0.), Vector3::new(1., 0., 0.));
        let bound: &dyn Bound = &unit_box();
        assert_eq!(bound.intersects_ray(&ray), Err(BoundError::NotImplemented("intersects_ray")));
    }

    #[test]
    fn test_bound_vertex_layout() {
        let b = BoundingBox::from_min_max(Vector3::new(-1., -2., -3.), Vector3::new(1., 2., 3.));
        let verts = b.get_bound_vertex();
        assert_eq!(verts.len(), 36 * 4);
        for v in verts.chunks_exact(4) {
            assert!(v[0] == -1. || v[0] == 1.);
            assert!(v[1] == -2. || v[1] == 2.);
            assert!(v[2] == -3. || v[2] == 3.);
            assert_eq!(v[3], 1.0);
        }
    }

    #[test]
    fn test_bound_vertex_triangles_face_outward() {
        let b = unit_box();
        let verts = b.get_bound_vertex();
        for tri in verts.chunks_exact(12) {
            let p = |i: usize| Vector3::new(tri[i * 4], tri[i * 4 + 1], tri[i * 4 + 2]);
            let (a, bb, c) = (p(0), p(1), p(2));
            let normal = (bb - a).cross(c - a);
            let centroid = (a + bb + c) / 3.;
            assert!(normal.dot(centroid - b.center()) > 0.);
        }
    }

    #[test]
    fn test_bound_vertex_follows_mutation() {
        let mut b = unit_box();
        b.expand_by_point(Vector3::new(7., 0., 0.));
        let verts = b.get_bound_vertex();
        assert!(verts.chunks_exact(4).any(|v| v[0] == 7.));
    }

    struct Transformed {
        mat: Matrix4,
        local: Option<BoundingBox>,
    }

    impl SceneObject for Transformed {
        fn world_matrix(&self) -> Matrix4 {
            self.mat
        }

        fn local_bounds(&self) -> Option<BoundingBox> {
            self.local
        }
    }

    #[test]
    fn test_calculate_transform_rotated_cube() {
        let object = Transformed {
            mat: Matrix4::from_rotation_y(std::f64::consts::FRAC_PI_4),
            local: Some(unit_box()),
        };
        let mut b = BoundingBox::default();
        b.calculate_transform(&object);

        let r = std::f64::consts::SQRT_2;
        assert!(approx_eq_vec3(&b.extents(), &Vector3::new(r, 1., r)));
        assert!(approx_eq_vec3(&b.center(), &Vector3::ZERO));
        assert!(approx_eq_vec3(&b.min(), &Vector3::new(-r, -1., -r)));
        assert_consistent(&b);
    }

    #[test]
    fn test_calculate_transform_scale_then_translate() {
        let object = Transformed {
            mat: Matrix4::from_translation(Vector3::new(5., 0., 0.)) * Matrix4::from_scale(Vector3::splat(2.)),
            local: Some(unit_box()),
        };
        let mut b = BoundingBox::default();
        b.calculate_transform(&object);
        assert!(approx_eq_vec3(&b.min(), &Vector3::new(3., -2., -2.)));
        assert!(approx_eq_vec3(&b.max(), &Vector3::new(7., 2., 2.)));
        assert_consistent(&b);
    }

    #[test]
    fn test_calculate_transform_without_geometry_is_noop() {
        let object = Transformed { mat: Matrix4::from_scale(Vector3::splat(3.)), local: None };
        let mut b = unit_box();
        b.calculate_transform(&object);
        assert_eq!(b, unit_box());
    }
}
