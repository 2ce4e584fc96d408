/*

    Declare numeric types used throughout this crate.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change all of these
    aliases together (Float, Vector3, Vector4, Matrix4).

    @date: 2 Oct, 2025
*/

use bevy_math::{DMat4, DVec3, DVec4};
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3 and Matrix4 types
pub type Vector3 = DVec3;
pub type Vector4 = DVec4;
pub type Matrix4 = DMat4;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

pub fn approx_eq_vec3(a: &Vector3, b: &Vector3) -> bool {
    approx_zero(a.x - b.x) && approx_zero(a.y - b.y) && approx_zero(a.z - b.z)
}

pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}

/// Largest axis scale of the upper 3x3, used to grow radii under transforms.
pub fn max_axis_scale(mat: &Matrix4) -> Float {
    let sx = mat.x_axis.truncate().length();
    let sy = mat.y_axis.truncate().length();
    let sz = mat.z_axis.truncate().length();
    sx.max(sy).max(sz)
}
