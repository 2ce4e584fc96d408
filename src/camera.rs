/*

    Declare Camera, the source of the culling frustum.

    @date: Oct, 2025
*/

use crate::prelude::*;
use crate::frustum::PlaneFrustum;


#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Camera {
    #[serde(rename = "_type")]
    #[default = ""]
    pub _type: String,

    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[serde(rename = "Gaze", deserialize_with = "deser_vec3")]
    #[default(Vector3::NEG_Z)]
    pub gaze_dir: Vector3,

    #[serde(rename = "GazePoint", deserialize_with = "deser_vec3")]
    pub gaze_point: Vector3, // To be used if _type = "lookAt"

    #[serde(rename = "Up", deserialize_with = "deser_vec3")]
    #[default(Vector3::Y)]
    pub up: Vector3,

    #[serde(rename = "FovY", deserialize_with = "deser_float")]
    #[default = 60.0]
    pub fovy: Float, // degrees

    #[serde(rename = "Aspect", deserialize_with = "deser_float")]
    #[default = 1.0]
    pub aspect: Float,

    #[serde(rename = "NearDistance", deserialize_with = "deser_float")]
    #[default = 0.1]
    pub near_distance: Float,

    #[serde(rename = "FarDistance", deserialize_with = "deser_float")]
    #[default = 1000.0]
    pub far_distance: Float,
}

impl Camera {

    pub fn gaze(&self) -> Vector3 {
        if self._type == "lookAt" {
            self.gaze_point - self.position
        } else {
            self.gaze_dir
        }
    }

    pub fn view_projection(&self) -> Matrix4 {
        let gaze = self.gaze();
        if approx_zero(gaze.length_squared()) {
            warn!("Camera gaze is zero, looking down -z instead");
        }
        let dir = gaze.try_normalize().unwrap_or(Vector3::NEG_Z);

        // look_to_rh normalizes dir x up, which is NaN when they are parallel
        let up = if approx_zero(dir.cross(self.up).length_squared()) {
            warn!("Camera up {:?} is parallel to gaze {:?}, picking an orthogonal up", self.up, dir);
            dir.any_orthonormal_vector()
        } else {
            self.up
        };

        let proj = Matrix4::perspective_rh(self.fovy.to_radians(), self.aspect, self.near_distance, self.far_distance);
        let view = Matrix4::look_to_rh(self.position, dir, up);
        proj * view
    }

    pub fn frustum(&self) -> PlaneFrustum {
        PlaneFrustum::from_matrix(&self.view_projection())
    }
}
