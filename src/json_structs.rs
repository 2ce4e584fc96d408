/*

    Declare data structs needed to parse JSON.

    - SingleOrVec: a field holding either one object or an array
    - Transformations: named translation / scaling / rotation
      entries referenced from objects by tokens like "t1 s2"

    @date: 13 Oct, 2025
*/

use crate::prelude::*;


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T> SingleOrVec<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            SingleOrVec::Empty => &[],
            SingleOrVec::Single(t) => std::slice::from_ref(t),
            SingleOrVec::Multiple(vec) => vec.as_slice(),
        }
    }

    pub fn all_mut(&mut self) -> Vec<&mut T> {
        match self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t],
            SingleOrVec::Multiple(vec) => vec.iter_mut().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translation,
    Scaling,
    Rotation,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Transformation {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,
    #[serde(rename = "_data", deserialize_with = "deser_float_vec")]
    pub data: Vec<Float>,
}

impl Transformation {
    /// Translation and Scaling expect "x y z", Rotation expects "angle_deg ax ay az".
    pub fn get_mat4(&self, kind: TransformKind) -> Option<Matrix4> {
        let d = &self.data;
        match kind {
            TransformKind::Translation if d.len() == 3 => {
                Some(Matrix4::from_translation(Vector3::new(d[0], d[1], d[2])))
            }
            TransformKind::Scaling if d.len() == 3 => {
                Some(Matrix4::from_scale(Vector3::new(d[0], d[1], d[2])))
            }
            TransformKind::Rotation if d.len() == 4 => {
                let axis = Vector3::new(d[1], d[2], d[3]);
                if approx_zero(axis.length_squared()) {
                    warn!("Rotation {} has zero axis", self._id);
                    return None;
                }
                Some(Matrix4::from_axis_angle(axis.normalize(), d[0].to_radians()))
            }
            _ => {
                warn!("Transformation {} of kind {:?} has {} components", self._id, kind, d.len());
                None
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Transformations {
    #[serde(rename = "Translation")]
    pub translation: SingleOrVec<Transformation>,
    #[serde(rename = "Scaling")]
    pub scaling: SingleOrVec<Transformation>,
    #[serde(rename = "Rotation")]
    pub rotation: SingleOrVec<Transformation>,
}

impl Transformations {
    pub fn find(&self, kind: TransformKind, id: usize) -> Option<Matrix4> {
        let list = match kind {
            TransformKind::Translation => &self.translation,
            TransformKind::Scaling => &self.scaling,
            TransformKind::Rotation => &self.rotation,
        };
        list.as_slice()
            .iter()
            .find(|t| t._id == id)
            .and_then(|t| t.get_mat4(kind))
    }
}
