/*

    Declare Scene consisting of a camera, named transformations,
    and objects with object-space bounds, plus the culling pass
    that runs the objects' world bounds against the camera frustum.

    Expected JSON layout:

    {
        "Scene": {
            "Camera": { ... },
            "Transformations": { "Translation": ..., "Scaling": ..., "Rotation": ... },
            "Objects": { "Object": [ { "_id": "1", "Min": "x y z", "Max": "x y z", "Transformations": "t1 s1" } ] }
        }
    }

    An object without Min/Max is kept in the scene but has no geometry.

    @date: 2 Oct, 2025
*/

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::prelude::*;

use crate::bbox::BoundingBox;
use crate::bound::{Bound, SceneObject};
use crate::camera::Camera;
use crate::json_structs::{SingleOrVec, Transformations};


#[derive(Debug, Deserialize)]
pub struct RootScene {
    #[serde(rename = "Scene")]
    pub scene: Scene,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Scene {
    #[serde(rename = "Camera")]
    pub camera: Camera,

    #[serde(rename = "Transformations")]
    pub transformations: Transformations,

    #[serde(rename = "Objects")]
    pub objects: SceneObjects,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SceneObjects {
    #[serde(rename = "Object")]
    pub object: SingleOrVec<SceneNode>,
}


#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
pub struct SceneNode {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,

    #[serde(rename = "Min", default, deserialize_with = "deser_opt_vec3")]
    pub min: Option<Vector3>,

    #[serde(rename = "Max", default, deserialize_with = "deser_opt_vec3")]
    pub max: Option<Vector3>,

    #[serde(rename = "Transformations", default)]
    pub transformations: Option<String>,

    #[serde(skip)]
    #[default(Matrix4::IDENTITY)]
    pub world: Matrix4,
}

impl SceneNode {
    pub fn setup(&mut self, transforms: &Transformations) {
        self.world = match self.transformations.as_deref() {
            Some(expr) => parse_transform_expression(expr, transforms),
            None => Matrix4::IDENTITY,
        };
        if self.min.is_some() != self.max.is_some() {
            warn!("Object {} has only one of Min/Max, treating it as empty", self._id);
        }
    }
}

impl SceneObject for SceneNode {
    fn world_matrix(&self) -> Matrix4 {
        self.world
    }

    fn local_bounds(&self) -> Option<BoundingBox> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(BoundingBox::from_min_max(min, max)),
            _ => None,
        }
    }
}


#[derive(Debug, Default)]
pub struct CullReport {
    pub visible: Vec<usize>,
    pub culled: Vec<usize>,
    pub visible_bounds: Vec<BoundingBox>,
    /// Merge of the world bounds of every object with geometry, visible or not.
    pub scene_bounds: Option<BoundingBox>,
}

impl CullReport {
    /// Debug wireframe of every visible object, see BoundingBox::get_bound_vertex.
    pub fn wireframe(&self) -> Vec<Float> {
        self.visible_bounds
            .iter()
            .flat_map(|b| b.get_bound_vertex())
            .collect()
    }

    /// Write the wireframe to `path` as a flat JSON array, returns the vertex count.
    pub fn write_wireframe<P: AsRef<Path>>(&self, path: P) -> Result<usize, SceneError> {
        let verts = self.wireframe();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &verts)?;
        writer.flush()?;
        Ok(verts.len() / 4)
    }
}


impl Scene {

    /// Resolve transformation expressions into world matrices.
    pub fn setup(&mut self) {
        let transforms = &self.transformations;
        for node in self.objects.object.all_mut() {
            node.setup(transforms);
        }
        info!("Scene is setup with {} objects.", self.objects.object.len());
    }

    pub fn nodes(&self) -> &[SceneNode] {
        self.objects.object.as_slice()
    }

    pub fn cull(&self) -> CullReport {
        let frustum = self.camera.frustum();
        let mut report = CullReport::default();

        for node in self.nodes() {
            if node.local_bounds().is_none() {
                debug!("Object {} has no geometry, culled", node._id);
                report.culled.push(node._id);
                continue;
            }

            let mut world = BoundingBox::default();
            world.calculate_transform(node);

            match report.scene_bounds.as_mut() {
                Some(total) => total.merge(&world),
                None => report.scene_bounds = Some(world),
            }

            if frustum.contains_aabb(&world) {
                report.visible.push(node._id);
                report.visible_bounds.push(world);
            } else {
                debug!("Object {} is outside the frustum, world bounds {:?} .. {:?}", node._id, world.min(), world.max());
                report.culled.push(node._id);
            }
        }

        report
    }
}
