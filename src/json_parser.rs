/*

    Provide utilities to parse scene JSON files for culling.

    This format currently assumes:
        - Numbers may be given either as is or in quotes (e.g. "6")
        - Vector3 data fields are in format "<a> <a> <a>" or [a, a, a]
          where <a> is integer or float

    e.g. In JSON file both
    "FovY": "60" and "FovY": 60
    works as FovY: Float in source code

    @date: 2 Oct, 2025
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};
use thiserror::Error;

use crate::prelude::*;
use crate::scene::{RootScene};
use crate::json_structs::{Transformations, TransformKind};


#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_scene_json(path: impl AsRef<Path>) -> Result<RootScene, SceneError> {
    let path = path.as_ref();
    let span = tracing::span!(tracing::Level::INFO, "load_scene");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path.display());

    // Parse JSON into Scene
    let root: RootScene = serde_json::from_reader(reader)?;
    Ok(root)
}


pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        serde_json::Value::String(s) => s.trim().parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {t}"))),
    }
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        serde_json::Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

pub(crate) fn deser_opt_vec3<'de, D>(deserializer: D) -> Result<Option<Vector3>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Helper(#[serde(deserialize_with = "deser_vec3")] Vector3);

    let opt = Option::<Helper>::deserialize(deserializer)?;
    Ok(opt.map(|Helper(v)| v))
}

pub(crate) fn deser_float_vec<'de, D>(deserializer: D) -> Result<Vec<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    // Deserialize string of numbers separated by whitespace
    // into a vector of numbers, e.g. "45 0 1 0"
    let s: String = Deserialize::deserialize(deserializer)?;
    let numbers = s
        .split_whitespace()
        .map(|x| x.parse::<Float>().map_err(de::Error::custom))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(numbers)
}

fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<Float>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<Float>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<Float>().map_err(|e| e.to_string())?;
    Ok(Vector3::new(x, y, z))
}


/// Compose tokens like "t1 s2 r1" into one matrix. Tokens are applied
/// in reading order, so "t1 s2" translates first and scales afterwards.
/// Unknown or missing ids are skipped with a warning.
pub fn parse_transform_expression(
    expr: &str,
    global_transforms: &Transformations
) -> Matrix4 {

    let mut out = Matrix4::IDENTITY;

    for token in expr.split_whitespace() {
        if token.len() < 2 {
            warn!("Found token.len() < 2, skipping...");
            continue;
        }

        let (kind, id_str) = token.split_at(1);
        let id: usize = match id_str.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("Invalid transformation id in '{}'", token);
                continue;
            }
        };
        let found = match kind {
            "t" | "T" => global_transforms.find(TransformKind::Translation, id),
            "s" | "S" => global_transforms.find(TransformKind::Scaling, id),
            "r" | "R" => global_transforms.find(TransformKind::Rotation, id),
            _ => {
                warn!("Unknown transform token '{}'", kind);
                continue;
            }
        };
        match found {
            Some(mat) => out = mat * out,
            None => warn!("Transformation '{}' not found, skipping...", token),
        }
    }

    out
}
