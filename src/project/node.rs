//! Outliner nodes: groups and cuboid elements.

use crate::types::{Axis, Direction, UvBox, Vec3};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Name given to freshly created cubes; never written out as an element name.
pub const DEFAULT_CUBE_NAME: &str = "cube";

/// A node of the outliner tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    Group(Group),
    Cube(Cube),
    /// Any node this exporter does not know about (locators, meshes, nodes
    /// without a type).
    Unknown,
}

/// Snapshot form of a node, selected by its `type` key.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedNode {
    Group(Group),
    Cube(Cube),
    #[serde(other)]
    Unknown,
}

impl<'de> Deserialize<'de> for SceneNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.get("type").and_then(Value::as_str).is_none() {
            log::debug!("Skipping outliner node without a type");
            return Ok(SceneNode::Unknown);
        }
        let node = TaggedNode::deserialize(value).map_err(D::Error::custom)?;
        Ok(match node {
            TaggedNode::Group(group) => SceneNode::Group(group),
            TaggedNode::Cube(cube) => SceneNode::Cube(cube),
            TaggedNode::Unknown => SceneNode::Unknown,
        })
    }
}

/// A named folder in the outliner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default = "default_group_name")]
    pub name: String,
    /// Pivot point.
    #[serde(default)]
    pub origin: Vec3,
    /// Outliner marker color.
    #[serde(default)]
    pub color: u32,
    #[serde(default = "default_true")]
    pub shade: bool,
    /// Groups with this unset are left out of the hierarchy summary.
    #[serde(default = "default_true")]
    pub export: bool,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

fn default_group_name() -> String {
    "group".to_string()
}

fn default_true() -> bool {
    true
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: [0.0; 3],
            color: 0,
            shade: true,
            export: true,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A cuboid element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    #[serde(default = "default_cube_name")]
    pub name: String,
    pub from: Vec3,
    pub to: Vec3,
    /// Grows the box on every side without touching `from`/`to`.
    #[serde(default)]
    pub inflate: f64,
    /// Euler rotation in degrees. The editor keeps at most one axis non-zero.
    #[serde(default)]
    pub rotation: Vec3,
    /// Axis remembered for an unrotated cube.
    #[serde(default)]
    pub rotation_axis: Axis,
    #[serde(default)]
    pub origin: Vec3,
    #[serde(default)]
    pub rescale: bool,
    #[serde(default = "default_true")]
    pub shade: bool,
    /// Marker color written when the cube carries no texture.
    #[serde(default)]
    pub color: u32,
    #[serde(default = "default_true")]
    pub export: bool,
    #[serde(default)]
    pub faces: HashMap<Direction, Face>,
}

fn default_cube_name() -> String {
    DEFAULT_CUBE_NAME.to_string()
}

impl Cube {
    /// Create an untextured cube with all six faces present.
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self {
            name: default_cube_name(),
            from,
            to,
            inflate: 0.0,
            rotation: [0.0; 3],
            rotation_axis: Axis::Y,
            origin: [0.0; 3],
            rescale: false,
            shade: true,
            color: 0,
            export: true,
            faces: Direction::ALL
                .into_iter()
                .map(|dir| (dir, Face::blank()))
                .collect(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_face(mut self, dir: Direction, face: Face) -> Self {
        self.faces.insert(dir, face);
        self
    }

    /// Apply the same texture to every present face.
    pub fn with_texture(mut self, texture_id: &str) -> Self {
        for face in self.faces.values_mut() {
            face.texture = FaceTexture::Id(texture_id.to_string());
        }
        self
    }

    pub fn face(&self, dir: Direction) -> Option<&Face> {
        self.faces.get(&dir)
    }
}

/// What a face points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FaceTexture {
    /// No face at all; the face is not written.
    #[default]
    None,
    /// Face exists but has no texture assigned.
    Blank,
    /// Face points at a project texture by id. The id may be stale.
    Id(String),
}

impl FaceTexture {
    pub fn is_none(&self) -> bool {
        matches!(self, FaceTexture::None)
    }
}

/// Snapshot encoding: `null` for no face, `false` for blank, id string otherwise.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFaceTexture {
    Flag(bool),
    Id(String),
}

impl Serialize for FaceTexture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = match self {
            FaceTexture::None => None,
            FaceTexture::Blank => Some(RawFaceTexture::Flag(false)),
            FaceTexture::Id(id) => Some(RawFaceTexture::Id(id.clone())),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FaceTexture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawFaceTexture>::deserialize(deserializer)? {
            None => FaceTexture::None,
            Some(RawFaceTexture::Flag(_)) => FaceTexture::Blank,
            Some(RawFaceTexture::Id(id)) => FaceTexture::Id(id),
        })
    }
}

/// One side of a cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default)]
    pub texture: FaceTexture,
    /// Disabled faces keep their texture but lose their UV.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// UV box in project texture pixels.
    #[serde(default)]
    pub uv: UvBox,
    /// UV rotation in degrees (0, 90, 180, 270).
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub cullface: Option<Direction>,
    /// Tint index (-1 = no tint).
    #[serde(default = "default_tint")]
    pub tint: i32,
}

fn default_tint() -> i32 {
    -1
}

impl Face {
    /// A present face with no texture assigned.
    pub fn blank() -> Self {
        Self {
            texture: FaceTexture::Blank,
            enabled: true,
            uv: [0.0, 0.0, 16.0, 16.0],
            rotation: 0,
            cullface: None,
            tint: -1,
        }
    }

    /// A face pointing at a project texture.
    pub fn textured(texture_id: &str, uv: UvBox) -> Self {
        Self {
            texture: FaceTexture::Id(texture_id.to_string()),
            uv,
            ..Self::blank()
        }
    }

    /// A face that is not part of the geometry.
    pub fn removed() -> Self {
        Self {
            texture: FaceTexture::None,
            ..Self::blank()
        }
    }
}
