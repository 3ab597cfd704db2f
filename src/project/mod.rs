//! Project snapshots: the model tree, textures and metadata handed to the compiler.
//!
//! The editor owns the live project. The compiler only ever sees a read-only
//! snapshot of it, which can also be loaded from JSON for offline use.

pub mod display;
pub mod loader;
pub mod node;
pub mod texture;

pub use display::{DisplayExport, DisplaySettings, DisplaySlot};
pub use node::{Cube, Face, FaceTexture, Group, SceneNode, DEFAULT_CUBE_NAME};
pub use texture::{Texture, TextureSource};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name, used as the default export file name.
    #[serde(default)]
    pub name: String,
    /// Parent model, e.g. `block/cube_all`. Empty for none.
    #[serde(default)]
    pub parent: String,
    #[serde(default = "default_texture_size")]
    pub texture_width: u32,
    #[serde(default = "default_texture_size")]
    pub texture_height: u32,
    #[serde(default = "default_true", rename = "ambientocclusion")]
    pub ambient_occlusion: bool,
    #[serde(default)]
    pub front_gui_light: bool,
    /// Item overrides, passed through untouched.
    #[serde(default)]
    pub overrides: serde_json::Value,
    #[serde(default)]
    pub display_settings: HashMap<DisplaySlot, DisplaySettings>,
}

fn default_texture_size() -> u32 {
    16
}

fn default_true() -> bool {
    true
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent: String::new(),
            texture_width: default_texture_size(),
            texture_height: default_texture_size(),
            ambient_occlusion: true,
            front_gui_light: false,
            overrides: serde_json::Value::Null,
            display_settings: HashMap::new(),
        }
    }
}

/// A complete project snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub meta: ProjectMetadata,
    /// Every texture known to the project, in project order.
    #[serde(default)]
    pub textures: Vec<Texture>,
    /// Root nodes of the outliner.
    #[serde(default)]
    pub outliner: Vec<SceneNode>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.meta.parent = parent.into();
        self
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.textures.push(texture);
        self
    }

    pub fn with_node(mut self, node: SceneNode) -> Self {
        self.outliner.push(node);
        self
    }

    /// Look up a texture by id.
    pub fn texture(&self, id: &str) -> Option<&Texture> {
        self.textures.iter().find(|t| t.id == id)
    }

    /// Iterate over every cube in outliner order, depth first.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        let mut stack: Vec<&SceneNode> = self.outliner.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    SceneNode::Cube(cube) => return Some(cube),
                    SceneNode::Group(group) => stack.extend(group.children.iter().rev()),
                    SceneNode::Unknown => {}
                }
            }
            None
        })
    }

    /// Total number of cubes in the outliner.
    pub fn cube_count(&self) -> usize {
        self.cubes().count()
    }

    /// Total number of groups in the outliner.
    pub fn group_count(&self) -> usize {
        fn count(nodes: &[SceneNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    SceneNode::Group(group) => 1 + count(&group.children),
                    _ => 0,
                })
                .sum()
        }
        count(&self.outliner)
    }
}
