//! Cube to model element encoding.

use super::textures::{TextureUsage, MISSING_TEXTURE};
use crate::project::{Cube, Face, FaceTexture, Project, DEFAULT_CUBE_NAME};
use crate::settings::ExportSettings;
use crate::types::{
    is_zero, rotated_axis_count, BoundingBox, Direction, ElementRotation, UvBox, Vec3,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// A face of a compiled element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledFace {
    /// UV in 0-16 space. Absent for disabled faces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<UvBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    /// Texture variable, e.g. `#stone`.
    pub texture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cullface: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tintindex: Option<i32>,
}

/// A cuboid as written to the model's element list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub from: Vec3,
    pub to: Vec3,
    /// Only ever `Some(false)`; shading is on by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<ElementRotation>,
    /// Raw rotation of a cube rotated on more than one axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotated: Option<Vec3>,
    /// Marker color of an untextured cube.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub faces: BTreeMap<Direction, CompiledFace>,
}

/// Encodes cubes against one project and settings snapshot.
pub struct ElementEncoder<'a> {
    project: &'a Project,
    settings: &'a ExportSettings,
}

impl<'a> ElementEncoder<'a> {
    pub fn new(project: &'a Project, settings: &'a ExportSettings) -> Self {
        Self { project, settings }
    }

    /// Encode a cube, recording referenced textures in `usage`.
    ///
    /// Returns `None` when the cube has no faces left to write.
    pub fn encode(&self, cube: &Cube, usage: &mut TextureUsage) -> Option<CompiledElement> {
        let bounds = BoundingBox::new(cube.from, cube.to).inflated(cube.inflate);

        let name = (self.settings.writes_cube_names() && cube.name != DEFAULT_CUBE_NAME)
            .then(|| cube.name.clone());

        let mut faces = BTreeMap::new();
        let mut has_texture = false;
        for dir in Direction::ALL {
            let Some(face) = cube.face(dir) else {
                continue;
            };
            if face.texture.is_none() {
                continue;
            }
            if matches!(face.texture, FaceTexture::Id(_)) {
                has_texture = true;
            }
            faces.insert(dir, self.encode_face(dir, face, usage));
        }

        if faces.is_empty() {
            log::trace!("Dropping cube {} without faces", cube.name);
            return None;
        }

        Some(CompiledElement {
            name,
            from: bounds.from,
            to: bounds.to,
            shade: (!cube.shade).then_some(false),
            rotation: element_rotation(cube),
            rotated: (rotated_axis_count(&cube.rotation) >= 2).then_some(cube.rotation),
            color: (!has_texture).then_some(cube.color),
            faces,
        })
    }

    fn encode_face(&self, dir: Direction, face: &Face, usage: &mut TextureUsage) -> CompiledFace {
        let texture = match &face.texture {
            FaceTexture::Id(id) => match self.project.texture(id) {
                Some(texture) => {
                    usage.insert(texture.id.clone());
                    format!("#{}", texture.short_name())
                }
                None => {
                    log::warn!("{} face references unknown texture {}", dir, id);
                    MISSING_TEXTURE.to_string()
                }
            },
            _ => MISSING_TEXTURE.to_string(),
        };

        CompiledFace {
            uv: face.enabled.then(|| {
                scale_uv(
                    face.uv,
                    self.project.meta.texture_width,
                    self.project.meta.texture_height,
                )
            }),
            rotation: (face.rotation != 0).then_some(face.rotation),
            texture,
            cullface: face.cullface,
            tintindex: (face.tint >= 0).then_some(face.tint),
        }
    }
}

/// Rotation descriptor for a cube, with `rescale` folded in.
fn element_rotation(cube: &Cube) -> Option<ElementRotation> {
    let mut rotation = (!is_zero(&cube.rotation) || !is_zero(&cube.origin))
        .then(|| ElementRotation::from_euler(cube.rotation, cube.origin, cube.rotation_axis));

    if cube.rescale {
        match rotation.as_mut() {
            Some(rotation) => rotation.rescale = true,
            None => {
                rotation = Some(ElementRotation {
                    angle: 0.0,
                    axis: cube.rotation_axis,
                    origin: cube.origin,
                    rescale: true,
                })
            }
        }
    }

    rotation
}

/// Map a UV box from project texture pixels into 0-16 model space.
///
/// U components scale by the texture width, V components by the height.
pub fn scale_uv(uv: UvBox, width: u32, height: u32) -> UvBox {
    let resolution = [width.max(1) as f64, height.max(1) as f64];
    let mut scaled = uv;
    for (i, value) in scaled.iter_mut().enumerate() {
        *value = *value * 16.0 / resolution[i % 2];
    }
    scaled
}
