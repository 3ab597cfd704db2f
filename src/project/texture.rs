//! Project textures and how they are referenced from model JSON.

use serde::{Deserialize, Serialize};

/// Where a texture's pixels live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextureSource {
    /// Saved image inside a resource pack, referenced by location.
    #[default]
    File,
    /// Unsaved image, referenced by its inline data.
    Inline { data: String },
}

/// A texture known to the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Stable identity, referenced by faces.
    pub id: String,
    /// File name, usually with a `.png` extension.
    pub name: String,
    /// Folder below `textures/`, e.g. `block`.
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub namespace: String,
    /// Whether this texture is the model's particle texture.
    #[serde(default)]
    pub particle: bool,
    #[serde(default)]
    pub source: TextureSource,
}

impl Texture {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folder: String::new(),
            namespace: String::new(),
            particle: false,
            source: TextureSource::File,
        }
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn as_particle(mut self) -> Self {
        self.particle = true;
        self
    }

    pub fn inline(mut self, data: impl Into<String>) -> Self {
        self.source = TextureSource::Inline { data: data.into() };
        self
    }

    /// Short name used as the texture variable, e.g. `stone` for `block/stone.png`.
    pub fn short_name(&self) -> &str {
        file_stem(&self.name)
    }

    /// Reference written into the model's texture table.
    ///
    /// `mymod:block/stone` for a saved texture, the inline data otherwise.
    /// The `minecraft` namespace is implied and never written.
    pub fn java_texture_link(&self) -> String {
        if let TextureSource::Inline { data } = &self.source {
            return data.clone();
        }

        let name = self.name.strip_suffix(".png").unwrap_or(&self.name);
        let mut link = if self.folder.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.folder, name)
        };
        if !self.namespace.is_empty() && self.namespace != "minecraft" {
            link = format!("{}:{}", self.namespace, link);
        }
        link
    }
}

/// File name without directories or extension.
fn file_stem(path: &str) -> &str {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    }
}
