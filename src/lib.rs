//! # Open Model Exporter
//!
//! Compiles cuboid models into JSON documents for Framework's Open Model
//! loader, an extension of the Minecraft Java block model format without the
//! 3x3x3 size limit or the 22.5 degree rotation steps.
//!
//! ## Overview
//!
//! The editor hands over a read-only [`Project`] snapshot (outliner tree,
//! textures and metadata) together with the global [`ExportSettings`]. The
//! [`Codec`] walks the outliner, encodes every exported cube into an element,
//! builds the texture table and assembles the final document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use open_model_exporter::{load_project, Codec, CompileOptions, ExportSettings};
//!
//! let project = load_project("path/to/project.json")?;
//! let codec = Codec::new();
//! let settings = ExportSettings::default();
//!
//! // JSON text, ready to write
//! let text = codec.compile_text(&project, &settings, &CompileOptions::default())?;
//!
//! // Structured document for further processing
//! let document = codec.compile_document(&project, &settings, &CompileOptions::raw());
//! ```
//!
//! ## Hooks
//!
//! Other tools can amend every compiled document before it is serialized:
//!
//! ```ignore
//! let mut codec = Codec::new();
//! codec.on_compile(|document: &mut Document, _options: &CompileOptions| {
//!     document.extra.insert("tint".into(), serde_json::json!(true));
//! });
//! ```

pub mod compiler;
pub mod error;
pub mod project;
pub mod settings;
pub mod types;

// Re-export main types for convenience
pub use compiler::{
    Codec, CompileHook, CompileOutput, Document, FileWriter, LogNotifier, ModelWriter, Notifier,
    EXTENSION, FORMAT_ID, LOADER,
};
pub use error::{ExportError, Result};
pub use project::{Cube, Face, FaceTexture, Group, Project, ProjectMetadata, SceneNode, Texture};
pub use settings::{CompileOptions, ExportSettings, Field};
pub use types::{Axis, Direction};

/// Load a project snapshot from a JSON file.
pub fn load_project<P: AsRef<std::path::Path>>(path: P) -> Result<Project> {
    project::loader::load_from_path(path)
}

/// Load a project snapshot from JSON bytes (for WASM compatibility).
pub fn load_project_from_bytes(data: &[u8]) -> Result<Project> {
    project::loader::load_from_bytes(data)
}

/// Compile a project with a default codec.
pub fn compile(
    project: &Project,
    settings: &ExportSettings,
    options: &CompileOptions,
) -> Result<CompileOutput> {
    Codec::new().compile(project, settings, options)
}

#[cfg(feature = "wasm")]
pub mod wasm;
