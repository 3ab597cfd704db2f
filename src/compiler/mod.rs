//! Model compilation.
//!
//! Compiling runs in four stages: the outliner is walked depth first, each
//! cube is encoded into an element while texture references are collected,
//! the texture table is resolved, and finally the document is assembled from
//! project metadata under the per-field inclusion rules.

pub mod document;
pub mod element;
pub mod groups;
pub mod json_text;
pub mod textures;
pub mod walker;

pub use document::{is_reserved_parent, Document};
pub use element::{CompiledElement, CompiledFace, ElementEncoder};
pub use groups::{GroupEntry, HierarchyNode};
pub use textures::{TextureTable, TextureUsage};
pub use walker::{IndexLut, WalkOutput};

use crate::error::{ExportError, Result};
use crate::project::Project;
use crate::settings::{CompileOptions, ExportSettings};
use std::path::{Path, PathBuf};

/// Format identifier registered with the editor.
pub const FORMAT_ID: &str = "framework_open_model";

/// Value of the `loader` field; models only load with this loader installed.
pub const LOADER: &str = "framework:open_model";

/// File extension of exported models.
pub const EXTENSION: &str = "json";

/// Built-in item parents. Models using them cannot carry custom elements.
pub const RESERVED_PARENTS: [&str; 8] = [
    "item/generated",
    "minecraft:item/generated",
    "item/handheld",
    "minecraft:item/handheld",
    "item/handheld_rod",
    "minecraft:item/handheld_rod",
    "builtin/generated",
    "minecraft:builtin/generated",
];

/// Result of a compile call.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileOutput {
    /// Structured document, returned when `raw` is set.
    Document(Document),
    /// Serialized JSON text.
    Text(String),
}

impl CompileOutput {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            CompileOutput::Document(document) => Some(document),
            CompileOutput::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CompileOutput::Text(text) => Some(text),
            CompileOutput::Document(_) => None,
        }
    }
}

/// Observer run on every compiled document before it is serialized.
///
/// Hooks may add or change fields, e.g. tint metadata from other tools.
pub trait CompileHook: Send + Sync {
    fn on_compile(&self, document: &mut Document, options: &CompileOptions);
}

impl<F> CompileHook for F
where
    F: Fn(&mut Document, &CompileOptions) + Send + Sync,
{
    fn on_compile(&self, document: &mut Document, options: &CompileOptions) {
        self(document, options)
    }
}

/// User-facing messages raised while compiling.
pub trait Notifier: Send + Sync {
    /// A reserved item parent was combined with elements and has been dropped.
    fn invalid_builtin_parent(&self, parent: &str);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn invalid_builtin_parent(&self, parent: &str) {
        log::warn!(
            "Parent {} cannot be used with custom elements and was removed from the model",
            parent
        );
    }
}

/// Persistence for compiled model text.
pub trait ModelWriter {
    fn write_model(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

/// Writes models into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileWriter {
    directory: PathBuf,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl ModelWriter for FileWriter {
    fn write_model(&mut self, file_name: &str, contents: &str) -> Result<()> {
        if !self.directory.is_dir() {
            return Err(ExportError::Export(format!(
                "Not a directory: {}",
                self.directory.display()
            )));
        }
        let path = self.directory.join(file_name);
        std::fs::write(&path, contents)?;
        log::info!("Exported model to {}", path.display());
        Ok(())
    }
}

/// The open model codec.
pub struct Codec {
    hooks: Vec<Box<dyn CompileHook>>,
    notifier: Box<dyn Notifier>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

impl Codec {
    /// Create a codec that logs its warnings.
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            notifier: Box::new(LogNotifier),
        }
    }

    /// Create a codec that routes warnings to `notifier`.
    pub fn with_notifier(notifier: impl Notifier + 'static) -> Self {
        Self {
            hooks: Vec::new(),
            notifier: Box::new(notifier),
        }
    }

    /// Register a compile hook. Hooks run in registration order.
    pub fn on_compile(&mut self, hook: impl CompileHook + 'static) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Compile a project snapshot into a document or JSON text.
    pub fn compile(
        &self,
        project: &Project,
        settings: &ExportSettings,
        options: &CompileOptions,
    ) -> Result<CompileOutput> {
        let document = self.compile_document(project, settings, options);
        if options.raw {
            return Ok(CompileOutput::Document(document));
        }
        Ok(CompileOutput::Text(render(&document, settings)?))
    }

    /// Compile straight to a document, hooks included.
    pub fn compile_document(
        &self,
        project: &Project,
        settings: &ExportSettings,
        options: &CompileOptions,
    ) -> Document {
        let encoder = ElementEncoder::new(project, settings);
        let walk = walker::walk(&project.outliner, &encoder);

        let assembler = document::Assembler {
            project,
            settings,
            options,
        };
        let mut document = assembler.assemble(walk, self.notifier.as_ref());

        for hook in &self.hooks {
            hook.on_compile(&mut document, options);
        }

        log::debug!(
            "Compiled model with {} elements and {} textures",
            document.element_count(),
            document.textures.as_ref().map_or(0, |t| t.len())
        );
        document
    }

    /// Compile to JSON text regardless of `options.raw`.
    pub fn compile_text(
        &self,
        project: &Project,
        settings: &ExportSettings,
        options: &CompileOptions,
    ) -> Result<String> {
        let document = self.compile_document(project, settings, options);
        render(&document, settings)
    }

    /// Compile with default options and hand the text to `writer`.
    pub fn export(
        &self,
        project: &Project,
        settings: &ExportSettings,
        writer: &mut dyn ModelWriter,
    ) -> Result<()> {
        let text = self.compile_text(project, settings, &CompileOptions::default())?;
        writer.write_model(&model_file_name(project), &text)
    }
}

/// Serialize a document to canonical text.
pub fn render(document: &Document, settings: &ExportSettings) -> Result<String> {
    let value = document.to_value()?;
    Ok(json_text::to_text(&value, settings.minified_output))
}

/// File name a project exports to, e.g. `lamp.json`.
pub fn model_file_name(project: &Project) -> String {
    let name = project.meta.name.trim();
    let name = if name.is_empty() { "model" } else { name };
    format!("{}.{}", name, EXTENSION)
}
