//! WASM bindings for open-model-exporter.
//!
//! This module provides JavaScript-friendly APIs so editor plugins can call
//! the compiler directly.

use crate::settings::{CompileOptions, ExportSettings};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// A loaded project snapshot.
#[wasm_bindgen]
pub struct ProjectHandle {
    inner: crate::Project,
}

#[wasm_bindgen]
impl ProjectHandle {
    /// Load a project snapshot from JSON bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8]) -> Result<ProjectHandle, JsError> {
        let project = crate::load_project_from_bytes(data)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ProjectHandle { inner: project })
    }

    /// Get the number of cubes in the outliner.
    #[wasm_bindgen(getter)]
    pub fn cube_count(&self) -> usize {
        self.inner.cube_count()
    }

    /// Get the number of groups in the outliner.
    #[wasm_bindgen(getter)]
    pub fn group_count(&self) -> usize {
        self.inner.group_count()
    }

    /// Get the number of project textures.
    #[wasm_bindgen(getter)]
    pub fn texture_count(&self) -> usize {
        self.inner.textures.len()
    }
}

/// Export settings and compile options.
#[wasm_bindgen]
#[derive(Default)]
pub struct ExportOptions {
    settings: ExportSettings,
    prevent_dialog: bool,
}

#[wasm_bindgen]
impl ExportOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ExportOptions {
        ExportOptions::default()
    }

    #[wasm_bindgen(setter)]
    pub fn set_credit(&mut self, value: String) {
        self.settings.credit = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_export_cube_names(&mut self, value: bool) {
        self.settings.export_cube_names = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_export_groups(&mut self, value: bool) {
        self.settings.export_groups = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_minified_output(&mut self, value: bool) {
        self.settings.minified_output = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_prevent_dialog(&mut self, value: bool) {
        self.prevent_dialog = value;
    }
}

impl ExportOptions {
    fn compile_options(&self, raw: bool) -> CompileOptions {
        CompileOptions {
            raw,
            prevent_dialog: self.prevent_dialog,
            ..CompileOptions::default()
        }
    }
}

/// Compile a project to model JSON text.
#[wasm_bindgen]
pub fn compile_project(
    project: &ProjectHandle,
    options: Option<ExportOptions>,
) -> Result<String, JsError> {
    let options = options.unwrap_or_default();
    crate::Codec::new()
        .compile_text(&project.inner, &options.settings, &options.compile_options(false))
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Compile a project and return the model as a JavaScript object.
#[wasm_bindgen]
pub fn compile_project_raw(
    project: &ProjectHandle,
    options: Option<ExportOptions>,
) -> Result<JsValue, JsError> {
    let options = options.unwrap_or_default();
    let document = crate::Codec::new().compile_document(
        &project.inner,
        &options.settings,
        &options.compile_options(true),
    );
    let json = serde_json::to_string(&document).map_err(|e| JsError::new(&e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|_| JsError::new("Failed to parse compiled model"))
}

/// Check whether a JSON model can be opened with this format.
#[wasm_bindgen]
pub fn accepts_model(json: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(json)
        .map(|model| crate::project::loader::accepts_model(&model))
        .unwrap_or(false)
}
