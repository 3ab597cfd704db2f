//! Project snapshot loading from JSON files and strings.

use super::Project;
use crate::error::{ExportError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Load a project snapshot from a JSON file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Project> {
    let data = std::fs::read(path.as_ref())?;
    load_from_bytes(&data)
}

/// Load a project snapshot from JSON bytes (for WASM compatibility).
pub fn load_from_bytes(data: &[u8]) -> Result<Project> {
    let project: Project = serde_json::from_slice(data)?;
    validate(&project)?;
    log::debug!(
        "Loaded project with {} cubes, {} groups and {} textures",
        project.cube_count(),
        project.group_count(),
        project.textures.len()
    );
    Ok(project)
}

/// Load a project snapshot from a JSON string.
pub fn load_from_str(json: &str) -> Result<Project> {
    load_from_bytes(json.as_bytes())
}

/// Reject snapshots whose texture ids are ambiguous.
fn validate(project: &Project) -> Result<()> {
    let mut seen = HashSet::new();
    for texture in &project.textures {
        if !seen.insert(texture.id.as_str()) {
            return Err(ExportError::InvalidProject(format!(
                "Texture id {} is used by more than one texture",
                texture.id
            )));
        }
    }
    Ok(())
}

/// Import filter: whether a JSON document looks like a block model this
/// format can open.
pub fn accepts_model(model: &Value) -> bool {
    ["parent", "elements", "textures"]
        .iter()
        .any(|key| model.get(key).is_some_and(is_truthy))
}

/// JavaScript-style truthiness, used for opaque pass-through values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
