//! Model document and the rules deciding which top-level fields it carries.

use super::element::CompiledElement;
use super::groups::{summarize, HierarchyNode};
use super::textures::{resolve_textures, TextureTable};
use super::walker::WalkOutput;
use super::{Notifier, LOADER, RESERVED_PARENTS};
use crate::project::loader::is_truthy;
use crate::project::{DisplayExport, DisplaySlot, Project};
use crate::settings::{CompileOptions, ExportSettings, Field};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Value written for `gui_light` when the model is lit from the front.
pub const FRONT_GUI_LIGHT: &str = "front";

/// A compiled open model.
///
/// `None` fields are left out of the JSON. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambientocclusion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_size: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textures: Option<TextureTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<CompiledElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gui_light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<BTreeMap<DisplaySlot, DisplayExport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<HierarchyNode>>,
    /// Fields added by compile hooks, written after everything else.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            credit: None,
            loader: LOADER.to_string(),
            parent: None,
            ambientocclusion: None,
            texture_size: None,
            textures: None,
            components: None,
            gui_light: None,
            overrides: None,
            display: None,
            groups: None,
            extra: Map::new(),
        }
    }
}

impl Document {
    /// Number of compiled elements.
    pub fn element_count(&self) -> usize {
        self.components.as_ref().map_or(0, |c| c.len())
    }

    /// Convert to a JSON value, keeping field order.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Whether a parent is one of the built-in item parents that cannot carry
/// custom elements.
pub fn is_reserved_parent(parent: &str) -> bool {
    RESERVED_PARENTS.contains(&parent)
}

/// Combines walk output, project metadata and settings into a [`Document`].
pub struct Assembler<'a> {
    pub project: &'a Project,
    pub settings: &'a ExportSettings,
    pub options: &'a CompileOptions,
}

impl Assembler<'_> {
    pub fn assemble(&self, walk: WalkOutput, notifier: &dyn Notifier) -> Document {
        let meta = &self.project.meta;
        let options = self.options;
        let WalkOutput {
            elements,
            index_lut,
            textures_used,
        } = walk;

        let mut parent = meta.parent.clone();
        let textures_only =
            elements.is_empty() && options.check(Field::Parent, !parent.is_empty());
        let textures = resolve_textures(&self.project.textures, &textures_used, textures_only);

        if !elements.is_empty() && is_reserved_parent(&parent) {
            if !options.prevent_dialog {
                notifier.invalid_builtin_parent(&parent);
            }
            parent.clear();
        }

        let mut document = Document::default();

        if options.check(Field::Comment, !self.settings.credit.is_empty()) {
            document.credit = Some(self.settings.credit.clone());
        }
        if options.check(Field::Parent, !parent.is_empty()) {
            document.parent = Some(parent);
        }
        if options.check(Field::AmbientOcclusion, !meta.ambient_occlusion) {
            document.ambientocclusion = Some(false);
        }
        if meta.texture_width != 16 || meta.texture_height != 16 {
            document.texture_size = Some([meta.texture_width, meta.texture_height]);
        }
        if options.check(Field::Textures, !textures.is_empty()) {
            document.textures = Some(textures);
        }
        let element_count = elements.len();
        if options.check(Field::Elements, !elements.is_empty()) {
            document.components = Some(elements);
        }
        if options.check(Field::FrontGuiLight, meta.front_gui_light) {
            document.gui_light = Some(FRONT_GUI_LIGHT.to_string());
        }
        if options.check(Field::Overrides, is_truthy(&meta.overrides)) {
            document.overrides = Some(meta.overrides.clone());
        }
        if options.check(Field::Display, !meta.display_settings.is_empty()) {
            let display: BTreeMap<_, _> = DisplaySlot::ALL
                .into_iter()
                .filter_map(|slot| {
                    let export = meta.display_settings.get(&slot)?.export()?;
                    Some((slot, export))
                })
                .collect();
            if !display.is_empty() {
                document.display = Some(display);
            }
        }
        let has_groups = self.project.group_count() > 0;
        if options.check(Field::Groups, self.settings.export_groups && has_groups) {
            document.groups = summarize(&self.project.outliner, &index_lut, element_count);
        }

        document
    }
}
