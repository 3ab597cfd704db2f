//! Global export settings and per-call compile options.

use serde::{Deserialize, Serialize};

/// Editor-wide settings that affect every export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Credit line written to every model. Empty for none.
    pub credit: String,
    /// Write cube names into elements.
    pub export_cube_names: bool,
    /// Write the group hierarchy.
    pub export_groups: bool,
    /// Emit JSON without whitespace.
    pub minified_output: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            credit: String::new(),
            export_cube_names: true,
            export_groups: true,
            minified_output: false,
        }
    }
}

impl ExportSettings {
    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = credit.into();
        self
    }

    pub fn with_cube_names(mut self, export: bool) -> Self {
        self.export_cube_names = export;
        self
    }

    pub fn with_groups(mut self, export: bool) -> Self {
        self.export_groups = export;
        self
    }

    pub fn minified(mut self, minified: bool) -> Self {
        self.minified_output = minified;
        self
    }

    /// Names are never written into minified output.
    pub fn writes_cube_names(&self) -> bool {
        self.export_cube_names && !self.minified_output
    }
}

/// Top-level model fields whose inclusion can be forced either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Comment,
    Parent,
    AmbientOcclusion,
    Textures,
    Elements,
    FrontGuiLight,
    Overrides,
    Display,
    Groups,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Comment,
        Field::Parent,
        Field::AmbientOcclusion,
        Field::Textures,
        Field::Elements,
        Field::FrontGuiLight,
        Field::Overrides,
        Field::Display,
        Field::Groups,
    ];

    /// Option key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Comment => "comment",
            Field::Parent => "parent",
            Field::AmbientOcclusion => "ambientocclusion",
            Field::Textures => "textures",
            Field::Elements => "elements",
            Field::FrontGuiLight => "front_gui_light",
            Field::Overrides => "overrides",
            Field::Display => "display",
            Field::Groups => "groups",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Options for a single compile call.
///
/// Every field override is `None` by default, meaning the field is written
/// whenever it has something meaningful to say.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub comment: Option<bool>,
    pub parent: Option<bool>,
    pub ambientocclusion: Option<bool>,
    pub textures: Option<bool>,
    pub elements: Option<bool>,
    pub front_gui_light: Option<bool>,
    pub overrides: Option<bool>,
    pub display: Option<bool>,
    pub groups: Option<bool>,
    /// Return the structured document instead of JSON text.
    pub raw: bool,
    /// Skip the reserved-parent warning. The parent is still cleared.
    pub prevent_dialog: bool,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that return the structured document.
    pub fn raw() -> Self {
        Self {
            raw: true,
            ..Self::default()
        }
    }

    pub fn without_dialog(mut self) -> Self {
        self.prevent_dialog = true;
        self
    }

    /// Force a field in or out.
    pub fn with_field(mut self, field: Field, include: bool) -> Self {
        *self.slot_mut(field) = Some(include);
        self
    }

    pub fn override_for(&self, field: Field) -> Option<bool> {
        match field {
            Field::Comment => self.comment,
            Field::Parent => self.parent,
            Field::AmbientOcclusion => self.ambientocclusion,
            Field::Textures => self.textures,
            Field::Elements => self.elements,
            Field::FrontGuiLight => self.front_gui_light,
            Field::Overrides => self.overrides,
            Field::Display => self.display,
            Field::Groups => self.groups,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<bool> {
        match field {
            Field::Comment => &mut self.comment,
            Field::Parent => &mut self.parent,
            Field::AmbientOcclusion => &mut self.ambientocclusion,
            Field::Textures => &mut self.textures,
            Field::Elements => &mut self.elements,
            Field::FrontGuiLight => &mut self.front_gui_light,
            Field::Overrides => &mut self.overrides,
            Field::Display => &mut self.display,
            Field::Groups => &mut self.groups,
        }
    }

    /// Decide whether a field is written: the override wins, otherwise `default`.
    pub fn check(&self, field: Field, default: bool) -> bool {
        self.override_for(field).unwrap_or(default)
    }
}
