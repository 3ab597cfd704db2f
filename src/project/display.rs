//! Item display transforms.

use crate::types::{is_zero, Vec3};
use serde::{Deserialize, Serialize};

/// Rendering context a display transform applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySlot {
    ThirdpersonRighthand,
    ThirdpersonLefthand,
    FirstpersonRighthand,
    FirstpersonLefthand,
    Ground,
    Gui,
    Head,
    Fixed,
}

impl DisplaySlot {
    /// All slots in the order they are written.
    pub const ALL: [DisplaySlot; 8] = [
        DisplaySlot::ThirdpersonRighthand,
        DisplaySlot::ThirdpersonLefthand,
        DisplaySlot::FirstpersonRighthand,
        DisplaySlot::FirstpersonLefthand,
        DisplaySlot::Ground,
        DisplaySlot::Gui,
        DisplaySlot::Head,
        DisplaySlot::Fixed,
    ];

}

/// Editable transform for one display slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    /// Per-axis mirroring, folded into the sign of `scale` on export.
    #[serde(default)]
    pub mirror: [bool; 3],
}

fn default_scale() -> Vec3 {
    [1.0, 1.0, 1.0]
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            rotation: [0.0; 3],
            translation: [0.0; 3],
            scale: default_scale(),
            mirror: [false; 3],
        }
    }
}

/// Display transform as written to model JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl DisplaySettings {
    /// Export only what differs from the identity transform.
    ///
    /// Returns `None` when nothing would be written.
    pub fn export(&self) -> Option<DisplayExport> {
        let mirrored = self.mirror.iter().any(|m| *m);
        let rotation = (!is_zero(&self.rotation)).then_some(self.rotation);
        let translation = (!is_zero(&self.translation)).then_some(self.translation);
        let scale = (self.scale != default_scale() || mirrored).then(|| {
            let mut scale = self.scale;
            for (s, m) in scale.iter_mut().zip(self.mirror) {
                if m {
                    *s = -*s;
                }
            }
            scale
        });

        if rotation.is_none() && translation.is_none() && scale.is_none() {
            return None;
        }
        Some(DisplayExport {
            rotation,
            translation,
            scale,
        })
    }
}
