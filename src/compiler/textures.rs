//! Texture usage tracking and the model's texture table.

use crate::project::Texture;
use indexmap::{IndexMap, IndexSet};

/// Texture variable written when a face has no usable texture.
pub const MISSING_TEXTURE: &str = "#missing";

/// Key of the particle texture in the texture table.
pub const PARTICLE_KEY: &str = "particle";

/// Texture ids referenced by compiled faces, in order of first reference.
///
/// Scoped to one compile call.
pub type TextureUsage = IndexSet<String>;

/// Texture variables of the output model, in insertion order. Re-inserting a
/// variable keeps its position.
pub type TextureTable = IndexMap<String, String>;

/// Build the texture table from every project texture.
///
/// Unreferenced textures are skipped unless `textures_only` is set. Entries
/// that would just map a name to itself are left out.
pub fn resolve_textures(
    textures: &[Texture],
    usage: &TextureUsage,
    textures_only: bool,
) -> TextureTable {
    let mut table = TextureTable::new();

    for texture in textures {
        let link = texture.java_texture_link();
        if texture.particle {
            table.insert(PARTICLE_KEY.to_string(), link.clone());
        }
        if !textures_only && !usage.contains(&texture.id) {
            continue;
        }

        let name = texture.short_name();
        if name != link.trim_start_matches('#') {
            table.insert(name.to_string(), link);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textures() -> Vec<Texture> {
        vec![
            Texture::new("t1", "stone.png").in_folder("block"),
            Texture::new("t2", "dirt.png").in_folder("block"),
            Texture::new("t3", "spark.png")
                .in_folder("particle")
                .as_particle(),
        ]
    }

    #[test]
    fn test_usage_is_ordered_set() {
        let mut usage = TextureUsage::new();
        assert!(usage.insert("b".to_string()));
        assert!(usage.insert("a".to_string()));
        assert!(!usage.insert("b".to_string()));
        assert_eq!(usage.iter().map(String::as_str).collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(usage.len(), 2);
    }

    #[test]
    fn test_only_referenced_textures() {
        let mut usage = TextureUsage::new();
        usage.insert("t2".to_string());

        let table = resolve_textures(&textures(), &usage, false);
        assert_eq!(table["dirt"], "block/dirt");
        assert!(!table.contains_key("stone"));
        assert_eq!(table[PARTICLE_KEY], "particle/spark");
        assert!(!table.contains_key("spark"));
    }

    #[test]
    fn test_textures_only_includes_everything() {
        let table = resolve_textures(&textures(), &TextureUsage::new(), true);
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["stone", "dirt", PARTICLE_KEY, "spark"]);
    }

    #[test]
    fn test_identity_links_skipped() {
        let textures = vec![Texture::new("t1", "stone.png")];
        let mut usage = TextureUsage::new();
        usage.insert("t1".to_string());

        let table = resolve_textures(&textures, &usage, false);
        assert!(table.is_empty());
    }

    #[test]
    fn test_particle_keeps_first_position() {
        let textures = vec![
            Texture::new("t1", "spark.png").in_folder("block").as_particle(),
            Texture::new("t2", "ember.png").in_folder("block").as_particle(),
        ];
        let table = resolve_textures(&textures, &TextureUsage::new(), true);
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, [PARTICLE_KEY, "spark", "ember"]);
        assert_eq!(table[PARTICLE_KEY], "block/ember");
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut table = TextureTable::new();
        table.insert("zeta".to_string(), "block/zeta".to_string());
        table.insert("alpha".to_string(), "block/alpha".to_string());
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zeta":"block/zeta","alpha":"block/alpha"}"#);
    }
}
