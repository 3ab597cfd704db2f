use open_model_exporter::compiler::HierarchyNode;
use open_model_exporter::{
    load_project, Codec, CompileOptions, CompileOutput, Direction, Document, ExportSettings,
    FileWriter, Notifier, Project,
};
use std::sync::{Arc, Mutex};

const SNAPSHOT: &str = r##"{
    "name": "lamp",
    "parent": "block/block",
    "texture_width": 32,
    "texture_height": 32,
    "textures": [
        { "id": "glass", "name": "lamp_glass.png", "folder": "block", "namespace": "lights" },
        { "id": "iron", "name": "iron_block.png", "folder": "block", "particle": true },
        { "id": "unused", "name": "unused.png", "folder": "block" }
    ],
    "outliner": [
        { "type": "group", "name": "base", "origin": [8, 0, 8], "children": [
            { "type": "cube", "name": "foot", "from": [4, 0, 4], "to": [12, 2, 12],
              "faces": {
                  "north": { "texture": "iron", "uv": [0, 0, 16, 4] },
                  "up":    { "texture": "iron", "uv": [0, 0, 16, 16], "cullface": "up" },
                  "down":  { "texture": null }
              } },
            { "type": "cube", "name": "ghost", "from": [0, 0, 0], "to": [1, 1, 1],
              "faces": { "north": { "texture": null } } }
        ]},
        { "type": "null_object", "name": "pivot" },
        { "type": "group", "name": "shade", "children": [
            { "type": "cube", "name": "globe", "from": [5, 2, 5], "to": [11, 10, 11],
              "inflate": 0.25, "rotation": [0, 45, 0], "origin": [8, 6, 8], "rescale": true,
              "faces": {
                  "east": { "texture": "glass", "uv": [0, 0, 12, 16], "tint": 0 },
                  "west": { "texture": "glass", "uv": [12, 0, 24, 16], "rotation": 180 }
              } }
        ]}
    ]
}"##;

#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

impl Notifier for Messages {
    fn invalid_builtin_parent(&self, parent: &str) {
        self.0.lock().unwrap().push(parent.to_string());
    }
}

fn snapshot() -> Project {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lamp.project.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    load_project(&path).unwrap()
}

fn compile_raw(codec: &Codec, project: &Project, options: CompileOptions) -> Document {
    let options = CompileOptions { raw: true, ..options };
    match codec
        .compile(project, &ExportSettings::default(), &options)
        .unwrap()
    {
        CompileOutput::Document(document) => document,
        CompileOutput::Text(_) => panic!("raw compile returned text"),
    }
}

fn collect_indices(nodes: &[HierarchyNode], out: &mut Vec<usize>) {
    for node in nodes {
        match node {
            HierarchyNode::Element(index) => out.push(*index),
            HierarchyNode::Group(group) => collect_indices(&group.children, out),
        }
    }
}

#[test]
fn compiles_snapshot() {
    let project = snapshot();
    let document = compile_raw(&Codec::new(), &project, CompileOptions::default());

    assert_eq!(document.loader, "framework:open_model");
    assert_eq!(document.parent.as_deref(), Some("block/block"));
    assert_eq!(document.texture_size, Some([32, 32]));

    let elements = document.components.as_ref().unwrap();
    assert_eq!(elements.len(), 2);

    let foot = &elements[0];
    assert_eq!(foot.name.as_deref(), Some("foot"));
    assert_eq!(foot.faces.len(), 2);
    assert_eq!(foot.faces[&Direction::North].uv, Some([0.0, 0.0, 8.0, 2.0]));
    assert_eq!(foot.faces[&Direction::Up].cullface, Some(Direction::Up));
    assert_eq!(foot.faces[&Direction::North].texture, "#iron_block");

    let globe = &elements[1];
    assert_eq!(globe.from, [4.75, 1.75, 4.75]);
    assert_eq!(globe.to, [11.25, 10.25, 11.25]);
    let rotation = globe.rotation.as_ref().unwrap();
    assert_eq!(rotation.angle, 45.0);
    assert!(rotation.rescale);
    assert_eq!(globe.faces[&Direction::East].tintindex, Some(0));
    assert_eq!(globe.faces[&Direction::West].rotation, Some(180));

    let textures = document.textures.as_ref().unwrap();
    let entries: Vec<_> = textures
        .iter()
        .map(|(name, link)| (name.as_str(), link.as_str()))
        .collect();
    assert_eq!(
        entries,
        [
            ("lamp_glass", "lights:block/lamp_glass"),
            ("particle", "block/iron_block"),
            ("iron_block", "block/iron_block"),
        ]
    );
}

#[test]
fn hierarchy_indices_point_at_matching_elements() {
    let project = snapshot();
    let document = compile_raw(&Codec::new(), &project, CompileOptions::default());
    let elements = document.components.as_ref().unwrap();
    let groups = document.groups.as_ref().unwrap();

    let mut indices = Vec::new();
    collect_indices(groups, &mut indices);
    assert_eq!(indices, [0, 1]);

    let sources: Vec<_> = project.cubes().filter(|c| c.name != "ghost").collect();
    for (index, cube) in indices.iter().zip(sources) {
        let element = &elements[*index];
        for axis in 0..3 {
            assert_eq!(element.from[axis], cube.from[axis] - cube.inflate);
            assert_eq!(element.to[axis], cube.to[axis] + cube.inflate);
        }
    }
}

#[test]
fn texture_table_has_no_identity_entries() {
    let document = compile_raw(&Codec::new(), &snapshot(), CompileOptions::default());
    for (name, link) in document.textures.unwrap().iter() {
        assert_ne!(name, link.trim_start_matches('#'));
    }
}

#[test]
fn reserved_parent_is_cleared_with_one_warning() {
    let messages = Messages::default();
    let codec = Codec::with_notifier(messages.clone());
    let project = snapshot().with_parent("item/generated");

    let document = compile_raw(&codec, &project, CompileOptions::default());

    assert_eq!(document.parent, None);
    assert_eq!(messages.0.lock().unwrap().as_slice(), ["item/generated"]);
}

#[test]
fn textures_only_model_lists_every_texture() {
    let mut project = snapshot();
    project.outliner.clear();

    let document = compile_raw(&Codec::new(), &project, CompileOptions::default());

    assert_eq!(document.components, None);
    let textures = document.textures.unwrap();
    assert_eq!(textures["unused"], "block/unused");
    assert_eq!(textures["lamp_glass"], "lights:block/lamp_glass");
}

#[test]
fn compiling_twice_is_identical() {
    let codec = Codec::new();
    let project = snapshot();
    let settings = ExportSettings::default();
    let first = codec.compile_text(&project, &settings, &CompileOptions::default()).unwrap();
    let second = codec.compile_text(&project, &settings, &CompileOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn text_output_parses_back() {
    let text = Codec::new()
        .compile_text(&snapshot(), &ExportSettings::default(), &CompileOptions::default())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["loader", "parent", "texture_size", "textures", "components", "groups"]);
    assert_eq!(value["components"][0]["faces"]["north"]["uv"], serde_json::json!([0, 0, 8, 2]));
    assert_eq!(value["components"][1]["rotation"]["axis"], "y");
}

#[test]
fn export_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = FileWriter::new(dir.path());

    Codec::new()
        .export(&snapshot(), &ExportSettings::default().minified(true), &mut writer)
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("lamp.json")).unwrap();
    assert!(written.starts_with("{\"loader\":\"framework:open_model\""));
    assert!(!written.contains("\"name\":\"foot\""));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = FileWriter::new(dir.path().join("missing"));
    let result = Codec::new().export(&snapshot(), &ExportSettings::default(), &mut writer);
    assert!(result.is_err());
}
