//! Canonical JSON text for compiled models.
//!
//! Tab indented, numbers rounded to five decimals, short arrays and face
//! tags kept on a single line so models stay readable and diffable.

use serde_json::Value;

/// Arrays of scalars longer than this (estimated) are broken over lines.
const MAX_INLINE_ARRAY: usize = 140;

/// Render a model value as text.
pub fn to_text(value: &Value, minified: bool) -> String {
    let mut printer = Printer {
        out: String::new(),
        minified,
        path: Vec::new(),
    };
    printer.value(value, 1, true);
    printer.out.push('\n');
    printer.out
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index,
}

struct Printer<'a> {
    out: String,
    minified: bool,
    path: Vec<Segment<'a>>,
}

impl<'a> Printer<'a> {
    fn value(&mut self, value: &'a Value, depth: usize, breaks: bool) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.out.push_str(&format_number(n)),
            Value::String(_) => self.out.push_str(&value.to_string()),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth, breaks),
        }
    }

    fn array(&mut self, items: &'a [Value], depth: usize) {
        let multiline = items.iter().any(|v| v.is_object() || v.is_array())
            || estimated_width(items) > MAX_INLINE_ARRAY;

        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                if !multiline && !self.minified {
                    self.out.push(' ');
                }
            }
            if multiline {
                self.newline(depth);
            }
            self.path.push(Segment::Index);
            self.value(item, depth + 1, true);
            self.path.pop();
        }
        if multiline && !items.is_empty() {
            self.newline(depth - 1);
        }
        self.out.push(']');
    }

    fn object(&mut self, map: &'a serde_json::Map<String, Value>, depth: usize, breaks: bool) {
        let breaks = breaks && !self.is_one_liner();

        self.out.push('{');
        for (i, (key, item)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                if !breaks && !self.minified {
                    self.out.push(' ');
                }
            }
            if breaks {
                self.newline(depth);
            }
            self.out.push_str(&Value::String(key.clone()).to_string());
            self.out.push(':');
            if !self.minified {
                self.out.push(' ');
            }
            self.path.push(Segment::Key(key));
            self.value(item, depth + 1, breaks);
            self.path.pop();
        }
        if breaks && !map.is_empty() {
            self.newline(depth - 1);
        }
        self.out.push('}');
    }

    /// Face tags and element rotations are written on one line.
    fn is_one_liner(&self) -> bool {
        matches!(
            self.path.as_slice(),
            [
                Segment::Key("components"),
                Segment::Index,
                Segment::Key("rotation")
            ] | [
                Segment::Key("components"),
                Segment::Index,
                Segment::Key("faces"),
                Segment::Key(_)
            ]
        )
    }

    fn newline(&mut self, depth: usize) {
        if self.minified {
            return;
        }
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push('\t');
        }
    }
}

fn estimated_width(items: &[Value]) -> usize {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.len() + 4,
            _ => 3,
        })
        .sum()
}

/// Round to five decimals; integral values are printed without a fraction.
pub fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    let rounded = (f * 100_000.0).round() / 100_000.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_formatting() {
        let n = |v: f64| format_number(&serde_json::Number::from_f64(v).unwrap());
        assert_eq!(n(16.0), "16");
        assert_eq!(n(-0.0), "0");
        assert_eq!(n(0.1 + 0.2), "0.3");
        assert_eq!(n(1.234567), "1.23457");
        assert_eq!(n(-22.5), "-22.5");
        assert_eq!(format_number(&serde_json::Number::from(7u32)), "7");
    }

    #[test]
    fn test_pretty_layout() {
        let value = json!({
            "loader": "framework:open_model",
            "texture_size": [32, 32],
            "components": [
                {
                    "from": [0.0, 0.0, 0.0],
                    "to": [16.0, 16.0, 16.0],
                    "rotation": { "angle": 22.5, "axis": "y", "origin": [8.0, 8.0, 8.0] },
                    "faces": {
                        "north": { "uv": [0.0, 0.0, 16.0, 16.0], "texture": "#stone" }
                    }
                }
            ]
        });

        let expected = "{\n\
            \t\"loader\": \"framework:open_model\",\n\
            \t\"texture_size\": [32, 32],\n\
            \t\"components\": [\n\
            \t\t{\n\
            \t\t\t\"from\": [0, 0, 0],\n\
            \t\t\t\"to\": [16, 16, 16],\n\
            \t\t\t\"rotation\": {\"angle\": 22.5, \"axis\": \"y\", \"origin\": [8, 8, 8]},\n\
            \t\t\t\"faces\": {\n\
            \t\t\t\t\"north\": {\"uv\": [0, 0, 16, 16], \"texture\": \"#stone\"}\n\
            \t\t\t}\n\
            \t\t}\n\
            \t]\n\
            }\n";
        assert_eq!(to_text(&value, false), expected);
    }

    #[test]
    fn test_minified_layout() {
        let value = json!({
            "parent": "block/block",
            "textures": { "all": "block/stone" },
            "display": { "gui": { "rotation": [30.0, 225.0, 0.0] } }
        });
        let expected = concat!(
            "{\"parent\":\"block/block\",",
            "\"textures\":{\"all\":\"block/stone\"},",
            "\"display\":{\"gui\":{\"rotation\":[30,225,0]}}}\n"
        );
        assert_eq!(to_text(&value, true), expected);
    }

    #[test]
    fn test_strings_are_escaped() {
        let value = json!({ "credit": "Made with \"care\"\n" });
        assert_eq!(
            to_text(&value, true),
            "{\"credit\":\"Made with \\\"care\\\"\\n\"}\n"
        );
    }

    #[test]
    fn test_keys_are_escaped() {
        let value = json!({ "tint \"a\"": 1, "tab\tkey": "x" });
        assert_eq!(
            to_text(&value, false),
            "{\n\t\"tint \\\"a\\\"\": 1,\n\t\"tab\\tkey\": \"x\"\n}\n"
        );
    }

    #[test]
    fn test_long_string_arrays_break() {
        let items: Vec<String> = (0..20).map(|i| format!("entry_{i:02}")).collect();
        let text = to_text(&json!({ "list": items }), false);
        assert!(text.contains("[\n\t\t\"entry_00\",\n"));
    }

    #[test]
    fn test_empty_containers() {
        let text = to_text(&json!({ "a": [], "b": {} }), false);
        assert_eq!(text, "{\n\t\"a\": [],\n\t\"b\": {}\n}\n");
    }
}
