//! Dotted JSON paths: `favorites[0].planet`, `endpoints.len()`, `[2].id`.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

impl PathToken {
    /// Split `path` into tokens. Panics on an unclosed or non-numeric index.
    pub fn parse(path: &str) -> Vec<PathToken> {
        let mut tokens = Vec::new();
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            if segment == "len()" {
                tokens.push(PathToken::Len);
                continue;
            }
            let (field, mut indices) = match segment.find('[') {
                Some(pos) => segment.split_at(pos),
                None => (segment, ""),
            };
            if !field.is_empty() {
                tokens.push(PathToken::Field(field.to_string()));
            }
            while let Some(rest) = indices.strip_prefix('[') {
                let end = rest
                    .find(']')
                    .unwrap_or_else(|| panic!("unclosed '[' in JSON path \"{path}\""));
                let index = rest[..end]
                    .parse()
                    .unwrap_or_else(|_| panic!("bad index '{}' in JSON path \"{path}\"", &rest[..end]));
                tokens.push(PathToken::Index(index));
                indices = &rest[end + 1..];
            }
        }
        tokens
    }
}

/// Resolve `path` against `root`. Missing fields and out-of-range indices
/// resolve to `null`; `len()` of a scalar panics.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for token in PathToken::parse(path) {
        current = match token {
            PathToken::Field(name) => current.get(&name).cloned().unwrap_or(Value::Null),
            PathToken::Index(i) => current.get(i).cloned().unwrap_or(Value::Null),
            PathToken::Len => match &current {
                Value::Array(a) => Value::from(a.len()),
                Value::Object(o) => Value::from(o.len()),
                Value::String(s) => Value::from(s.chars().count()),
                other => panic!("len() of non-collection {other} in JSON path \"{path}\""),
            },
        };
    }
    current
}
