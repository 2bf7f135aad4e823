use serde_json::Value;

/// Body returned if the serializer itself fails
const SERIALIZATION_FAILURE: &str = r#"{"errorMessage":"Failed to serialize response"}"#;

/// The JSON serialization collaborator.
///
/// Given an object graph and dot-notation exclusion paths, produce the
/// response text. Must not fail: the dispatcher calls it exactly once per
/// request and writes whatever it returns.
pub trait JsonSerializer: Send + Sync {
    fn serialize(&self, payload: Value, exclusions: &[String]) -> String;
}

/// Default serializer: prunes excluded fields from a `serde_json::Value`
/// tree, then renders it compactly.
///
/// Exclusion paths are dot-separated field names:
/// - `moons.mass` drops `mass` inside `moons`
/// - `*` matches zero or more path segments, so `*.class` drops every
///   `class` field at any depth, including the top level
/// - arrays are transparent: `moons.mass` applies to every element of a
///   `moons` array
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusionSerializer {
    pretty: bool,
}

impl ExclusionSerializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render indented JSON instead of compact
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonSerializer for ExclusionSerializer {
    fn serialize(&self, mut payload: Value, exclusions: &[String]) -> String {
        let patterns: Vec<Vec<&str>> = exclusions
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| e.split('.').collect())
            .collect();

        if !patterns.is_empty() {
            let mut path = Vec::new();
            prune(&mut payload, &mut path, &patterns);
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&payload)
        } else {
            serde_json::to_string(&payload)
        };
        rendered.unwrap_or_else(|_| SERIALIZATION_FAILURE.to_string())
    }
}

fn prune(value: &mut Value, path: &mut Vec<String>, patterns: &[Vec<&str>]) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| {
                path.push(key.clone());
                let excluded = patterns.iter().any(|p| matches_path(p, path));
                path.pop();
                !excluded
            });
            for (key, child) in map.iter_mut() {
                path.push(key.clone());
                prune(child, path, patterns);
                path.pop();
            }
        }
        Value::Array(items) => {
            for item in items {
                prune(item, path, patterns);
            }
        }
        _ => {}
    }
}

/// Glob-match dot segments against a field path; `*` spans zero or more
/// segments.
///
/// Dynamic programming over pattern × path suffixes, so the cost stays
/// `O(pattern.len() * path.len())` however many `*` the pattern holds.
fn matches_path(pattern: &[&str], path: &[String]) -> bool {
    let n = path.len();
    // `next[j]`: the remaining pattern suffix matches `path[j..]`
    let mut next = vec![false; n + 1];
    next[n] = true;
    for segment in pattern.iter().rev() {
        let mut current = vec![false; n + 1];
        for j in (0..=n).rev() {
            current[j] = if *segment == "*" {
                next[j] || (j < n && current[j + 1])
            } else {
                j < n && path[j] == *segment && next[j + 1]
            };
        }
        next = current;
    }
    next[0]
}
