#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Writes `content` to a fresh temporary file with the given extension.
    /// The file is removed when the handle is dropped.
    pub fn create_temp_routes(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("jsonmvc_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_routes(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "toml")
    }
}

pub mod actions {
    use jsonmvc::{Action, ActionRegistry, ActionResult, ParameterMap};
    use serde_json::json;

    /// Returns its positional arguments and parameters verbatim.
    #[derive(Default)]
    pub struct Echo;

    impl Action for Echo {
        fn execute(&mut self, arguments: &[String], parameters: &ParameterMap) -> ActionResult {
            Ok(json!({ "arguments": arguments, "parameters": parameters }))
        }
    }

    /// Registry with [`Echo`] under each of `ids`.
    pub fn echo_registry(ids: &[&str]) -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        for id in ids {
            registry.register_default::<Echo>(id);
        }
        registry
    }
}
