//! Project descriptor (`package.json`) reading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name of the project descriptor, looked up in the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Project metadata used for placeholder substitution and artifact coordinates.
///
/// Only `name` and `version` are required. Every other top-level field is kept
/// in [`extra`](Self::extra) so it can be referenced as a `{placeholder}` in
/// the configuration.
///
/// # Examples
///
/// ```
/// use mvn_deploy_core::Manifest;
///
/// let manifest = Manifest::new("app", "1.0.0");
/// assert_eq!(manifest.field("name").as_deref(), Some("app"));
/// assert_eq!(manifest.field("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Read `package.json` from `project_dir`.
    ///
    /// Nothing is cached: call this once per operation so that version bumps
    /// made between operations are observed.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        tracing::debug!(path = %path.display(), "reading manifest");

        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::ManifestLoad {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| crate::Error::ManifestParse { path, source: e })
    }

    /// Look up a top-level field as a placeholder value.
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON form.
    /// Objects, arrays, `null` and absent keys yield `None`.
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "version" => Some(self.version.clone()),
            _ => match self.extra.get(key)? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn extra_scalars_resolve() {
        let m = parse(r#"{"name":"app","version":"1.0.0","license":"MIT","private":true,"port":8080}"#);
        assert_eq!(m.field("license").as_deref(), Some("MIT"));
        assert_eq!(m.field("private").as_deref(), Some("true"));
        assert_eq!(m.field("port").as_deref(), Some("8080"));
    }

    #[test]
    fn structured_fields_do_not_resolve() {
        let m = parse(
            r#"{"name":"app","version":"1.0.0","scripts":{"build":"tsc"},"files":["dist"],"main":null}"#,
        );
        assert_eq!(m.field("scripts"), None);
        assert_eq!(m.field("files"), None);
        assert_eq!(m.field("main"), None);
    }

    #[test]
    fn name_and_version_are_required() {
        assert!(serde_json::from_str::<Manifest>(r#"{"name":"app"}"#).is_err());
        assert!(serde_json::from_str::<Manifest>(r#"{"version":"1.0.0"}"#).is_err());
    }
}
