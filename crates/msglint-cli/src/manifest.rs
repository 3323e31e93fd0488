use std::fs;
use std::path::Path;

use anyhow::Context;
use msglint_validate::Declaration;
use serde::Deserialize;

/// The declarations of one owning type, as read from disk.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub owner: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest '{}'", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let manifest = if is_json {
            serde_json::from_str(&content).map_err(anyhow::Error::from)
        } else {
            serde_yaml::from_str(&content).map_err(anyhow::Error::from)
        };
        manifest.with_context(|| format!("invalid manifest '{}'", path.display()))
    }
}
