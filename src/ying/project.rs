//! Project configuration (`ying.json`)
//!
//! Every Ying project carries a `ying.json` file at its root. The file is
//! plain tab-indented JSON:
//!
//! ```text
//! {
//!     "name": "hello",
//!     "description": "",
//!     "version": "0.0.0",
//!     "license": "proprietary",
//!     "type": "console",
//!     "entrypoint": "./src/main.ya",
//!     "scripts": {}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_CONFIGURATION_FILE_NAME: &str = "ying.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Console,
    Library,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Console => "console",
            ProjectType::Library => "library",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    pub name: String,
    pub description: String,
    pub version: String,
    pub license: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub entrypoint: String,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectConfigurationError {
    #[error("{0} is not a file")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectConfiguration {
    /// Write the configuration to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), ProjectConfigurationError> {
        let mut contents = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut contents, formatter);
        self.serialize(&mut serializer)?;
        contents.push(b'\n');

        tracing::debug!(path = %path.display(), "writing project configuration");
        fs::write(path, contents)?;
        Ok(())
    }

    /// Search `path` and its ancestors for a project configuration file.
    ///
    /// Returns the path of the first file found.
    pub fn find_in_path(path: &Path) -> Option<PathBuf> {
        path.ancestors()
            .map(|directory| directory.join(DEFAULT_PROJECT_CONFIGURATION_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    pub fn read_from_file(path: &Path) -> Result<Self, ProjectConfigurationError> {
        if path.exists() && !path.is_file() {
            return Err(ProjectConfigurationError::NotAFile(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
