use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{IconError, Result};
use crate::sizes::IconSpec;

pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// One `images` entry of `Contents.json`. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

impl From<&IconSpec> for ManifestEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            size: spec.size_label(),
            idiom: spec.idiom.as_str().to_string(),
            filename: spec.file_name.to_string(),
            scale: spec.scale_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self { version: 1, author: "xcode".to_string() }
    }
}

/// Asset catalog descriptor mapping each written file to its idiom and scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

impl Manifest {
    pub fn from_entries(images: Vec<ManifestEntry>) -> Self {
        Self { images, info: ManifestInfo::default() }
    }

    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a IconSpec>) -> Self {
        Self::from_entries(specs.into_iter().map(ManifestEntry::from).collect())
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes `Contents.json` into `dir`, replacing any existing file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|source| IconError::WriteManifest {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
