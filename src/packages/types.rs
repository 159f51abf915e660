//! Package types.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One sensor package: a workout code and its positional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional sensor fields in constructor order
    pub data: Vec<f64>,
}

impl Package {
    /// Create a package.
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// On-disk layout of a TOML package file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageFile {
    /// Packages in reporting order
    #[serde(rename = "package", default)]
    pub packages: Vec<Package>,
}

/// Package file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// `[[package]]` tables
    Toml,
    /// A JSON array of packages
    Json,
}

impl PackageFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PackageFormat::Json,
            _ => PackageFormat::Toml,
        }
    }
}

/// Package loading errors.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
