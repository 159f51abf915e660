//! Package file loading and the built-in demo set.

use crate::packages::types::{Package, PackageError, PackageFile, PackageFormat};
use std::path::Path;

/// The built-in demo packages.
///
/// The first entry deliberately carries an unknown code so a demo run shows
/// the unknown-type message next to real reports.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM1", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse packages from text in the given format.
pub fn parse_packages(content: &str, format: PackageFormat) -> Result<Vec<Package>, PackageError> {
    match format {
        PackageFormat::Json => {
            serde_json::from_str(content).map_err(|e| PackageError::ParseError(e.to_string()))
        }
        PackageFormat::Toml => {
            let file: PackageFile =
                toml::from_str(content).map_err(|e| PackageError::ParseError(e.to_string()))?;
            Ok(file.packages)
        }
    }
}

/// Load packages from a file, choosing the format by extension.
pub fn load_packages(path: &Path) -> Result<Vec<Package>, PackageError> {
    let content = std::fs::read_to_string(path).map_err(|e| PackageError::IoError(e.to_string()))?;
    let packages = parse_packages(&content, PackageFormat::from_path(path))?;

    tracing::info!("Loaded {} packages from {}", packages.len(), path.display());

    Ok(packages)
}
