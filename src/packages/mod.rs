//! Sensor package input.

pub mod loader;
pub mod types;

pub use loader::{demo_packages, load_packages, parse_packages};
pub use types::{Package, PackageError, PackageFile, PackageFormat};
