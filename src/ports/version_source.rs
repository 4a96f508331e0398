//! Version metadata port.

use crate::domain::{AppError, VersionMetadata};

/// Supplies the product version record for a generation run.
pub trait VersionSource {
    fn load(&self) -> Result<VersionMetadata, AppError>;
}
