//! Stable project identifiers.

use sha2::{Digest, Sha256};

/// Derive the project GUID for a file owned by a component.
///
/// The identifier depends only on the two names, so regenerating a solution
/// keeps every cross-reference stable.
pub fn project_guid(component: &str, file: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(component.as_bytes());
    hasher.update([0u8]);
    hasher.update(file.as_bytes());
    let digest = hasher.finalize();

    let hex: String = digest.iter().take(16).map(|b| format!("{:02X}", b)).collect();
    format!("{}-{}-{}-{}-{}", &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32])
}
