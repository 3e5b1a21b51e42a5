//! Initial folder data supply.
//!
//! The driver is constructed from a wholesale collection of folders; this
//! module supplies that collection, either from a JSON fixtures file or
//! from a built-in deterministic sample set.

use std::fs;
use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use folderhub_core::types::OrgId;
use folderhub_entity::Folder;

/// Fixed org IDs for the built-in sample set, so that repeated CLI runs
/// can refer to the same organizations.
pub const SAMPLE_ORG_1: Uuid = Uuid::from_u128(0x1001);
pub const SAMPLE_ORG_2: Uuid = Uuid::from_u128(0x1002);

/// Load folders from a JSON fixtures file.
pub fn load(path: &Path) -> anyhow::Result<Vec<Folder>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures file {}", path.display()))?;
    let folders: Vec<Folder> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixtures file {}", path.display()))?;
    Ok(folders)
}

/// Load folders from the fixtures file if it exists, otherwise fall back
/// to the built-in sample set.
pub fn load_or_sample(path: &Path) -> anyhow::Result<Vec<Folder>> {
    if path.exists() {
        load(path)
    } else {
        tracing::warn!(path = %path.display(), "Fixtures file missing, using built-in sample data");
        Ok(sample())
    }
}

/// Deterministic built-in sample hierarchy spanning two organizations.
pub fn sample() -> Vec<Folder> {
    let org1 = OrgId::from_uuid(SAMPLE_ORG_1);
    let org2 = OrgId::from_uuid(SAMPLE_ORG_2);

    vec![
        Folder::new("alpha", "alpha", org1),
        Folder::new("bravo", "alpha.bravo", org1),
        Folder::new("charlie", "alpha.bravo.charlie", org1),
        Folder::new("delta", "alpha.delta", org1),
        Folder::new("echo", "alpha.delta.echo", org1),
        Folder::new("golf", "golf", org1),
        Folder::new("foxtrot", "foxtrot", org2),
        Folder::new("hotel", "foxtrot.hotel", org2),
    ]
}
