// Optional SHA-256 manifest for artifact files
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shoprank_core::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// path relative to the data directory -> lowercase hex SHA-256
    pub files: BTreeMap<String, String>,
}

impl Manifest {
    /// Load `manifest.json` from `data_dir`, if there is one
    pub fn load(data_dir: &Path) -> Result<Option<Self>> {
        let path = data_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)?;
        let manifest: Manifest = serde_json::from_slice(&bytes)?;
        Ok(Some(manifest))
    }

    pub fn checksum(bytes: &[u8]) -> String {
        format!("{:x}", Sha256::digest(bytes))
    }

    /// Check `bytes` against the recorded checksum; unlisted files pass
    pub fn verify(&self, relative_path: &str, bytes: &[u8]) -> Result<()> {
        let Some(expected) = self.files.get(relative_path) else {
            return Ok(());
        };
        let actual = Self::checksum(bytes);
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(Error::Artifact(format!(
                "checksum mismatch for {}: expected {}, got {}",
                relative_path, expected, actual
            )));
        }
        Ok(())
    }
}
