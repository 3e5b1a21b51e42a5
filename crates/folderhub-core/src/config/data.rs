//! Fixture data configuration.

use serde::{Deserialize, Serialize};

/// Location of the initial folder data supplied to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON fixtures file.
    #[serde(default = "default_fixtures")]
    pub fixtures: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fixtures: default_fixtures(),
        }
    }
}

fn default_fixtures() -> String {
    "data/sample_folders.json".to_string()
}
