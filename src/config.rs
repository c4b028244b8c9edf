//! YAML run configuration.
//!
//! Every key is optional. The CLI layers its flags on top: flag > file > default.
//!
//! ```yaml
//! users: 100
//! products: 50
//! orders: 200
//! seed: 42
//! output: test-data.json
//! format: sql
//! salt: qa-test
//! reference_time: 2024-01-01T00:00:00Z
//! plan_weights:
//!   free: 0.7
//!   enterprise: 0.0
//! ```

use crate::error::{GenError, Result};
use crate::export::Format;
use crate::model::PlanWeights;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_USERS: usize = 100;
pub const DEFAULT_PRODUCTS: usize = 50;
pub const DEFAULT_ORDERS: usize = 200;
pub const DEFAULT_OUTPUT: &str = "test-data.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub users: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub format: Option<Format>,
    pub salt: Option<String>,
    pub reference_time: Option<DateTime<Utc>>,
    /// Unset weights fall back to their defaults.
    pub plan_weights: Option<PlanWeights>,
}

impl RunConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| GenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }
}
