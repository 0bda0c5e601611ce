//! Region file loader.

use std::fs;
use std::path::Path;

use coursepilot_core::LessonRegions;

use crate::error::ConfigError;
use crate::schema::RegionFile;

/// Loads and validates the selector's region file.
pub struct RegionLoader;

impl RegionLoader {
    /// Load regions from a JSON file.
    pub fn load(path: &Path) -> Result<LessonRegions, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load regions from a JSON string.
    pub fn load_str(content: &str) -> Result<LessonRegions, ConfigError> {
        let file: RegionFile = serde_json::from_str(content)?;
        file.into_regions()
    }
}
