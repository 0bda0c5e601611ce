//! Region file schema.

use coursepilot_core::{LessonRegions, Region};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// On-disk shape of the region file written by the selector.
///
/// The selector lets the user skip individual regions, so every field is
/// optional at parse time. [`RegionFile::into_regions`] enforces that all
/// four are present and usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionFile {
    pub video_area: Option<Region>,
    pub next_course_area: Option<Region>,
    pub quiz_area: Option<Region>,
    pub close_area: Option<Region>,
}

impl RegionFile {
    /// Validate into the automaton's region set.
    pub fn into_regions(self) -> Result<LessonRegions, ConfigError> {
        let video = require("video_area", self.video_area)?;
        let next = require("next_course_area", self.next_course_area)?;
        let quiz = require("quiz_area", self.quiz_area)?;
        let close = require("close_area", self.close_area)?;

        Ok(LessonRegions {
            video,
            next,
            quiz,
            close,
        })
    }
}

fn require(name: &'static str, region: Option<Region>) -> Result<Region, ConfigError> {
    let region = region.ok_or(ConfigError::MissingRegion(name))?;
    if region.is_empty() {
        return Err(ConfigError::EmptyRegion {
            name,
            width: region.width,
            height: region.height,
        });
    }
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_file() -> RegionFile {
        RegionFile {
            video_area: Some(Region::new(0, 0, 640, 360)),
            next_course_area: Some(Region::new(700, 400, 80, 30)),
            quiz_area: Some(Region::new(100, 100, 400, 300)),
            close_area: Some(Region::new(520, 80, 24, 24)),
        }
    }

    #[test]
    fn test_into_regions_complete() {
        let regions = full_file().into_regions().unwrap();
        assert_eq!(regions.video, Region::new(0, 0, 640, 360));
        assert_eq!(regions.close, Region::new(520, 80, 24, 24));
    }

    #[test]
    fn test_missing_region_rejected() {
        let mut file = full_file();
        file.quiz_area = None;
        let err = file.into_regions().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRegion("quiz_area")));
    }

    #[test]
    fn test_empty_region_rejected() {
        let mut file = full_file();
        file.next_course_area = Some(Region::new(10, 10, 0, 30));
        let err = file.into_regions().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyRegion {
                name: "next_course_area",
                ..
            }
        ));
    }
}
