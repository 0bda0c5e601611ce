//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Region file not found: {0}")]
    NotFound(String),

    #[error("Missing required region: {0}")]
    MissingRegion(&'static str),

    #[error("Region {name} has zero area ({width}x{height})")]
    EmptyRegion {
        name: &'static str,
        width: u32,
        height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_region_display() {
        let err = ConfigError::MissingRegion("video_area");
        assert!(err.to_string().contains("video_area"));
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_empty_region_display() {
        let err = ConfigError::EmptyRegion {
            name: "quiz_area",
            width: 0,
            height: 40,
        };
        let display = err.to_string();
        assert!(display.contains("quiz_area"));
        assert!(display.contains("0x40"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("gone"));
    }
}
