//! Evaluator settings: board dimension and winning line length.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Immutable evaluation settings.
///
/// The signed line accumulator only detects lines that span the whole
/// board, so `line_length` must equal `dimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "SettingsFile")]
pub struct EvaluatorSettings {
    /// Rows and columns on the board.
    dimension: usize,

    /// Marks in a row needed to complete a line.
    line_length: usize,
}

/// On-disk form; absent keys fall back to the classic board.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    dimension: Option<usize>,
    line_length: Option<usize>,
}

impl TryFrom<SettingsFile> for EvaluatorSettings {
    type Error = ConfigError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        let dimension = file.dimension.unwrap_or(Self::CLASSIC_DIMENSION);
        let settings = Self {
            dimension,
            line_length: file.line_length.unwrap_or(dimension),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl EvaluatorSettings {
    /// Dimension of the standard tic-tac-toe board.
    pub const CLASSIC_DIMENSION: usize = 3;

    /// Creates settings for a square board whose lines span the full width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimension is zero or too large.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        let settings = Self {
            dimension,
            line_length: dimension,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parses settings from a TOML document.
    ///
    /// ```
    /// use strictly_verdict::EvaluatorSettings;
    ///
    /// let settings = EvaluatorSettings::from_toml_str("dimension = 4").unwrap();
    /// assert_eq!(*settings.line_length(), 4);
    /// ```
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        debug!(dimension = settings.dimension, "Settings parsed");
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml_str(&content)?;
        info!(
            dimension = settings.dimension,
            line_length = settings.line_length,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Checks that the settings describe a board the evaluator can score.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::new("dimension must be at least 1".to_string()));
        }
        if i64::try_from(self.dimension).is_err()
            || self.dimension.checked_mul(self.dimension).is_none()
        {
            return Err(ConfigError::new(format!(
                "dimension {} is too large",
                self.dimension
            )));
        }
        if self.line_length != self.dimension {
            return Err(ConfigError::new(format!(
                "line_length {} must equal dimension {}",
                self.line_length, self.dimension
            )));
        }
        Ok(())
    }

    /// Number of cells on a full board.
    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            dimension: Self::CLASSIC_DIMENSION,
            line_length: Self::CLASSIC_DIMENSION,
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let settings = EvaluatorSettings::default();
        assert_eq!(*settings.dimension(), 3);
        assert_eq!(*settings.line_length(), 3);
        assert_eq!(settings.cell_count(), 9);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = EvaluatorSettings::new(0).unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = EvaluatorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EvaluatorSettings::default());
    }

    #[test]
    fn test_short_line_rejected() {
        let err = EvaluatorSettings::from_toml_str("dimension = 4\nline_length = 3").unwrap_err();
        assert!(err.message.contains("must equal dimension"));
    }

    #[test]
    fn test_dimension_with_overflowing_cell_count_rejected() {
        let err = EvaluatorSettings::from_toml_str("dimension = 5000000000").unwrap_err();
        assert!(err.message.contains("too large"));
        assert!(EvaluatorSettings::new(usize::MAX).is_err());
    }

    #[test]
    fn test_largest_square_dimension_accepted() {
        let dimension = (usize::MAX as f64).sqrt() as usize / 2;
        let settings = EvaluatorSettings::new(dimension).unwrap();
        assert_eq!(settings.cell_count(), dimension * dimension);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(EvaluatorSettings::from_toml_str("players = 3").is_err());
    }
}
