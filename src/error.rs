//! Error types for configuration loading and validation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single schema violation, tied to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Path of the field within the document, e.g. `test_size` or
    /// `train_transaction_usecols[3]`.
    pub path: String,
    /// Human-readable reason, e.g. `field required`.
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Accumulator of schema violations from a single validation pass.
///
/// Validation never stops at the first problem; every missing or
/// mistyped field ends up in the same report so the whole document can
/// be fixed in one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for the given field path.
    pub fn push(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.into(),
            reason: reason.into(),
        });
    }

    /// Whether the pass found no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations recorded.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The recorded violations, in discovery order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Resolve the pass: `Ok` when clean, otherwise the report wrapped
    /// as a [`ConfigError::Validation`].
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} validation error{} for config",
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" }
        )?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}

/// Errors surfaced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file is missing or unreadable.
    #[error("failed to read config file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's text is not well-formed YAML.
    #[error("failed to parse config file as YAML")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but violates the schema; the report carries
    /// every violation found.
    #[error("{0}")]
    Validation(ValidationReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display_lists_every_violation() {
        let mut report = ValidationReport::new();
        report.push("pipeline_name", "field required");
        report.push("test_size", "value is not a valid float");

        let rendered = report.to_string();
        assert!(rendered.starts_with("2 validation errors"));
        assert!(rendered.contains("pipeline_name: field required"));
        assert!(rendered.contains("test_size: value is not a valid float"));
    }

    #[test]
    fn test_empty_report_resolves_ok() {
        assert!(ValidationReport::new().into_result().is_ok());
    }

    #[test]
    fn test_non_empty_report_resolves_to_validation_error() {
        let mut report = ValidationReport::new();
        report.push("target", "field required");
        match report.into_result() {
            Err(ConfigError::Validation(r)) => assert_eq!(r.len(), 1),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
