//! Fraud Detection Model — configuration core
//!
//! Configuration loading and schema validation for a tabular fraud
//! classification pipeline over the IEEE-CIS fraud dataset. A YAML
//! document describing column selections, imputation targets,
//! categorical encodings and hyperparameters is parsed and validated
//! into an immutable [`ValidatedConfig`] before any pipeline work
//! begins; a single validation pass reports every schema violation at
//! once.
//!
//! Data ingestion, feature-engineering transformers and model training
//! consume the validated records but live outside this crate.

pub mod config;
pub mod error;

pub use config::{
    create_and_validate_config, fetch_config_from_yaml, find_config_file, AppConfig, ModelConfig,
    RawConfig, ValidatedConfig,
};
pub use error::{ConfigError, FieldError, ValidationReport};
