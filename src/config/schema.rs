//! Typed configuration records for the fraud detection pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Application-level settings: source files, column selections, and the
/// feature-category lists consumed by the feature-engineering stage.
///
/// List fields keep the exact order and multiplicity of the source YAML
/// sequences; nothing is deduplicated or sorted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Package the pipeline belongs to
    pub package_name: String,
    /// Name the fitted pipeline is registered under
    pub pipeline_name: String,
    /// Filename prefix for persisted pipeline artifacts
    pub pipeline_save_file: String,
    /// Training-split transaction table filename
    pub train_transaction: String,
    /// Test-split transaction table filename
    pub test_transaction: String,
    /// Training-split identity table filename
    pub train_identity: String,
    /// Test-split identity table filename
    pub test_identity: String,
    /// Target column (label) name
    pub target: String,
    /// Row identifier column name
    pub id: String,
    /// Columns read from the training transaction table
    pub train_transaction_usecols: Vec<String>,
    /// Columns read from the training identity table
    pub train_identity_usecols: Vec<String>,
    /// Columns read from the test transaction table
    pub test_transaction_usecols: Vec<String>,
    /// Columns read from the test identity table
    pub test_identity_usecols: Vec<String>,
    /// Old-name to new-name map normalizing hyphenated identity columns
    /// (e.g. `id-08` to `id_08`) in the test split
    pub test_features_to_rename: HashMap<String, String>,
    /// Discrete (integer-valued) features
    pub discrete_features: Vec<String>,
    /// Continuous features
    pub continuous_features: Vec<String>,
    /// Categorical features with many distinct values, flagged for
    /// special encoding treatment
    pub high_cardinality_cats: Vec<String>,
    /// Categorical features encoded as integer category codes
    pub convert_to_category_codes: Vec<String>,
    /// Columns imputed with their most frequent observed value
    pub impute_most_freq_cols: Vec<String>,
    /// Every feature fed to the model, in model input order
    pub all_features: Vec<String>,
}

/// Model-level hyperparameters handed to the training stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Random seed for reproducibility
    pub random_state: i64,
    /// Test-set fraction for the train/test split. Only the type is
    /// validated; bounds are left to the training stage.
    pub test_size: f64,
    /// Number of estimators in the ensemble
    pub n_estimators: u32,
    /// Parallelism directive, -1 meaning all available cores
    pub n_jobs: i64,
}

/// The validated configuration: one [`AppConfig`] and one
/// [`ModelConfig`], immutable once constructed and safe to share
/// across any number of readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedConfig {
    pub app_config: AppConfig,
    pub model_config: ModelConfig,
}
