//! Schema validation over the untyped YAML document.
//!
//! Deserializing straight into the typed records would stop at the
//! first bad field, so extraction is explicit: every field is checked
//! in one pass and all violations are collected into a single
//! [`ValidationReport`] before anything is returned to the caller.

use crate::config::schema::{AppConfig, ModelConfig, ValidatedConfig};
use crate::config::RawConfig;
use crate::error::{ConfigError, ValidationReport};
use serde_yaml::Value;
use std::collections::HashMap;
use tracing::debug;

const REQUIRED: &str = "field required";

/// Construct the typed records from a parsed YAML document.
///
/// Fails with [`ConfigError::Validation`] carrying one entry per
/// missing or mistyped field; succeeds only when every required field
/// is present and well typed.
pub fn create_and_validate_config(raw: &RawConfig) -> Result<ValidatedConfig, ConfigError> {
    if raw.as_mapping().is_none() {
        let mut report = ValidationReport::new();
        report.push("(root)", "value is not a valid dict");
        return Err(ConfigError::Validation(report));
    }

    let mut fields = FieldReader::new(raw);

    let app_config = AppConfig {
        package_name: fields.string("package_name"),
        pipeline_name: fields.string("pipeline_name"),
        pipeline_save_file: fields.string("pipeline_save_file"),
        train_transaction: fields.string("train_transaction"),
        test_transaction: fields.string("test_transaction"),
        train_identity: fields.string("train_identity"),
        test_identity: fields.string("test_identity"),
        target: fields.string("target"),
        id: fields.string("id"),
        train_transaction_usecols: fields.string_list("train_transaction_usecols"),
        train_identity_usecols: fields.string_list("train_identity_usecols"),
        test_transaction_usecols: fields.string_list("test_transaction_usecols"),
        test_identity_usecols: fields.string_list("test_identity_usecols"),
        test_features_to_rename: fields.string_map("test_features_to_rename"),
        discrete_features: fields.string_list("discrete_features"),
        continuous_features: fields.string_list("continuous_features"),
        high_cardinality_cats: fields.string_list("high_cardinality_cats"),
        convert_to_category_codes: fields.string_list("convert_to_category_codes"),
        impute_most_freq_cols: fields.string_list("impute_most_freq_cols"),
        all_features: fields.string_list("all_features"),
    };

    let model_config = ModelConfig {
        random_state: fields.integer("random_state"),
        test_size: fields.float("test_size"),
        n_estimators: fields.positive_integer("n_estimators"),
        n_jobs: fields.integer("n_jobs"),
    };

    fields.finish()?;

    debug!(
        features = app_config.all_features.len(),
        n_estimators = model_config.n_estimators,
        "configuration validated"
    );

    Ok(ValidatedConfig {
        app_config,
        model_config,
    })
}

/// Field-by-field extractor over the untyped document.
///
/// Each accessor records any violation in the shared report and hands
/// back a placeholder default, so extraction always runs to completion;
/// [`FieldReader::finish`] decides whether the constructed records are
/// kept or the report is surfaced instead.
struct FieldReader<'a> {
    doc: &'a Value,
    report: ValidationReport,
}

impl<'a> FieldReader<'a> {
    fn new(doc: &'a Value) -> Self {
        Self {
            doc,
            report: ValidationReport::new(),
        }
    }

    /// Required non-empty string field.
    fn string(&mut self, key: &str) -> String {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return String::new();
        };
        let Some(text) = value.as_str() else {
            self.report.push(key, "str type expected");
            return String::new();
        };
        if text.is_empty() {
            self.report.push(key, "value must not be empty");
        }
        text.to_owned()
    }

    /// Required sequence of strings; source order and multiplicity are
    /// kept as-is.
    fn string_list(&mut self, key: &str) -> Vec<String> {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return Vec::new();
        };
        let Some(items) = value.as_sequence() else {
            self.report.push(key, "value is not a valid list");
            return Vec::new();
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(text) => out.push(text.to_owned()),
                None => self.report.push(format!("{key}[{index}]"), "str type expected"),
            }
        }
        out
    }

    /// Required mapping of string keys to string values.
    fn string_map(&mut self, key: &str) -> HashMap<String, String> {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return HashMap::new();
        };
        let Some(entries) = value.as_mapping() else {
            self.report.push(key, "value is not a valid dict");
            return HashMap::new();
        };
        let mut out = HashMap::with_capacity(entries.len());
        for (entry_key, entry_value) in entries {
            let Some(old_name) = entry_key.as_str() else {
                self.report.push(key, "mapping keys must be strings");
                continue;
            };
            match entry_value.as_str() {
                Some(new_name) => {
                    out.insert(old_name.to_owned(), new_name.to_owned());
                }
                None => self
                    .report
                    .push(format!("{key}.{old_name}"), "str type expected"),
            }
        }
        out
    }

    /// Required integer field.
    fn integer(&mut self, key: &str) -> i64 {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return 0;
        };
        match value.as_i64() {
            Some(number) => number,
            None => {
                self.report.push(key, "value is not a valid integer");
                0
            }
        }
    }

    /// Required strictly positive integer field.
    fn positive_integer(&mut self, key: &str) -> u32 {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return 0;
        };
        let Some(number) = value.as_i64() else {
            self.report.push(key, "value is not a valid integer");
            return 0;
        };
        if number <= 0 {
            self.report.push(key, "ensure this value is greater than 0");
            return 0;
        }
        match u32::try_from(number) {
            Ok(number) => number,
            Err(_) => {
                self.report.push(key, "value out of range for a 32-bit integer");
                0
            }
        }
    }

    /// Required float field; YAML integers are valid floats, anything
    /// else (including booleans) is a type mismatch.
    fn float(&mut self, key: &str) -> f64 {
        let Some(value) = self.doc.get(key) else {
            self.report.push(key, REQUIRED);
            return 0.0;
        };
        match value.as_f64() {
            Some(number) => number,
            None => {
                self.report.push(key, "value is not a valid float");
                0.0
            }
        }
    }

    /// Resolve the pass; `Err` carries every violation found above.
    fn finish(self) -> Result<(), ConfigError> {
        self.report.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    fn report_for(text: &str) -> ValidationReport {
        match create_and_validate_config(&doc(text)) {
            Err(ConfigError::Validation(report)) => report,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let report = report_for("just a scalar");
        assert_eq!(report.errors()[0].path, "(root)");
        assert_eq!(report.errors()[0].reason, "value is not a valid dict");
    }

    #[test]
    fn test_every_missing_field_reported_at_once() {
        let report = report_for("package_name: fraud_detection_model");
        // 23 required fields remain absent
        assert_eq!(report.len(), 23);
        let rendered = report.to_string();
        assert!(rendered.contains("pipeline_name: field required"));
        assert!(rendered.contains("n_jobs: field required"));
        assert!(rendered.contains("all_features: field required"));
    }

    #[test]
    fn test_integer_scalar_satisfies_float_field() {
        let value = doc("test_size: 1");
        let mut reader = FieldReader::new(&value);
        assert_eq!(reader.float("test_size"), 1.0);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_string_rejected_for_float_field() {
        let value = doc("test_size: a");
        let mut reader = FieldReader::new(&value);
        reader.float("test_size");
        let report = match reader.finish() {
            Err(ConfigError::Validation(report)) => report,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(report.errors()[0].path, "test_size");
        assert_eq!(report.errors()[0].reason, "value is not a valid float");
    }

    #[test]
    fn test_float_rejected_for_integer_field() {
        let value = doc("random_state: 25.5");
        let mut reader = FieldReader::new(&value);
        reader.integer("random_state");
        assert!(reader.finish().is_err());
    }

    #[test]
    fn test_bool_rejected_for_float_field() {
        let value = doc("test_size: true");
        let mut reader = FieldReader::new(&value);
        reader.float("test_size");
        assert!(reader.finish().is_err());
    }

    #[test]
    fn test_empty_string_rejected() {
        let value = doc("target: \"\"");
        let mut reader = FieldReader::new(&value);
        reader.string("target");
        let report = match reader.finish() {
            Err(ConfigError::Validation(report)) => report,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(report.errors()[0].path, "target");
        assert_eq!(report.errors()[0].reason, "value must not be empty");
    }

    #[test]
    fn test_non_positive_estimator_count_rejected() {
        let value = doc("n_estimators: 0");
        let mut reader = FieldReader::new(&value);
        reader.positive_integer("n_estimators");
        let report = match reader.finish() {
            Err(ConfigError::Validation(report)) => report,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(
            report.errors()[0].reason,
            "ensure this value is greater than 0"
        );
    }

    #[test]
    fn test_list_with_non_string_element_names_the_element() {
        let value = doc("discrete_features: [V13, 7, V15]");
        let mut reader = FieldReader::new(&value);
        reader.string_list("discrete_features");
        let report = match reader.finish() {
            Err(ConfigError::Validation(report)) => report,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(report.errors()[0].path, "discrete_features[1]");
    }

    #[test]
    fn test_rename_map_extracted_as_string_pairs() {
        let value = doc("test_features_to_rename:\n  id-08: id_08\n  id-13: id_13");
        let mut reader = FieldReader::new(&value);
        let map = reader.string_map("test_features_to_rename");
        assert!(reader.finish().is_ok());
        assert_eq!(map.get("id-08").map(String::as_str), Some("id_08"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_list_order_and_multiplicity_preserved() {
        let value = doc("discrete_features: [V28, V13, V28]");
        let mut reader = FieldReader::new(&value);
        let list = reader.string_list("discrete_features");
        assert!(reader.finish().is_ok());
        assert_eq!(list, ["V28", "V13", "V28"]);
    }
}
