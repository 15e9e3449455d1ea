use crate::core::HealthMetrics;
use crate::errors::{Result, VitalRiskError};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
    Yaml,
}

impl InputFormat {
    /// Pick a format from the file extension; JSON when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// TOML has no top-level arrays, so batches live under `[[assessments]]`.
#[derive(Deserialize)]
struct TomlBatch {
    assessments: Vec<HealthMetrics>,
}

/// Parse one record or a batch of records.
///
/// A top-level JSON/YAML array, or a TOML `[[assessments]]` array, yields a
/// batch; anything else is decoded as a single record.
pub fn parse_metrics(
    contents: &str,
    format: InputFormat,
    origin: &str,
) -> Result<Vec<HealthMetrics>> {
    match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(contents).map_err(|e| VitalRiskError::parse(origin, e))?;
            if value.is_array() {
                serde_json::from_value(value).map_err(|e| VitalRiskError::parse(origin, e))
            } else {
                serde_json::from_value(value)
                    .map(|metrics| vec![metrics])
                    .map_err(|e| VitalRiskError::parse(origin, e))
            }
        }
        InputFormat::Toml => {
            let table: toml::Table =
                toml::from_str(contents).map_err(|e| VitalRiskError::parse(origin, e))?;
            if table.contains_key("assessments") {
                toml::from_str::<TomlBatch>(contents)
                    .map(|batch| batch.assessments)
                    .map_err(|e| VitalRiskError::parse(origin, e))
            } else {
                toml::from_str::<HealthMetrics>(contents)
                    .map(|metrics| vec![metrics])
                    .map_err(|e| VitalRiskError::parse(origin, e))
            }
        }
        InputFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(contents).map_err(|e| VitalRiskError::parse(origin, e))?;
            if value.is_sequence() {
                serde_yaml::from_value(value).map_err(|e| VitalRiskError::parse(origin, e))
            } else {
                serde_yaml::from_value(value)
                    .map(|metrics| vec![metrics])
                    .map_err(|e| VitalRiskError::parse(origin, e))
            }
        }
    }
}

/// Load records from a file, or JSON from stdin when the path is `-`.
pub fn load_metrics(path: &Path) -> Result<Vec<HealthMetrics>> {
    if path.as_os_str() == STDIN_PATH {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| VitalRiskError::io(path, e))?;
        log::debug!("Read {} bytes of metrics from stdin", contents.len());
        let records = parse_metrics(&contents, InputFormat::Json, "stdin")?;
        return require_records(records, "stdin");
    }

    let contents = fs::read_to_string(path).map_err(|e| VitalRiskError::io(path, e))?;
    let format = InputFormat::from_path(path);
    log::debug!("Loading metrics from {} as {:?}", path.display(), format);

    let origin = path.display().to_string();
    let records = parse_metrics(&contents, format, &origin)?;
    require_records(records, &origin)
}

fn require_records(records: Vec<HealthMetrics>, origin: &str) -> Result<Vec<HealthMetrics>> {
    if records.is_empty() {
        return Err(VitalRiskError::parse(origin, "no assessment records found"));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.toml")), InputFormat::Toml);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(&PathBuf::from("noext")), InputFormat::Json);
    }

    #[test]
    fn json_object_is_single_record() {
        let records =
            parse_metrics(r#"{"age": 61, "familyHistory": true}"#, InputFormat::Json, "t")
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, 61.0);
        assert!(records[0].family_history);
    }

    #[test]
    fn json_array_is_batch() {
        let records =
            parse_metrics(r#"[{"age": 20}, {"age": 70}]"#, InputFormat::Json, "t").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].age, 70.0);
    }

    #[test]
    fn toml_batch_uses_assessments_table_array() {
        let contents = indoc! {r#"
            [[assessments]]
            age = 44
            bmi = 27.5

            [[assessments]]
            age = 30
            sleepHours = 6
        "#};
        let records = parse_metrics(contents, InputFormat::Toml, "t").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bmi, 27.5);
        assert_eq!(records[1].sleep_hours, 6.0);
    }

    #[test]
    fn yaml_single_record() {
        let contents = indoc! {"
            age: 58
            bloodPressure: 135
            familyHistory: false
        "};
        let records = parse_metrics(contents, InputFormat::Yaml, "t").unwrap();
        assert_eq!(records[0].blood_pressure, 135.0);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = parse_metrics(r#"{"bloodpressure": 150}"#, InputFormat::Json, "form.json")
            .unwrap_err();
        assert!(matches!(err, VitalRiskError::Parse { .. }));
        assert!(err.to_string().contains("form.json"));
    }
}
