use crate::input::ValidationPolicy;
use serde::{Deserialize, Serialize};

/// Root configuration structure for vitalrisk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VitalRiskConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Input range validation
    #[serde(default)]
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `json`, `markdown`, `terminal`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationConfig {
    /// Refuse to score records with out-of-range metrics
    #[serde(default)]
    pub strict: bool,
}

impl VitalRiskConfig {
    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref()?.use_color
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        match &self.validation {
            Some(validation) if validation.strict => ValidationPolicy::Strict,
            _ => ValidationPolicy::Warn,
        }
    }
}
