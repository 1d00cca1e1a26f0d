use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// One canonical job category and the lower-cased keywords that map to it.
/// Rules are checked in order; within a rule, first keyword hit wins.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Configuration for the cleaning pipeline. The keyword vocabularies are data,
/// not logic: every list here can be overridden from a TOML file without
/// touching transform code.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Ordered canonical-title taxonomy.
    pub categories: Vec<CategoryRule>,
    /// A record survives only if its original title contains one of these.
    pub allow_keywords: Vec<String>,
    /// A record is dropped if its original title contains any of these.
    pub deny_keywords: Vec<String>,
    /// Vague region labels that are not real cities.
    pub excluded_cities: Vec<String>,
    /// Drop records whose description is empty after sanitization.
    pub require_description: bool,
    /// Drop records whose link lacks an http(s) scheme prefix.
    pub require_link_scheme: bool,
    /// Apply the excluded_cities gate.
    pub exclude_vague_cities: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        let category = |label: &str, keywords: &[&str]| CategoryRule {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self {
            categories: vec![
                category("Data Scientist", &["data scientist"]),
                category("Data Analyst", &["business data analyst", "data analyst"]),
                category("Data Engineer", &["data engineer"]),
                category("Business Analyst", &["business analyst"]),
                category("BI Analyst", &["bi analyst"]),
            ],
            allow_keywords: [
                "data analyst",
                "data engineer",
                "business analyst",
                "data scientist",
                "bi analyst",
                "etl",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            deny_keywords: [
                "marketing",
                "sales",
                "social media",
                "customer",
                "support",
                "recruiter",
                "driver",
                "retail",
                "manager",
                "pivot",
                "transition",
                "consider",
                "launch",
                "career change",
                "thinking about",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            excluded_cities: [
                "Canada",
                "USA",
                "United States",
                "United Kingdom",
                "India",
                "Remote",
                "Unknown",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            require_description: true,
            require_link_scheme: true,
            exclude_vague_cities: true,
        }
    }
}

impl CleanConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// built-in vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: CleanConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
