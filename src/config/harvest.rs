use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_LIMIT: usize = 25;
pub const DEFAULT_SUBJECTS_PATH: &str = "../utils/definedSubjects.json";
pub const DEFAULT_OUTPUT_PATH: &str = "books.json";

/// How a non-2xx response for a subject is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpErrorPolicy {
    /// Abort the run with an error naming the subject and status.
    #[default]
    Fail,
    /// Log the status and try to decode the body anyway.
    Lenient,
}

impl HttpErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpErrorPolicy::Fail => "fail",
            HttpErrorPolicy::Lenient => "lenient",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvestConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub subjects: SubjectsConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub error_handling: ErrorHandlingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub limit: usize,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectsConfig {
    pub path: String,
}

impl Default for SubjectsConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SUBJECTS_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub output_path: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorHandlingConfig {
    pub on_http_error: HttpErrorPolicy,
}

impl HarvestConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
                message: format!(
                    "cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENLIBRARY_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// URL of the subject query, e.g. `https://openlibrary.org/subjects/fantasy.json?limit=25`.
    pub fn subject_url(&self, subject: &str) -> String {
        format!(
            "{}/subjects/{}.json?limit={}",
            self.source.base_url.trim_end_matches('/'),
            subject,
            self.source.limit
        )
    }

    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    pub fn subjects_path(&self) -> &str {
        &self.subjects.path
    }

    pub fn http_error_policy(&self) -> HttpErrorPolicy {
        self.error_handling.on_http_error
    }
}

impl Validate for HarvestConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_at_least("source.limit", self.source.limit, 1)?;
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_at_least("source.timeout_seconds", timeout, 1)?;
        }
        validation::validate_path("subjects.path", &self.subjects.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        Ok(())
    }
}
