use crate::utils::error::{EtlError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::path::Path;

/// Ordered, immutable list of subject identifiers for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectList {
    subjects: Vec<String>,
}

impl SubjectList {
    /// Reads a JSON array of strings. A missing file, invalid JSON, a non-array
    /// document or an empty entry is an error; no fallback list is used.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content =
            std::fs::read_to_string(&path).map_err(|e| EtlError::SubjectListError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::from_json_str(&content).map_err(|e| match e {
            EtlError::SubjectListError { message, .. } => EtlError::SubjectListError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let subjects: Vec<String> =
            serde_json::from_str(content).map_err(|e| EtlError::SubjectListError {
                path: "<inline>".to_string(),
                message: format!("expected a JSON array of strings: {}", e),
            })?;

        for (index, subject) in subjects.iter().enumerate() {
            validate_non_empty_string(&format!("subjects[{}]", index), subject).map_err(|e| {
                EtlError::SubjectListError {
                    path: "<inline>".to_string(),
                    message: e.to_string(),
                }
            })?;
        }

        tracing::debug!("Loaded {} subjects", subjects.len());
        Ok(Self { subjects })
    }

    pub fn new(subjects: Vec<String>) -> Self {
        Self { subjects }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
