use crate::utils::error::{EtlError, Result};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl Display, reason: impl Into<String>) -> EtlError {
    EtlError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts absolute http(s) URLs only.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_at_least<T: PartialOrd + Display>(field_name: &str, value: T, min: T) -> Result<()> {
    if value < min {
        let reason = format!("Value must be at least {}", min);
        return Err(invalid(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.base_url", "https://openlibrary.org").is_ok());
        assert!(validate_url("source.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("source.base_url", "").is_err());
        assert!(validate_url("source.base_url", "openlibrary.org").is_err());
        assert!(validate_url("source.base_url", "ftp://openlibrary.org").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "books.json").is_ok());
        assert!(validate_path("load.output_path", "").is_err());
        assert!(validate_path("load.output_path", "bo\0oks.json").is_err());
    }

    #[test]
    fn test_validate_at_least() {
        assert!(validate_at_least("source.limit", 25usize, 1).is_ok());
        assert!(validate_at_least("source.timeout_seconds", 30u64, 1).is_ok());

        let err = validate_at_least("source.limit", 0usize, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for 'source.limit': Value must be at least 1"
        );
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("subjects[0]", "fantasy").is_ok());
        assert!(validate_non_empty_string("subjects[0]", "   ").is_err());
    }
}
