use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_remote_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A catalog location is either an http(s) URL or a filesystem path.
pub fn validate_source_location(field_name: &str, location: &str) -> Result<()> {
    if is_remote_location(location) {
        validate_url(field_name, location)
    } else {
        validate_path(field_name, location)
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if !seen.insert(name.as_str()) {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Category listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog.source", "https://example.com/data.json").is_ok());
        assert!(validate_url("catalog.source", "http://example.com").is_ok());
        assert!(validate_url("catalog.source", "").is_err());
        assert!(validate_url("catalog.source", "invalid-url").is_err());
        assert!(validate_url("catalog.source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_source_location() {
        assert!(validate_source_location("source", "product_data_final.json").is_ok());
        assert!(validate_source_location("source", "https://cdn.example.com/x.json").is_ok());
        assert!(validate_source_location("source", "https://").is_err());
        assert!(validate_source_location("source", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("catalog.timeout_seconds", 5u64, 1).is_ok());
        assert!(validate_positive_number("catalog.timeout_seconds", 0u64, 1).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        let names = vec!["Compute".to_string(), "Storage".to_string()];
        assert!(validate_unique_names("grouping.priority", &names).is_ok());

        let dup = vec!["Compute".to_string(), "Compute".to_string()];
        assert!(validate_unique_names("grouping.priority", &dup).is_err());

        let blank = vec!["".to_string()];
        assert!(validate_unique_names("grouping.priority", &blank).is_err());
    }
}
