use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static ELEMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("element id pattern"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 元素 id 會直接組成 `#id` 選擇器，只接受單純的識別字
pub fn validate_element_id(field_name: &str, id: &str) -> Result<()> {
    if !ELEMENT_ID.is_match(id) {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Element ids must start with a letter and contain only letters, digits, '-' or '_'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 與任何值比較皆為 false，不會落在區間內
    let in_range = value >= min && value <= max;
    if !in_range {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 區間下限不可大於上限
pub fn validate_ordered_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    range: (T, T),
) -> Result<()> {
    let ordered = range.0 <= range.1;
    if !ordered {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", range.0, range.1),
            reason: "Range start must not exceed range end".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("feed.api_base", "https://api.github.com").is_ok());
        assert!(validate_url("feed.api_base", "http://localhost:8080").is_ok());
        assert!(validate_url("feed.api_base", "").is_err());
        assert!(validate_url("feed.api_base", "invalid-url").is_err());
        assert!(validate_url("feed.api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("particles.count", 5, 1).is_ok());
        assert!(validate_positive_number("particles.count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_element_id() {
        assert!(validate_element_id("page.container_id", "projects-grid").is_ok());
        assert!(validate_element_id("page.container_id", "stars_count").is_ok());
        assert!(validate_element_id("page.container_id", "").is_err());
        assert!(validate_element_id("page.container_id", "1grid").is_err());
        assert!(validate_element_id("page.container_id", "grid > p").is_err());
    }

    #[test]
    fn test_validate_ordered_range() {
        assert!(validate_ordered_range("particles.radius", (1.0, 3.0)).is_ok());
        assert!(validate_ordered_range("particles.radius", (2.0, 2.0)).is_ok());
        assert!(validate_ordered_range("particles.radius", (3.0, 1.0)).is_err());
        assert!(validate_ordered_range("particles.radius", (f64::NAN, 3.0)).is_err());
    }

    #[test]
    fn test_validate_range_rejects_non_finite() {
        assert!(validate_range("particles.max_speed", 0.5, 0.0, 100.0).is_ok());
        assert!(validate_range("particles.max_speed", f64::NAN, 0.0, 100.0).is_err());
        assert!(validate_range("particles.max_speed", f64::INFINITY, 0.0, 100.0).is_err());
        assert!(validate_range("feed.per_page", 101, 1, 100).is_err());
    }
}
