use crate::utils::error::{AppError, FieldError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Result of checking one field; schema code collects these instead of
/// returning on the first failure.
pub type FieldResult = std::result::Result<(), FieldError>;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").ok()
        })
        .as_ref()
}

/// Character-count bounds, inclusive on both ends.
pub fn validate_length(
    field_name: &str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> FieldResult {
    let len = value.chars().count();
    if len < min {
        return Err(FieldError::new(
            field_name,
            format!("{} must be at least {} characters", label, min),
        ));
    }
    if len > max {
        return Err(FieldError::new(
            field_name,
            format!("{} must be at most {} characters", label, max),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> FieldResult {
    let local_ok = !value.starts_with('.') && !value.contains("..");
    let matches = email_regex().is_some_and(|re| re.is_match(value));

    if local_ok && matches {
        Ok(())
    } else {
        Err(FieldError::new(field_name, "Please enter a valid email address"))
    }
}

pub fn validate_non_empty_field(field_name: &str, value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number<T>(field_name: &str, value: T, min_value: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(AppError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}
