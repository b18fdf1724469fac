use crate::utils::error::{PlannerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::validation(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(PlannerError::validation(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_count(field_name: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(PlannerError::validation(
            field_name,
            value,
            "Count cannot be negative",
        ));
    }
    u32::try_from(value)
        .map_err(|_| PlannerError::validation(field_name, value, "Count is too large"))
}

/// Counts arrive from form widgets as text (`"0"`, `" 2 "`).
pub fn parse_count(field_name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        PlannerError::validation(field_name, raw, "Count must be a whole number")
    })?;
    validate_count(field_name, value)
}

pub fn validate_positive_area(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlannerError::validation(
            field_name,
            value,
            "Area must be a finite number greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::validation(
            field_name,
            value,
            "Value must be a finite, non-negative number",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
