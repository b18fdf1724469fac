use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown catalog key: {key}")]
    UnknownKeyError { key: String },

    #[error("Unknown amenity: {name}")]
    UnknownAmenityError { name: String },

    #[error("Configuration is incomplete: '{field}' is not set")]
    IncompleteConfigurationError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Catalog,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        PlannerError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::ValidationError { .. } | PlannerError::UnknownAmenityError { .. } => {
                ErrorCategory::Input
            }
            PlannerError::UnknownKeyError { .. } => ErrorCategory::Catalog,
            PlannerError::ConfigError { .. }
            | PlannerError::IncompleteConfigurationError { .. }
            | PlannerError::SerializationError(_) => ErrorCategory::Configuration,
            PlannerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::ValidationError { .. } => {
                "Use a non-negative count and one of the listed size tiers, kitchen types or finishes"
            }
            PlannerError::UnknownAmenityError { .. } => {
                "Pick an amenity that exists in the cost catalog"
            }
            PlannerError::UnknownKeyError { .. } => {
                "Add the missing room/tier combination or cost entry to the catalog file"
            }
            PlannerError::IncompleteConfigurationError { .. } => {
                "Set the missing field (for example the common-area finish) and retry"
            }
            PlannerError::ConfigError { .. } => "Check the TOML catalog file syntax and values",
            PlannerError::SerializationError(_) => {
                "Check that the JSON file matches the expected configuration or district shape"
            }
            PlannerError::IoError(_) => "Make sure the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::ValidationError { field, value, .. } => {
                format!("'{}' is not an accepted value for {}", value, field)
            }
            PlannerError::UnknownAmenityError { name } => {
                format!("'{}' is not an available amenity", name)
            }
            PlannerError::UnknownKeyError { key } => {
                format!("The catalog has no entry for {}", key)
            }
            PlannerError::IncompleteConfigurationError { field } => {
                format!("The configuration is missing {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = PlannerError::validation("bathroom.count", -1, "count must not be negative");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = PlannerError::UnknownKeyError {
            key: "wc/spacious".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = PlannerError::UnknownAmenityError {
            name: "sauna".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "'sauna' is not an available amenity");
    }
}
