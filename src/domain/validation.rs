use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotPositive { field: &'static str },
    MissingKey { key: &'static str },
    MissingRecipients,
    InvalidBaseUrl { input: String },
    DotSegment { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotPositive { field } => write!(f, "{field} must be a positive number"),
            Self::MissingKey { key } => write!(f, "missing required key: {key}"),
            Self::MissingRecipients => {
                write!(f, "recipients list must not be empty")
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
            Self::DotSegment { field } => write!(f, "{field} must not be `.` or `..`"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject a zero identifier.
pub(crate) fn positive(field: &'static str, value: u64) -> Result<u64, ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

/// Reject text that is empty after trimming. The original value is returned untouched.
pub(crate) fn non_empty<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Text placed into a URL path. Besides being non-empty it must not be a dot
/// segment, which URL parsing would resolve against the parent path.
pub(crate) fn path_segment<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let value = non_empty(field, value)?;
    if matches!(value, "." | "..") {
        return Err(ValidationError::DotSegment { field });
    }
    Ok(value)
}
