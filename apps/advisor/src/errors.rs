use thiserror::Error;

/// Library-level error type.
/// Every variant is a local, synchronous failure reported to the immediate caller.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Unknown role: '{0}'. Pick one of the roles listed by the catalog")]
    UnknownRole(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed profile: {0}")]
    MalformedProfile(#[from] serde_json::Error),

    #[error("Profile I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdvisorError {
    /// Short machine-readable code, used when logging failures from the menu.
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::UnknownRole(_) => "UNKNOWN_ROLE",
            AdvisorError::Validation(_) => "VALIDATION_ERROR",
            AdvisorError::MalformedProfile(_) => "MALFORMED_PROFILE",
            AdvisorError::Io(_) => "IO_ERROR",
        }
    }
}
