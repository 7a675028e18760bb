use thiserror::Error;

/// Closed taxonomy of user-facing failure categories.
///
/// Transient by design: classified errors terminate the current analyze cycle
/// and are shown to the user, but are never persisted and never retried
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifiedError {
    /// Empty input, caught before any network call.
    #[error("no text to analyze")]
    Validation,

    /// HTTP 4xx — the request itself was rejected.
    #[error("request rejected (HTTP {status}): {message}")]
    ClientRequest { status: u16, message: String },

    /// HTTP 5xx — the service is having problems.
    #[error("server failure (HTTP {status})")]
    ServerFailure { status: u16 },

    /// No response obtainable at all (connect/DNS level).
    #[error("prediction service unreachable")]
    NetworkUnreachable,

    /// Anything that fits no other bucket.
    #[error("unexpected prediction failure")]
    Unknown,
}

impl ClassifiedError {
    /// Message shown to the user for this failure.
    ///
    /// 4xx messages other than plain 400 surface the service-supplied detail
    /// verbatim; every other variant maps to fixed retry guidance.
    pub fn user_message(&self) -> String {
        match self {
            ClassifiedError::Validation => "Please enter some text to analyze.".to_string(),
            ClassifiedError::ClientRequest { status: 400, .. } => {
                "The text provided is invalid. Please try again with a different message."
                    .to_string()
            }
            ClassifiedError::ClientRequest { message, .. } => message.clone(),
            ClassifiedError::ServerFailure { .. } => {
                "The server is experiencing issues. Please try again in a moment.".to_string()
            }
            ClassifiedError::NetworkUnreachable => {
                "Unable to connect to the server. Make sure the API is running on localhost:8000."
                    .to_string()
            }
            ClassifiedError::Unknown => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    /// Whether the whole service is unreachable (drives the separate
    /// connection alert channel, not just the inline error).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClassifiedError::NetworkUnreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_invalid_text_guidance() {
        let err = ClassifiedError::ClientRequest {
            status: 400,
            message: "Text must not be empty.".to_string(),
        };
        assert!(err.user_message().contains("text provided is invalid"));
    }

    #[test]
    fn other_client_errors_surface_service_detail_verbatim() {
        let err = ClassifiedError::ClientRequest {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.user_message(), "Not Found");
    }

    #[test]
    fn server_failure_suggests_retry() {
        let err = ClassifiedError::ServerFailure { status: 503 };
        assert!(err.user_message().contains("try again in a moment"));
    }

    #[test]
    fn only_unreachable_raises_the_alert_channel() {
        assert!(ClassifiedError::NetworkUnreachable.is_unreachable());
        assert!(!ClassifiedError::Unknown.is_unreachable());
        assert!(!ClassifiedError::ServerFailure { status: 500 }.is_unreachable());
    }
}
