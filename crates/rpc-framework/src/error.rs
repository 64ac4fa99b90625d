//! # Collaborator Errors
//!
//! Every failure that crosses a collaborator boundary becomes an [`RpcError`] carrying
//! the collaborator's name, so callers can tell *which* service failed without parsing
//! messages.

use tonic::{Code, Status};

/// Errors raised while talking to a downstream collaborator.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The configured address could not be turned into an endpoint.
    #[error("invalid address {address:?} for {service} service: {message}")]
    InvalidAddress {
        service: &'static str,
        address: String,
        message: String,
    },

    /// No connection could be established, or the collaborator reported itself unavailable.
    #[error("could not reach {service} service: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    /// The collaborator answered the call with an application error.
    #[error("{service} service rejected the call ({code:?}): {message}")]
    Rejected {
        service: &'static str,
        code: Code,
        message: String,
    },

    /// The call was cancelled before the collaborator answered.
    #[error("call to {service} service was cancelled")]
    Cancelled { service: &'static str },

    /// The collaborator answered, but a required field was missing or out of range.
    #[error("{service} service returned a response with a missing or invalid `{field}`")]
    MalformedResponse {
        service: &'static str,
        field: &'static str,
    },
}

impl RpcError {
    /// Classifies a `tonic` status returned by `service`.
    pub fn from_status(service: &'static str, status: Status) -> Self {
        match status.code() {
            Code::Unavailable => RpcError::Unavailable {
                service,
                message: status.message().to_string(),
            },
            Code::Cancelled => RpcError::Cancelled { service },
            code => RpcError::Rejected {
                service,
                code,
                message: status.message().to_string(),
            },
        }
    }

    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        RpcError::Unavailable {
            service,
            message: message.into(),
        }
    }

    pub fn rejected(service: &'static str, code: Code, message: impl Into<String>) -> Self {
        RpcError::Rejected {
            service,
            code,
            message: message.into(),
        }
    }

    /// Name of the collaborator this error came from.
    pub fn service(&self) -> &'static str {
        match self {
            RpcError::InvalidAddress { service, .. }
            | RpcError::Unavailable { service, .. }
            | RpcError::Rejected { service, .. }
            | RpcError::Cancelled { service }
            | RpcError::MalformedResponse { service, .. } => service,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RpcError::Unavailable { .. })
    }
}
