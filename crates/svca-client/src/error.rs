//! Error types for the quick test client.

use std::fmt;

use tonic::Status;

/// Main error type for remote calls and console I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Channel could not be built or connected.
    Transport { context: String, reason: String },
    /// The service answered with a non-OK gRPC status.
    Rpc { code: tonic::Code, message: String },
    /// Reading the console or writing results failed.
    Io { context: String, reason: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { context, reason } => {
                write!(f, "Transport error in {context}: {reason}")
            }
            ClientError::Rpc { code, message } => {
                write!(f, "RPC failed with status {code:?}: {message}")
            }
            ClientError::Io { context, reason } => {
                write!(f, "I/O error in {context}: {reason}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. }
                | ClientError::Rpc {
                    code: tonic::Code::Unavailable,
                    ..
                }
        )
    }

    pub fn from_transport_error(e: impl fmt::Display, context: &str) -> Self {
        ClientError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_io_error(e: std::io::Error, context: &str) -> Self {
        ClientError::Io {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }
}

impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        status_to_client_error(status)
    }
}

/// Convert a tonic Status to a ClientError.
pub fn status_to_client_error(status: Status) -> ClientError {
    ClientError::Rpc {
        code: status.code(),
        message: status.message().to_string(),
    }
}
