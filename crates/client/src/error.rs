//! Error types for holical-client.

use std::path::PathBuf;

/// Error type for all fallible operations in the holical-client crate.
///
/// HTTP status failures are not errors here: they are reported as
/// [`FetchOutcome::HttpError`](crate::FetchOutcome::HttpError) so the
/// caller can tell a rejected request from a broken one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Returned when a country code is not in the supported country table.
    #[error("unknown country code: {code:?}")]
    UnknownCountry {
        /// The code that was looked up.
        code: String,
    },

    /// Returned when the request could not be sent or the connection failed.
    #[error("transport error: {reason}")]
    Transport {
        /// Description of the underlying network failure.
        reason: String,
    },

    /// Returned when the response body is not a JSON array of holidays.
    #[error("decode error: {reason}")]
    Decode {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a local holiday file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_country() {
        let err = ClientError::UnknownCountry {
            code: "XX".to_string(),
        };
        assert_eq!(err.to_string(), "unknown country code: \"XX\"");
    }

    #[test]
    fn display_transport() {
        let err = ClientError::Transport {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn display_read() {
        let err = ClientError::Read {
            path: PathBuf::from("/tmp/holidays.json"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read /tmp/holidays.json: permission denied"
        );
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Decode { .. }));
        assert!(err.to_string().starts_with("decode error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ClientError>();
    }
}
