use thiserror::Error;

use crate::models::AdminAction;

/// Failure of a single reconcile invocation.
///
/// Every variant is fatal: there is no partial-success state and nothing is
/// retried. The failing admin action is named in the message so callers can
/// tell which step aborted the run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{action} request failed: {source}")]
    Transport {
        action: AdminAction,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} returned HTTP {status}: {body}")]
    Status {
        action: AdminAction,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{action} returned a malformed response: {detail}")]
    MalformedResponse {
        action: AdminAction,
        detail: String,
    },

    #[error("conflicting state: server listed more than one token named '{name}'")]
    ConflictingState { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_failing_action() {
        let err = ReconcileError::Status {
            action: AdminAction::ListTokens,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("list-tokens"));
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_conflicting_state_names_token() {
        let err = ReconcileError::ConflictingState {
            name: "svc-a".into(),
        };
        assert!(err.to_string().contains("svc-a"));
    }
}
