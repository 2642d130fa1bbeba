use std::fmt;

use serde::{Deserialize, Serialize};

/// The admin API actions this client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    ListTokens,
    UpdateTokenEndpoints,
    CreateToken,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::ListTokens => "list-tokens",
            AdminAction::UpdateTokenEndpoints => "update-token-endpoints",
            AdminAction::CreateToken => "create-token",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token record as returned by `list-tokens`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRecord {
    pub id: String,
    pub name: String,
    /// The secret value. Server-assigned at creation; endpoint updates never
    /// rotate it.
    #[serde(rename = "token")]
    pub secret: String,
    /// The server's list response may omit this field entirely.
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Response body of `create-token`. Only the issued secret is needed.
#[derive(Debug, Deserialize)]
pub struct CreatedToken {
    pub token: String,
}

/// Inputs for one reconcile invocation. Explicit struct, no process-wide
/// state.
#[derive(Clone)]
pub struct ReconcileRequest {
    /// Base URL of the gateway admin API.
    pub api_url: String,
    /// Bearer credential. Sensitive: excluded from `Debug` output and must
    /// never be logged.
    pub auth_token: String,
    /// Exact-match lookup key for the token.
    pub name: String,
    /// Endpoint identifiers to grant the token. May be empty.
    pub endpoints: Vec<String>,
    /// When true, compare the existing endpoint set against the requested
    /// one and report `changed=false` without mutating if they match.
    pub skip_unchanged: bool,
}

impl fmt::Debug for ReconcileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconcileRequest")
            .field("api_url", &self.api_url)
            .field("auth_token", &"<redacted>")
            .field("name", &self.name)
            .field("endpoints", &self.endpoints)
            .field("skip_unchanged", &self.skip_unchanged)
            .finish()
    }
}

/// Which step a successful reconcile performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedAction {
    Created,
    Updated,
    Unchanged,
}

/// Result of a successful reconcile, serialized to stdout as
/// `{"changed": ..., "token": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileOutcome {
    pub changed: bool,
    #[serde(rename = "token")]
    pub secret: String,
    #[serde(skip)]
    pub action: AppliedAction,
}

// ── Tests ─────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_match_wire_contract() {
        assert_eq!(AdminAction::ListTokens.as_str(), "list-tokens");
        assert_eq!(
            AdminAction::UpdateTokenEndpoints.as_str(),
            "update-token-endpoints"
        );
        assert_eq!(AdminAction::CreateToken.as_str(), "create-token");
    }

    #[test]
    fn test_token_record_parses_without_endpoints() {
        // The original server's list-tokens selects only id/name/token.
        let record: TokenRecord = serde_json::from_str(
            r#"{"id": "7", "name": "svc-a", "token": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.secret, "abc123");
        assert!(record.endpoints.is_empty());
    }

    #[test]
    fn test_token_record_parses_with_endpoints() {
        let record: TokenRecord = serde_json::from_str(
            r#"{"id": "7", "name": "svc-a", "token": "abc123", "endpoints": ["e1", "e2"]}"#,
        )
        .unwrap();
        assert_eq!(record.endpoints, vec!["e1", "e2"]);
    }

    #[test]
    fn test_request_debug_redacts_credential() {
        let request = ReconcileRequest {
            api_url: "https://gw.internal".into(),
            auth_token: "super-secret-bearer".into(),
            name: "svc-a".into(),
            endpoints: vec!["e1".into()],
            skip_unchanged: false,
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("super-secret-bearer"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_outcome_serializes_changed_and_token_only() {
        let outcome = ReconcileOutcome {
            changed: true,
            secret: "xyz789".into(),
            action: AppliedAction::Created,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"changed": true, "token": "xyz789"}));
    }
}
