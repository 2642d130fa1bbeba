//! Thin client for the gateway's admin dispatch endpoint.
//!
//! Every capability is a `POST {api_url}/api/admin` call whose JSON body
//! carries an `action` field selecting behavior plus an action-specific
//! `data` object. Requests are authenticated with a bearer credential and
//! bounded by a single wall-clock timeout; there is no retry.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::errors::ReconcileError;
use crate::models::{AdminAction, CreatedToken, TokenRecord};

pub struct AdminClient {
    client: reqwest::Client,
    admin_url: String,
    auth_token: String,
}

impl AdminClient {
    pub fn new(
        api_url: &str,
        auth_token: &str,
        timeout: Duration,
    ) -> Result<Self, ReconcileError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("token-sync/0.1")
            .build()
            .map_err(ReconcileError::ClientBuild)?;

        Ok(Self {
            client,
            admin_url: format!("{}/api/admin", api_url.trim_end_matches('/')),
            auth_token: auth_token.to_string(),
        })
    }

    /// Fetch all tokens known to the server.
    pub async fn list_tokens(&self) -> Result<Vec<TokenRecord>, ReconcileError> {
        let action = AdminAction::ListTokens;
        let body = self
            .dispatch(action, serde_json::json!({ "action": action.as_str() }))
            .await?;

        serde_json::from_str(&body).map_err(|e| ReconcileError::MalformedResponse {
            action,
            detail: e.to_string(),
        })
    }

    /// Overwrite the endpoint set of the token with the given id.
    ///
    /// The response body carries the updated record but is not required to;
    /// only the status matters here.
    pub async fn update_token_endpoints(
        &self,
        id: &str,
        endpoints: &[String],
    ) -> Result<(), ReconcileError> {
        let action = AdminAction::UpdateTokenEndpoints;
        self.dispatch(
            action,
            serde_json::json!({
                "action": action.as_str(),
                "data": { "id": id, "endpoints": endpoints },
            }),
        )
        .await?;
        Ok(())
    }

    /// Create a token with the given name and endpoint set.
    ///
    /// The `token` field is always submitted empty: the secret is
    /// server-assigned, never client-supplied. Returns the issued secret.
    pub async fn create_token(
        &self,
        name: &str,
        endpoints: &[String],
    ) -> Result<String, ReconcileError> {
        let action = AdminAction::CreateToken;
        let body = self
            .dispatch(
                action,
                serde_json::json!({
                    "action": action.as_str(),
                    "data": { "name": name, "token": "", "endpoints": endpoints },
                }),
            )
            .await?;

        let created: CreatedToken =
            serde_json::from_str(&body).map_err(|e| ReconcileError::MalformedResponse {
                action,
                detail: e.to_string(),
            })?;
        Ok(created.token)
    }

    /// POST one action to the admin endpoint and return the raw response body.
    ///
    /// Any transport error or non-2xx status aborts the whole reconcile; the
    /// error carries the failing action so the caller can report which step
    /// broke.
    async fn dispatch(&self, action: AdminAction, body: Value) -> Result<String, ReconcileError> {
        debug!(action = %action, url = %self.admin_url, "calling admin API");

        let resp = self
            .client
            .post(&self.admin_url)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ReconcileError::Transport { action, source: e })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReconcileError::Status {
                action,
                status,
                body,
            });
        }

        resp.text()
            .await
            .map_err(|e| ReconcileError::Transport { action, source: e })
    }
}
