//! The core reconcile operation: list, branch, then exactly one of
//! update/create.
//!
//! The three remote calls are strictly sequential. Either the full
//! decide-then-act sequence completes, or the operation fails as a single
//! unit naming the step that broke. Nothing is retried, and no state is
//! cached across invocations.
//!
//! Two racing reconcilers on the same name are not coordinated: both may
//! observe "absent" and create, or one may update with a stale id. The admin
//! API exposes no conditional-update primitive, so callers that need this
//! must serialize externally.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::{debug, info};

use crate::client::AdminClient;
use crate::errors::ReconcileError;
use crate::models::{AppliedAction, ReconcileOutcome, ReconcileRequest, TokenRecord};

/// Ensure a token named `request.name` exists with `request.endpoints`.
///
/// Builds a client with the given per-request timeout and runs the
/// reconcile. Returns the secret of the token that now satisfies the
/// request: the pre-existing one on the update path (endpoint updates never
/// rotate secrets), or the newly issued one on the create path.
pub async fn reconcile(
    request: &ReconcileRequest,
    timeout: Duration,
) -> Result<ReconcileOutcome, ReconcileError> {
    validate(request)?;
    let client = AdminClient::new(&request.api_url, &request.auth_token, timeout)?;
    reconcile_with(&client, request).await
}

/// Run the reconcile against an already-built client.
pub async fn reconcile_with(
    client: &AdminClient,
    request: &ReconcileRequest,
) -> Result<ReconcileOutcome, ReconcileError> {
    let tokens = client.list_tokens().await?;
    debug!(count = tokens.len(), "listed existing tokens");

    let existing = find_by_name(&tokens, &request.name)?;

    match existing {
        Some(token) => {
            if request.skip_unchanged && same_endpoint_set(&token.endpoints, &request.endpoints) {
                info!(name = %request.name, id = %token.id, "endpoint set already matches, skipping update");
                return Ok(ReconcileOutcome {
                    changed: false,
                    secret: token.secret.clone(),
                    action: AppliedAction::Unchanged,
                });
            }

            client
                .update_token_endpoints(&token.id, &request.endpoints)
                .await?;
            info!(name = %request.name, id = %token.id, "updated token endpoints");
            Ok(ReconcileOutcome {
                changed: true,
                secret: token.secret.clone(),
                action: AppliedAction::Updated,
            })
        }
        None => {
            let secret = client.create_token(&request.name, &request.endpoints).await?;
            info!(name = %request.name, "created token");
            Ok(ReconcileOutcome {
                changed: true,
                secret,
                action: AppliedAction::Created,
            })
        }
    }
}

fn validate(request: &ReconcileRequest) -> Result<(), ReconcileError> {
    if request.api_url.is_empty() {
        return Err(ReconcileError::InvalidRequest("api_url must not be empty"));
    }
    if request.auth_token.is_empty() {
        return Err(ReconcileError::InvalidRequest(
            "auth_token must not be empty",
        ));
    }
    if request.name.is_empty() {
        return Err(ReconcileError::InvalidRequest("name must not be empty"));
    }
    Ok(())
}

/// Find the token with the given name, rejecting conflicting server state.
///
/// The server is assumed to keep names unique. If it lists the target name
/// twice anyway, fail loudly instead of picking one arbitrarily.
fn find_by_name<'a>(
    tokens: &'a [TokenRecord],
    name: &str,
) -> Result<Option<&'a TokenRecord>, ReconcileError> {
    let mut matches = tokens.iter().filter(|t| t.name == name);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(ReconcileError::ConflictingState {
            name: name.to_string(),
        });
    }
    Ok(first)
}

/// Order-insensitive endpoint set comparison.
fn same_endpoint_set(existing: &[String], requested: &[String]) -> bool {
    let existing: BTreeSet<&str> = existing.iter().map(String::as_str).collect();
    let requested: BTreeSet<&str> = requested.iter().map(String::as_str).collect();
    existing == requested
}

// ── Tests ─────────────────────────────────────────────────────
