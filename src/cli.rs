use clap::Parser;

/// Token Sync — ensure a named gateway token exists with a given endpoint set
#[derive(Parser)]
#[command(name = "token-sync", version, about)]
pub struct Cli {
    /// Base URL of the gateway admin API, e.g. https://gateway.internal
    #[arg(long)]
    pub api_url: String,

    /// Bearer credential for the admin API. Prefer the env var so the secret
    /// stays out of shell history and process listings.
    #[arg(long, env = "TOKEN_SYNC_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: String,

    /// Name of the token to reconcile
    #[arg(long)]
    pub name: String,

    /// Comma-separated endpoint identifiers to grant the token
    #[arg(long, value_delimiter = ',')]
    pub endpoints: Vec<String>,

    /// Report changed=false and skip the update call when the existing
    /// endpoint set already matches the requested one
    #[arg(long)]
    pub skip_unchanged: bool,
}
