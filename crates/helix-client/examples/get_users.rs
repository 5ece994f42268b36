//! Look up users by login.
//!
//! Reads `HELIX_CLIENT_ID` and `HELIX_ACCESS_TOKEN` from the environment
//! (or a `.env` file) and prints the users named on the command line.
//!
//! ```sh
//! RUST_LOG=helix_client=debug cargo run --example get_users -- dallas lirik
//! ```

use tracing_subscriber::EnvFilter;

use helix_client::{ClientConfig, HelixClient, UsersParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if dotenvy::dotenv().is_ok() {
        tracing::info!("Loaded .env");
    }

    let config = ClientConfig::from_env()?;
    let client = HelixClient::new(config);

    let params = UsersParams {
        logins: std::env::args().skip(1).collect(),
        ..Default::default()
    };
    let resp = client.get_users(&params).await?;

    if !resp.is_success() {
        anyhow::bail!(
            "Helix returned {} {}: {}",
            resp.common.status_code,
            resp.common.error,
            resp.common.error_message
        );
    }

    for user in &resp.data.users {
        println!("{}\t{}\t{}", user.id, user.login, user.display_name);
    }
    tracing::info!(
        count = resp.data.users.len(),
        ratelimit_remaining = resp.common.rate_limit.remaining,
        "Done"
    );
    Ok(())
}
