use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use swift_account::{SwiftAccountApi, SwiftAccountConfig};
use swift_tempurl::{AccountKeyWriter, SignerConfig, TemporaryUrlSigner};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[clap(name = "tempurl", about = "Manage and sign Swift temporary URLs")]
struct Args {
    /// Account storage URL, e.g. https://swift.example.com/v1/AUTH_test
    #[clap(long, env = "SWIFT_STORAGE_URL")]
    storage_url: Url,
    #[clap(long, env = "SWIFT_AUTH_TOKEN", hide_env_values = true)]
    auth_token: String,
    #[clap(long, env = "SWIFT_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
    #[clap(long, env = "TEMP_URL_KEY_REFRESH_SECS", default_value = "60")]
    refresh_interval: u64,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace the account's temporary URL key.
    SetKey {
        #[clap(long, env = "TEMP_URL_KEY", hide_env_values = true)]
        key: String,
    },
    /// Print a signed temporary URL for an object.
    Sign {
        #[clap(long, default_value = "GET")]
        method: String,
        #[clap(long)]
        object_url: Url,
        /// Seconds from now until the URL expires.
        #[clap(long, default_value = "300", conflicts_with = "expires")]
        ttl: u64,
        /// Absolute expiry in unix seconds.
        #[clap(long)]
        expires: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut account_config =
        SwiftAccountConfig::new(args.storage_url, SecretString::from(args.auth_token));
    account_config.timeout_secs = args.timeout_secs;
    let account = Arc::new(
        SwiftAccountApi::from_config(&account_config).context("configuring account API")?,
    );

    match args.command {
        Command::SetKey { key } => {
            account
                .set_temporary_url_key(&SecretString::from(key))
                .await
                .context("updating temporary URL key")?;
            info!(storage_url = %account.storage_url(), "temporary URL key updated");
        }
        Command::Sign {
            method,
            object_url,
            ttl,
            expires,
        } => {
            let config = SignerConfig {
                refresh_interval_secs: args.refresh_interval,
            };
            let signer = TemporaryUrlSigner::from_config(account, &config);
            let signed = match expires {
                Some(expires) => signer.sign_url(&method, &object_url, expires).await,
                None => {
                    signer
                        .sign_url_for(&method, &object_url, Duration::from_secs(ttl))
                        .await
                }
            }
            .context("signing temporary URL")?;
            println!("{signed}");
        }
    }

    Ok(())
}
