//! Environment Configuration

use std::env;

use account::AccountConfig;
use anyhow::{Context, bail};
use base64::{Engine, engine::general_purpose};

/// Default listening port
pub const DEFAULT_PORT: u16 = 31113;

/// Read `TOKEN_SECRET` and `PASSWORD_PEPPER` from the environment
pub fn load_account_config() -> anyhow::Result<AccountConfig> {
    account_config(
        env::var("TOKEN_SECRET").ok(),
        env::var("PASSWORD_PEPPER").ok(),
    )
}

/// Build the account configuration from raw variable values
///
/// `TOKEN_SECRET` is standard base64 of exactly 32 bytes. Debug builds fall
/// back to a random secret when it is unset; release builds refuse to start.
pub fn account_config(
    token_secret: Option<String>,
    password_pepper: Option<String>,
) -> anyhow::Result<AccountConfig> {
    let mut config = match token_secret {
        Some(secret_b64) => {
            let secret_bytes = general_purpose::STANDARD
                .decode(secret_b64.trim())
                .context("TOKEN_SECRET must be base64")?;
            let secret: [u8; 32] = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes"))?;
            AccountConfig::new(secret, None)
        }
        None if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random secret");
            AccountConfig::with_random_secret()
        }
        None => bail!("TOKEN_SECRET must be set in production"),
    };

    config.password_pepper = password_pepper
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

/// Read `PORT`, falling back to [`DEFAULT_PORT`]
pub fn port() -> anyhow::Result<u16> {
    match env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a valid port number"),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
