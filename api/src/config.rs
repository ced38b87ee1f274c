use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

#[derive(Clone, Debug, Parser)]
pub struct QuillApiConfig {
    #[clap(
        short,
        long,
        env = "QUILL_API_BIND_ADDR",
        default_value = "0.0.0.0:3000"
    )]
    pub bind_addr: SocketAddr,

    /// Path to the JSON file holding all users and articles. Created on
    /// first write; a missing file behaves like an empty database.
    #[clap(
        short,
        long,
        env = "QUILL_API_DATA_FILE",
        default_value = "database.json"
    )]
    pub data_file: PathBuf,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    /// Secret used to sign and verify session tokens (HS256).
    ///
    /// Provide the secret inline. For anything beyond local development,
    /// prefer `jwt_secret_file` so the secret stays out of the process
    /// environment and shell history.
    ///
    /// Mutually exclusive with `jwt_secret_file`.
    #[clap(long, env = "QUILL_API_JWT_SECRET")]
    pub jwt_secret: Option<String>,

    /// Path to a file containing the token signing secret.
    ///
    /// Mutually exclusive with `jwt_secret`.
    #[clap(long, env = "QUILL_API_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<PathBuf>,
}

impl QuillApiConfig {
    /// Get the token signing secret from either inline config or file.
    ///
    /// Checks `jwt_secret` first, then falls back to reading
    /// `jwt_secret_file`. Returns an error if neither is configured.
    pub fn get_jwt_secret(&self) -> anyhow::Result<String> {
        if let Some(ref secret) = self.jwt_secret {
            return Ok(secret.clone());
        }

        if let Some(ref path) = self.jwt_secret_file {
            return std::fs::read_to_string(path)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| anyhow::anyhow!("failed to read jwt secret file: {}", e));
        }

        Err(anyhow::anyhow!(
            "no jwt secret configured (set QUILL_API_JWT_SECRET or QUILL_API_JWT_SECRET_FILE)"
        ))
    }
}
