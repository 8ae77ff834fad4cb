//! certbot-dns-cpanel - DNS-01 hooks for cPanel-hosted zones

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cpanel_cli::run().await
}
