use clap::Parser;

use crate::config::ProbeConfig;
use crate::http_client::StoreClient;
use crate::session::Session;

pub mod config;
pub mod http_client;
pub mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    color_eyre::install().map_err(anyhow::Error::msg)?;
    env_logger::init();

    let config = ProbeConfig::parse();
    let session = Session::new()?;
    let client = StoreClient::new(session, config.base_url.clone());

    println!("Testing login...");
    let login = client.login(&config.email, &config.password).await?;
    login.print();

    println!("\nTesting admin stats access...");
    let stats = client.admin_stats().await?;
    stats.print();

    println!("\nCookies: {}", client.session().cookie_dump());

    Ok(())
}
