const BANNER: &str = r#"
| | ___   _ _ __ ___   __ _      ___  ___  ___  __| |
| |/ / | | | '_ ` _ \ / _` |____/ __|/ _ \/ _ \/ _` |
|   <| |_| | | | | | | (_| |____\__ \  __/  __/ (_| |
|_|\_\\__,_|_| |_| |_|\__,_|    |___/\___|\___|\__,_|
  "#;

mod cli;
mod config;
mod driver;

use crate::config::AppConfig;
use clap::Parser;
use colored::Colorize;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use kuma_api_client::client::{KumaClient, PLACEHOLDER_API_KEY};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // initialize colored eyre for better-looking panics
    color_eyre::install().unwrap();

    // print banner
    println!("{}", BANNER.cyan());

    // parse cli args
    let cli = cli::KumaSeedCli::parse();
    // load default config, then override/merge using config.toml if given
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(config_path) = cli.config {
        figment = figment.merge(Toml::file(config_path));
    }
    let config = figment
        .extract::<AppConfig>()
        .expect("Failed to load configuration");

    // initialize tracing/logging
    let log_level = match config.general.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting kuma-seed!");
    println!("Server URL: {}", config.kuma.server);
    println!();

    // reject the placeholder credential before any network activity
    if config.kuma.has_placeholder_key() {
        println!(
            "{} API key is not configured (still '{}')",
            "Error:".red(),
            PLACEHOLDER_API_KEY
        );
        println!("   You can get an API key from the Uptime Kuma dashboard:");
        println!("   1. Login to the dashboard");
        println!("   2. Go to Settings -> API Keys");
        println!("   3. Create a new API key");
        println!("   4. Copy the generated key into the [kuma] config section");
        std::process::exit(1);
    }

    let client = KumaClient::from_config(config.kuma.clone())?;

    let summary = driver::seed_monitors(&client, &config.monitors).await;

    println!(
        "{} {}/{} monitors accepted",
        "Done:".cyan(),
        summary.succeeded,
        summary.submitted
    );
    info!(
        "Seeding complete: {} submitted, {} succeeded, {} failed",
        summary.submitted, summary.succeeded, summary.failed
    );

    Ok(())
}
