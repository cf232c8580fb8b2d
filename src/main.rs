use clap::Parser;
use local_pack_checker::{cli, client, config, error, progress, runner};
use cli::{Cli, Commands};
use client::SerperClient;
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(|| progress::LogWriter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env はあれば読む
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Check(Default::default())) {
        Commands::Check(args) => {
            println!("📍 local-pack - Local Pack Checker\n");

            let config = Config::load_or_default();
            let client = SerperClient::new(config.api_key()?)?;
            let summary = runner::run_batch(&client, &args).await?;
            runner::print_summary(&summary);

            println!("\n✅ Done");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved to {}", Config::config_path()?.display());
            }

            if show {
                println!("Settings:");
                println!("  Config file: {}", Config::config_path()?.display());
                println!(
                    "  Stored API key: {}",
                    config
                        .api_key
                        .as_deref()
                        .map(config::mask_api_key)
                        .unwrap_or_else(|| "(not set)".into())
                );
                println!(
                    "  {}: {}",
                    config::API_KEY_ENV,
                    if std::env::var(config::API_KEY_ENV).is_ok() { "set" } else { "not set" }
                );
            }
        }
    }

    Ok(())
}
