use anyhow::Result;
use clap::{Parser, Subcommand};
use goldensmile_notification::EmailService;

/// goldensmile - Golden Smile Creation contact service
#[derive(Parser)]
#[command(name = "goldensmile")]
#[command(about = "Contact form backend for the Golden Smile Creation site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate configuration, then report the email provider state
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = goldensmile::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    goldensmile::observability::init_observability(
        "goldensmile",
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => goldensmile::server::serve(config, host, port).await,
        Commands::CheckConfig => check_config_command(config),
    }
}

fn check_config_command(config: goldensmile::config::Config) -> Result<()> {
    let email = EmailService::from_config(&config.email)?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        provider = %config.email.provider,
        configured = email.is_configured(),
        from = %config.email.from_address,
        notification_address = %config.email.notification_address,
        "Configuration is valid"
    );

    if !email.is_configured() {
        anyhow::bail!("Email provider {} is missing credentials", config.email.provider);
    }

    Ok(())
}
