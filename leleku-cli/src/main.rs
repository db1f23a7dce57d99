//! Leleku CLI - sign in and read the pond dashboard from a terminal.

use std::path::PathBuf;

use clap::Parser;
use leleku_core::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "leleku-cli",
    version,
    about = "Leleku pond monitoring client (pH and turbidity)"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "LELEKU_BACKEND_URL", global = true)]
    backend_url: Option<String>,

    /// Session lifetime in days
    #[arg(long, env = "LELEKU_TOKEN_EXPIRY_DAYS", global = true)]
    token_expiry_days: Option<String>,

    /// Where the session token is kept between runs
    #[arg(
        long,
        env = "LELEKU_SESSION_FILE",
        default_value = ".leleku-session.json",
        global = true
    )]
    session_file: PathBuf,

    #[command(subcommand)]
    command: leleku_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = AppConfig::from_values(
        cli.backend_url.as_deref(),
        cli.token_expiry_days.as_deref(),
    );
    leleku_cmd::run(cli.command, &config, &cli.session_file).await
}
