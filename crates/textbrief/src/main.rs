use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textbrief_common::{logger, AppConfig};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "textbrief")]
#[command(about = "TextBrief - LLM-backed text summarizer with word statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Summary provider (gemini or openrouter)
        #[arg(long)]
        provider: Option<String>,
    },
}

async fn serve(config: AppConfig) -> Result<()> {
    config.validate()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("TextBrief starting...");
    tracing::info!("  Provider: {}", config.provider);
    tracing::info!("  Max input length: {} characters", config.max_input_length);
    tracing::info!("  Request timeout: {}s", config.request_timeout_secs);

    println!("Server listening on http://{}", config.server_bind_address());

    textbrief_server::start_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env early so CLI overrides below win over file values
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port, provider }) => {
            if let Some(host) = &host {
                std::env::set_var("SERVER_HOST", host);
            }
            if let Some(port) = port {
                std::env::set_var("SERVER_PORT", port.to_string());
            }
            if let Some(provider) = &provider {
                std::env::set_var("SUMMARY_PROVIDER", provider);
            }

            serve(AppConfig::from_env()?).await
        }
        None => serve(AppConfig::from_env()?).await,
    }
}
