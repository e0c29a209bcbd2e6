use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use registry_cli::commands;
use registry_service::config::Config;
use registry_service::{s3_client_from_config, RegistryService};

#[derive(Parser)]
#[command(name = "registry")]
#[command(about = "Certified Legal Trainer Registry Toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the database schema from embedded assets
    Rebuild(commands::rebuild::RebuildArgs),

    /// Register a new trainer and issue a certification ID
    Register(commands::register::RegisterArgs),

    /// List every record in the registry
    List,

    /// Amend fields on an existing record
    Amend(commands::amend::AmendArgs),

    /// Permanently delete a registration
    Revoke(commands::revoke::RevokeArgs),

    /// Verify a credential by certification ID or record UUID
    Verify(commands::verify::VerifyArgs),

    /// Draft a notification email with AI assistance
    Draft(commands::draft::DraftArgs),

    /// Send a notification email and log the attempt
    Send(commands::send::SendArgs),

    /// Show the communication history
    Logs,

    /// Archive a certificate document for a trainer
    UploadDoc(commands::upload_doc::UploadDocArgs),
}

async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
}

async fn service(config: &Config, pool: PgPool) -> RegistryService {
    let s3 = s3_client_from_config(config).await;
    RegistryService::new(pool, s3, config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load Config (Fails fast if invalid)
    let config = Config::from_env()?;

    // 2. Parse arguments and route to the correct command
    let cli = Cli::parse();

    match cli.command {
        Commands::Rebuild(args) => {
            let pool = connect(&config).await?;
            commands::rebuild::execute(pool, args).await?;
        }
        Commands::Register(args) => {
            let pool = connect(&config).await?;
            commands::register::execute(service(&config, pool).await, args).await?;
        }
        Commands::List => {
            let pool = connect(&config).await?;
            commands::list::execute(pool).await?;
        }
        Commands::Amend(args) => {
            let pool = connect(&config).await?;
            commands::amend::execute(service(&config, pool).await, args).await?;
        }
        Commands::Revoke(args) => {
            let pool = connect(&config).await?;
            commands::revoke::execute(service(&config, pool).await, args).await?;
        }
        Commands::Verify(args) => {
            let pool = connect(&config).await?;
            commands::verify::execute(service(&config, pool).await, args).await?;
        }
        Commands::Draft(args) => {
            let pool = connect(&config).await?;
            commands::draft::execute(service(&config, pool).await, args).await?;
        }
        Commands::Send(args) => {
            let pool = connect(&config).await?;
            commands::send::execute(service(&config, pool).await, args).await?;
        }
        Commands::Logs => {
            let pool = connect(&config).await?;
            commands::logs::execute(pool).await?;
        }
        Commands::UploadDoc(args) => {
            let pool = connect(&config).await?;
            commands::upload_doc::execute(service(&config, pool).await, args).await?;
        }
    }

    Ok(())
}
