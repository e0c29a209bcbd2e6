use clap::Args;
use registry_db::schema::{drop_all, rebuild_database};
use sqlx::PgPool;

#[derive(Debug, Args)]
pub struct RebuildArgs {
    /// DANGER: Drop existing tables before rebuilding?
    #[arg(long)]
    pub reset: bool,
}

pub async fn execute(pool: PgPool, args: RebuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("🏗️  Rebuilding Registry Schema...");

    if args.reset {
        println!("🔥 Reset requested. Dropping public schema...");
        drop_all(&pool).await?;
    }

    rebuild_database(&pool).await?;

    println!("✅ Registry Schema Applied Successfully.");
    Ok(())
}
