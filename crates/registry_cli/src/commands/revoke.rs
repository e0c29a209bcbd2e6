use clap::Args;
use registry_service::RegistryService;
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct RevokeArgs {
    /// Record UUID to delete
    #[arg(long)]
    pub id: Uuid,

    /// Required confirmation; deletion is permanent
    #[arg(long)]
    pub yes: bool,
}

pub async fn execute(
    service: RegistryService,
    args: RevokeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        println!("⚠️  Revocation is permanent. Re-run with --yes to confirm.");
        return Ok(());
    }

    println!("🔥 Revoking registration {}...", args.id);
    service.revoke_trainer(args.id).await?;
    println!("✅ Record deleted. Email history is retained.");
    Ok(())
}
