use clap::Args;
use registry_core::verify::resolve;
use registry_service::RegistryService;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Certification ID (ILA-CLT-YYYY-XXXX) or record UUID
    #[arg(long)]
    pub term: String,
}

pub async fn execute(
    service: RegistryService,
    args: VerifyArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Verifying: {}", args.term.trim());

    let trainers = service.list_trainers().await?;
    match resolve(&args.term, &trainers) {
        Some(t) => {
            println!("✅ CREDENTIAL VERIFIED");
            println!("   Name:   {}", t.full_name);
            println!("   ID:     {}", t.certification_id);
            println!("   Status: {}", t.status.as_str());
            if let Some(expiry) = t.expiry_date {
                println!("   Expires: {}", expiry);
            }
        }
        None => {
            println!("❌ NOT FOUND. No record matches this credential.");
        }
    }
    Ok(())
}
