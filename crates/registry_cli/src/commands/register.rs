use chrono::NaiveDate;
use clap::Args;
use registry_core::models::{TrainerDraft, TrainerStatus};
use registry_service::RegistryService;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Full name of the trainer
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Comma-separated specialties (e.g. "Arbitration,Commercial Law")
    #[arg(long, default_value = "")]
    pub specialties: String,

    /// Certification issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issue_date: Option<NaiveDate>,

    /// Certification expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry_date: Option<NaiveDate>,

    /// Renewal due date (YYYY-MM-DD)
    #[arg(long)]
    pub renewal_due: Option<NaiveDate>,

    /// Short professional bio
    #[arg(long)]
    pub bio: Option<String>,
}

pub async fn execute(
    service: RegistryService,
    args: RegisterArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Registering New Trainer...");
    println!("   Name:  {}", args.name);
    println!("   Email: {}", args.email);

    let specialties: Vec<String> = args
        .specialties
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let draft = TrainerDraft {
        full_name: args.name,
        email: args.email,
        specialties,
        issue_date: args.issue_date,
        expiry_date: args.expiry_date,
        renewal_due_date: args.renewal_due,
        status: TrainerStatus::Active,
        photo_url: None,
        bio: args.bio,
    };

    let trainer = service.register_trainer(&draft).await?;

    println!("✅ Trainer Registered Successfully.");
    println!("🎓 Certification ID: {}", trainer.certification_id);
    println!("🔑 Record UUID:      {}", trainer.id);
    Ok(())
}
