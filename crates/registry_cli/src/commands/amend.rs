use clap::Args;
use registry_service::RegistryService;
use serde_json::{json, Map, Value};
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct AmendArgs {
    /// Record UUID to amend
    #[arg(long)]
    pub id: Uuid,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Comma-separated specialties; replaces the whole list
    #[arg(long)]
    pub specialties: Option<String>,

    /// New status: Active, "Renewal Due", Expired, Suspended
    #[arg(long)]
    pub status: Option<String>,

    /// Issue date (YYYY-MM-DD); pass an empty string to clear
    #[arg(long)]
    pub issue_date: Option<String>,

    /// Expiry date (YYYY-MM-DD); pass an empty string to clear
    #[arg(long)]
    pub expiry_date: Option<String>,

    /// Renewal due date (YYYY-MM-DD); pass an empty string to clear
    #[arg(long)]
    pub renewal_due: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,
}

pub async fn execute(
    service: RegistryService,
    args: AmendArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut patch = Map::new();
    if let Some(name) = args.name {
        patch.insert("fullName".into(), json!(name));
    }
    if let Some(email) = args.email {
        patch.insert("email".into(), json!(email));
    }
    if let Some(specialties) = args.specialties {
        let list: Vec<&str> = specialties
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        patch.insert("specialties".into(), json!(list));
    }
    if let Some(status) = args.status {
        patch.insert("status".into(), json!(status));
    }
    if let Some(date) = args.issue_date {
        patch.insert("issueDate".into(), json!(date));
    }
    if let Some(date) = args.expiry_date {
        patch.insert("expiryDate".into(), json!(date));
    }
    if let Some(date) = args.renewal_due {
        patch.insert("renewalDueDate".into(), json!(date));
    }
    if let Some(bio) = args.bio {
        patch.insert("bio".into(), json!(bio));
    }

    if patch.is_empty() {
        println!("🤷 Nothing to change. Pass at least one field flag.");
        return Ok(());
    }

    println!("✏️  Amending record {}...", args.id);
    let updated = service.amend_trainer(args.id, Value::Object(patch)).await?;

    println!("✅ Record Updated.");
    println!(
        "   {} | {} | {}",
        updated.certification_id,
        updated.full_name,
        updated.status.as_str()
    );
    Ok(())
}
