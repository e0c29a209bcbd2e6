use clap::Args;
use registry_service::RegistryService;
use uuid::Uuid;

use super::parse_notification_type;

#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Trainer record UUID
    #[arg(long)]
    pub id: Uuid,

    /// Notification type: welcome, renewal, status, custom
    #[arg(long, value_parser = parse_notification_type)]
    pub kind: registry_core::models::NotificationType,

    /// Extra context for the draft
    #[arg(long)]
    pub info: Option<String>,
}

pub async fn execute(
    service: RegistryService,
    args: DraftArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let trainer = service.get_trainer(args.id).await?;
    println!("🤖 Drafting \"{}\" for {}...", args.kind, trainer.full_name);

    match service
        .draft_email(args.kind, &trainer.full_name, args.info.as_deref())
        .await
    {
        Some(draft) => {
            println!("✅ Draft ready. Review before sending:");
            println!("{:-<60}", "-");
            println!("Subject: {}", draft.subject);
            println!("{:-<60}", "-");
            println!("{}", draft.body);
        }
        None => {
            println!("⚠️  No draft available. Compose the message manually with 'send'.");
        }
    }
    Ok(())
}
