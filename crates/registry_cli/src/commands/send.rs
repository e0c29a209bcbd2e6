use clap::Args;
use registry_core::models::DeliveryStatus;
use registry_service::RegistryService;
use uuid::Uuid;

use super::parse_notification_type;

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Trainer record UUID
    #[arg(long)]
    pub id: Uuid,

    /// Notification type: welcome, renewal, status, custom
    #[arg(long, value_parser = parse_notification_type)]
    pub kind: registry_core::models::NotificationType,

    #[arg(long)]
    pub subject: String,

    /// Plain-text body; newlines become line breaks in the delivered mail
    #[arg(long)]
    pub body: String,
}

pub async fn execute(
    service: RegistryService,
    args: SendArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let trainer = service.get_trainer(args.id).await?;
    println!("📨 Sending \"{}\" to {} <{}>...", args.subject, trainer.full_name, trainer.email);

    let log = service
        .send_email(
            trainer.id,
            &trainer.full_name,
            &trainer.email,
            args.kind,
            &args.subject,
            &args.body,
        )
        .await?;

    match log.status {
        DeliveryStatus::DELIVERED => println!("✅ Dispatch accepted. Log ID: {}", log.id),
        _ => println!("⚠️  Dispatch failed; the attempt was logged. Log ID: {}", log.id),
    }
    Ok(())
}
