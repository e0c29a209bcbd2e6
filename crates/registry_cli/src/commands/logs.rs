use registry_db::EmailLogRepository;
use sqlx::PgPool;

pub async fn execute(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let logs = EmailLogRepository::new(pool).list().await?;

    if logs.is_empty() {
        println!("📭 No notifications have been sent yet.");
        return Ok(());
    }

    println!("📜 Communication History: {} attempt(s)", logs.len());
    println!("{:-<80}", "-");
    for log in logs {
        let icon = match log.status.as_str() {
            "DELIVERED" => "✅",
            "FAILED" => "🛑",
            _ => "⏳",
        };
        println!(
            "{} {}  {:18}  {:16}  {}",
            icon,
            log.sent_at.format("%Y-%m-%d %H:%M"),
            log.trainer_name,
            log.notification_type.as_str(),
            log.subject
        );
    }
    Ok(())
}
