use registry_db::TrainerRepository;
use sqlx::PgPool;

pub async fn execute(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let trainers = TrainerRepository::new(pool).list().await?;

    if trainers.is_empty() {
        println!("📭 The registry is empty. Use 'register' to add a trainer.");
        return Ok(());
    }

    println!("📋 Registry: {} record(s)", trainers.len());
    println!("{:-<80}", "-");
    for t in trainers {
        println!(
            "{}  {:20}  {:14}  {}",
            t.certification_id,
            t.full_name,
            t.status.as_str(),
            t.email
        );
        if !t.specialties.is_empty() {
            println!("   Specialties: {}", t.specialties.join(", "));
        }
    }
    Ok(())
}
