use clap::Args;
use registry_service::RegistryService;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct UploadDocArgs {
    /// Trainer record UUID
    #[arg(long)]
    pub id: Uuid,

    /// Path to the certificate or supporting document
    #[arg(long)]
    pub file: PathBuf,
}

pub async fn execute(
    service: RegistryService,
    args: UploadDocArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("📦 Uploading: {:?}", args.file);

    let bytes = std::fs::read(&args.file)
        .map_err(|e| format!("Failed to read file: {}", e))?;
    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or("Path has no file name")?;

    let uploaded = service.upload_certificate(args.id, &file_name, bytes).await?;

    println!("✅ Document Archived.");
    println!("   URL:      {}", uploaded.url);
    println!("   SHA-256:  {}", uploaded.checksum);
    Ok(())
}
