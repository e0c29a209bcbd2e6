use crate::RegistryService;
use anyhow::{anyhow, Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use chrono::Utc;
use registry_core::models::{FileKind, TrainerFile};
use registry_db::TrainerRepository;
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadedDocument {
    pub url: String,
    pub checksum: String,
    pub file: TrainerFile,
}

fn classify(extension: &str) -> FileKind {
    match extension {
        "pdf" => FileKind::PDF,
        "png" | "jpg" | "jpeg" | "webp" | "gif" => FileKind::IMAGE,
        _ => FileKind::DOC,
    }
}

fn content_type(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

impl RegistryService {
    /// Creates the vault bucket if it does not exist yet. Safe to call on
    /// every upload; MinIO answers the head cheaply.
    pub async fn ensure_bucket(&self) -> Result<()> {
        if self.s3.head_bucket().bucket(&self.bucket).send().await.is_ok() {
            return Ok(());
        }
        self.s3
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .context("Failed to create storage bucket")?;
        Ok(())
    }

    /// Stores a certificate or supporting document in the vault and records
    /// it on the trainer. Objects are keyed by a fresh UUID so two uploads of
    /// `certificate.pdf` never clobber each other.
    pub async fn upload_certificate(
        &self,
        trainer_id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedDocument> {
        if bytes.is_empty() {
            return Err(anyhow!("Refusing to upload an empty file"));
        }

        // 0. SELF-HEALING: Ensure Vault is ready
        self.ensure_bucket()
            .await
            .context("Failed to initialize storage backend")?;

        // 1. Checksum
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = hex::encode(hasher.finalize());

        // 2. Identity + key
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let key = if extension.is_empty() {
            format!("documents/{}/{}", trainer_id, Uuid::new_v4())
        } else {
            format!("documents/{}/{}.{}", trainer_id, Uuid::new_v4(), extension)
        };

        // 3. Upload
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type(&extension))
            .send()
            .await
            .context("S3 Upload Failed")?;

        let url = format!(
            "{}/{}/{}",
            self.s3_public_base.trim_end_matches('/'),
            self.bucket,
            key
        );

        // 4. Record the attachment on the trainer
        let file = TrainerFile {
            name: file_name.to_string(),
            url: url.clone(),
            kind: classify(&extension),
            uploaded_at: Utc::now(),
        };
        TrainerRepository::new(self.pool.clone())
            .append_file(trainer_id, &file)
            .await
            .context("Upload succeeded but the registry record was not updated")?;

        Ok(UploadedDocument {
            url,
            checksum: hash,
            file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_to_kinds() {
        assert!(matches!(classify("pdf"), FileKind::PDF));
        assert!(matches!(classify("jpeg"), FileKind::IMAGE));
        assert!(matches!(classify("docx"), FileKind::DOC));
        assert!(matches!(classify(""), FileKind::DOC));
    }

    #[test]
    fn content_types_cover_the_common_uploads() {
        assert_eq!(content_type("pdf"), "application/pdf");
        assert_eq!(content_type("jpg"), "image/jpeg");
        assert_eq!(content_type("bin"), "application/octet-stream");
    }
}
