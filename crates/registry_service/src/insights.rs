//! AI-assisted content: executive summaries, bios, certificate OCR, TTS.
//!
//! None of these are load-bearing. Every failure degrades to `None` or a
//! placeholder so the primary action can never be blocked by the model.

use registry_core::certification::certification_id_format_ok;
use registry_core::models::{Trainer, TrainerStatus};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::RegistryService;

/// Shown when the summary call fails; mirrors the portal's Arabic UI.
pub const INSIGHTS_UNAVAILABLE: &str = "فشل في استرداد التحليلات الذكية حالياً.";

/// Structured fields lifted off a certificate photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateScan {
    pub full_name: String,
    pub expiry_date: String,
    #[serde(default)]
    pub certification_id: Option<String>,
}

impl RegistryService {
    /// Three-sentence workforce summary over the whole registry. Always
    /// returns displayable text; failures yield the placeholder.
    pub async fn executive_summary(&self, trainers: &[Trainer]) -> String {
        let data_summary: Vec<_> = trainers
            .iter()
            .map(|t| {
                json!({
                    "name": t.full_name,
                    "status": t.status,
                    "specialties": t.specialties,
                })
            })
            .collect();
        let prompt = format!(
            "Analyze this legal trainer registry data and provide a concise 3-sentence \
             executive summary in Arabic. Focus on workforce health and strategic coverage. \
             Data: {}",
            json!(data_summary)
        );

        match self.ai.generate_text(&prompt).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "executive summary generation failed");
                INSIGHTS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Short professional bio for the trainer form's "write it for me" button.
    pub async fn generate_trainer_bio(
        &self,
        name: &str,
        specialties: &[String],
    ) -> Option<String> {
        let prompt = format!(
            "Write a professional short bio (Arabic) for {}, an ILA-CLT™ legal trainer \
             specializing in {}. Keep it executive and under 80 words.",
            name,
            specialties.join(", ")
        );
        match self.ai.generate_text(&prompt).await {
            Ok(bio) => Some(bio),
            Err(e) => {
                tracing::warn!(error = %e, "bio generation failed");
                None
            }
        }
    }

    /// OCR over an uploaded certificate image. Malformed model output is
    /// treated the same as a failed call.
    pub async fn analyze_certificate_image(&self, image_base64: &str) -> Option<CertificateScan> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "fullName": { "type": "STRING" },
                "expiryDate": { "type": "STRING" },
                "certificationId": { "type": "STRING" },
            },
            "required": ["fullName", "expiryDate"],
        });
        let result = self
            .ai
            .generate_json(
                "Extract the following details from this official certificate: Full Name, \
                 Expiry Date (YYYY-MM-DD), and Certification ID. Return the data in strict \
                 JSON format.",
                "image/jpeg",
                image_base64,
                schema,
            )
            .await;

        match result.map(serde_json::from_value::<CertificateScan>) {
            Ok(Ok(scan)) => Some(scan),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "certificate scan returned an unusable shape");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "certificate analysis failed");
                None
            }
        }
    }

    /// Reads the certification ID off an ID-card photo. Replies that do not
    /// match the issued format are discarded rather than fed into lookup.
    pub async fn extract_id_from_card(&self, image_base64: &str) -> Option<String> {
        let result = self
            .ai
            .generate_text_with_image(
                "Extract the ILA-CLT ID (Format: ILA-CLT-YYYY-XXXX). Return ONLY the ID string.",
                "image/jpeg",
                image_base64,
            )
            .await;

        match result {
            Ok(text) => {
                let id = text.trim().to_string();
                if certification_id_format_ok(&id) {
                    Some(id)
                } else {
                    tracing::warn!(reply = %id, "card scan reply did not look like a certification ID");
                    None
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "card ID extraction failed");
                None
            }
        }
    }

    /// Spoken verification announcement for the public portal. Audio bytes,
    /// or `None` when the TTS service is unavailable.
    pub async fn speak_verification(&self, name: &str, status: TrainerStatus) -> Option<Vec<u8>> {
        let script = format!(
            "Verification successful. Member: {}. Current Status: {}. This is an official \
             record of the International Legal Academy.",
            name, status
        );
        match self.ai.synthesize_speech(&script).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, "verification TTS failed");
                None
            }
        }
    }
}
