//! Notification dispatcher.
//!
//! One send attempt walks DRAFTING -> PREVIEW -> SENDING -> LOGGED: the
//! operator reviews and may edit the drafted subject/body before anything is
//! transmitted, and every transmission attempt is logged whether or not the
//! mail function accepted it.

use async_trait::async_trait;
use chrono::Utc;
use registry_core::error::{Error, Result};
use registry_core::models::{DeliveryStatus, EmailLog, NotificationType};
use registry_db::EmailLogRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mailer::render_html_body;
use crate::RegistryService;

/// Extra insert attempts after a client-generated id collides. One retry is
/// enough: a second collision on a fresh UUIDv4 means something is broken,
/// not unlucky.
const LOG_ID_COLLISION_RETRIES: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// First line is the subject (a literal `Subject:` prefix is stripped),
/// the rest is the body. A blank reply yields no draft.
pub fn split_draft(raw: &str) -> Option<EmailDraft> {
    let mut lines = raw.lines();
    let subject = lines
        .next()?
        .trim()
        .trim_start_matches("Subject:")
        .trim()
        .to_string();
    if subject.is_empty() {
        return None;
    }
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Some(EmailDraft { subject, body })
}

/// Where attempt records land. Split out so the collision-retry contract is
/// testable without a database.
#[async_trait]
pub trait EmailLogSink: Send + Sync {
    async fn insert(&self, log: &EmailLog) -> Result<EmailLog>;
}

#[async_trait]
impl EmailLogSink for EmailLogRepository {
    async fn insert(&self, log: &EmailLog) -> Result<EmailLog> {
        EmailLogRepository::insert(self, log).await
    }
}

/// Inserts the log, regenerating the client id on a uniqueness conflict.
/// Any other error, or a second conflict, propagates.
pub(crate) async fn persist_log<S: EmailLogSink + ?Sized>(
    sink: &S,
    mut log: EmailLog,
) -> Result<EmailLog> {
    let mut collisions = 0;
    loop {
        match sink.insert(&log).await {
            Ok(saved) => return Ok(saved),
            Err(Error::Conflict(key)) if collisions < LOG_ID_COLLISION_RETRIES => {
                collisions += 1;
                tracing::warn!(%key, "duplicate email log id, retrying with a fresh one");
                log.id = Uuid::new_v4();
            }
            Err(e) => return Err(e),
        }
    }
}

impl RegistryService {
    /// Drafts subject + body for review. Any generation failure means "no
    /// draft available", never an error and never an empty draft.
    pub async fn draft_email(
        &self,
        notification_type: NotificationType,
        trainer_name: &str,
        additional_info: Option<&str>,
    ) -> Option<EmailDraft> {
        let prompt = format!(
            "Write a professional, executive email in Arabic for a legal trainer named {}.\n\
             Type of email: {}.\n\
             Institutional Branding: International Legal Academy (ILA-CLT™).\n\
             Context: {}.\n\
             Format: Return ONLY the subject line on the first line, then the body. \
             No placeholders like [Name], use the actual name.",
            trainer_name,
            notification_type,
            additional_info.unwrap_or("General communication"),
        );

        match self.ai.generate_text(&prompt).await {
            Ok(text) => split_draft(&text),
            Err(e) => {
                tracing::warn!(error = %e, "AI email drafting failed");
                None
            }
        }
    }

    /// Transmits via the remote mail function and logs the attempt.
    ///
    /// A dispatch failure does NOT abort: the attempt is still logged with
    /// status FAILED. A returned DELIVERED status only means the function
    /// accepted the call.
    pub async fn send_email(
        &self,
        trainer_id: Uuid,
        trainer_name: &str,
        trainer_email: &str,
        notification_type: NotificationType,
        subject: &str,
        body: &str,
    ) -> Result<EmailLog> {
        // 1. Invoke the dispatch function
        let html = render_html_body(body);
        let dispatched = self
            .mailer
            .send(trainer_email, subject, &html, trainer_name)
            .await;
        if let Err(e) = &dispatched {
            tracing::warn!(error = %e, "mail function failed to transmit, logging the attempt anyway");
        }

        // 2. Log the attempt with a client-generated id
        let log = EmailLog {
            id: Uuid::new_v4(),
            trainer_id,
            trainer_name: trainer_name.to_string(),
            notification_type,
            subject: subject.to_string(),
            sent_at: Utc::now(),
            status: if dispatched.is_ok() {
                DeliveryStatus::DELIVERED
            } else {
                DeliveryStatus::FAILED
            },
        };

        persist_log(&EmailLogRepository::new(self.pool.clone()), log).await
    }

    /// All attempt records, most recent first. A fetch failure degrades to an
    /// empty history rather than an error.
    pub async fn get_logs(&self) -> Vec<EmailLog> {
        match EmailLogRepository::new(self.pool.clone()).list().await {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!(error = %e, "email log fetch failed, returning empty history");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn draft_takes_first_line_as_subject() {
        let draft = split_draft("Subject: Welcome to the Academy\nDear colleague,\nWelcome.")
            .unwrap();
        assert_eq!(draft.subject, "Welcome to the Academy");
        assert_eq!(draft.body, "Dear colleague,\nWelcome.");
    }

    #[test]
    fn subject_prefix_is_optional() {
        let draft = split_draft("Renewal notice\nYour certification expires soon.").unwrap();
        assert_eq!(draft.subject, "Renewal notice");
        assert_eq!(draft.body, "Your certification expires soon.");
    }

    #[test]
    fn blank_reply_yields_no_draft() {
        assert!(split_draft("").is_none());
        assert!(split_draft("Subject:   \n").is_none());
    }

    /// Scripted sink: pops one canned outcome per insert and records every
    /// id it saw.
    struct ScriptedSink {
        outcomes: Mutex<Vec<Result<()>>>,
        seen_ids: Mutex<Vec<Uuid>>,
    }

    impl ScriptedSink {
        fn new(outcomes: Vec<Result<()>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                seen_ids: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl EmailLogSink for ScriptedSink {
        async fn insert(&self, log: &EmailLog) -> Result<EmailLog> {
            self.seen_ids.lock().unwrap().push(log.id);
            match self.outcomes.lock().unwrap().remove(0) {
                Ok(()) => Ok(log.clone()),
                Err(e) => Err(e),
            }
        }
    }

    fn attempt_log() -> EmailLog {
        EmailLog {
            id: Uuid::new_v4(),
            trainer_id: Uuid::new_v4(),
            trainer_name: "A. Hassan".into(),
            notification_type: NotificationType::Welcome,
            subject: "Welcome".into(),
            sent_at: Utc::now(),
            status: DeliveryStatus::FAILED,
        }
    }

    #[tokio::test]
    async fn one_collision_gets_exactly_one_fresh_id() {
        let sink = ScriptedSink::new(vec![Err(Error::Conflict("dup".into())), Ok(())]);
        let saved = persist_log(&sink, attempt_log()).await.unwrap();

        let seen = sink.seen_ids.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_ne!(seen[0], seen[1], "retry must use a fresh id");
        assert_eq!(saved.id, seen[1]);
    }

    #[tokio::test]
    async fn second_collision_propagates_without_further_retries() {
        let sink = ScriptedSink::new(vec![
            Err(Error::Conflict("dup".into())),
            Err(Error::Conflict("dup again".into())),
        ]);
        let result = persist_log(&sink, attempt_log()).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(sink.seen_ids.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_conflict_errors_never_retry() {
        let sink = ScriptedSink::new(vec![Err(Error::Database("boom".into()))]);
        let result = persist_log(&sink, attempt_log()).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(sink.seen_ids.lock().unwrap().len(), 1);
    }
}
