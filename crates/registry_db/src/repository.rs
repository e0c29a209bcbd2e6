use chrono::{DateTime, Datelike, NaiveDate, Utc};
use registry_core::certification::issue_certification_id;
use registry_core::error::{Error, Result};
use registry_core::models::{
    DeliveryStatus, EmailLog, NotificationType, Trainer, TrainerDraft, TrainerFile, TrainerPatch,
    TrainerStatus,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

const TRAINER_COLUMNS: &str = "id, certification_id, full_name, email, specialties, \
     issue_date, expiry_date, renewal_due_date, status, photo_url, bio, files, created_at";

/// How many times a creation re-derives the certification ID when it loses the
/// count-then-insert race. The UNIQUE constraint on `certification_id` is what
/// actually detects the collision.
const CERT_ID_ATTEMPTS: u32 = 3;

pub struct TrainerRepository {
    pool: PgPool,
}

impl TrainerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All records, most recent first.
    pub async fn list(&self) -> Result<Vec<Trainer>> {
        let sql = format!(
            "SELECT {} FROM trainers ORDER BY created_at DESC",
            TRAINER_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_fetch_error)?;

        rows.iter().map(row_to_trainer).collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<Trainer> {
        let sql = format!("SELECT {} FROM trainers WHERE id = $1", TRAINER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        match row {
            Some(row) => row_to_trainer(&row),
            None => Err(Error::NotFound(format!("Trainer {}", id))),
        }
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM trainers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_fetch_error)
    }

    /// Assigns a fresh record id, a certification ID and the creation
    /// timestamp, then inserts.
    ///
    /// The count read and the insert run inside one transaction, and a
    /// uniqueness violation on the derived ID re-derives with a bumped
    /// sequence. Two racing creations therefore cannot both persist the same
    /// certification ID.
    pub async fn create(&self, draft: &TrainerDraft) -> Result<Trainer> {
        for attempt in 0..CERT_ID_ATTEMPTS {
            let mut tx = self
                .pool
                .begin()
                .await
                .map_err(|e| Error::SaveFailed(e.to_string()))?;

            let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainers")
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| Error::SaveFailed(e.to_string()))?;

            // The count is re-read each attempt, so a rival creation that
            // committed in between is already reflected here; the attempt
            // counter only bounds the loop.
            let certification_id = issue_certification_id(existing as u64, Utc::now().year());
            let id = Uuid::new_v4();
            let created_at = Utc::now();

            let inserted = sqlx::query(
                "INSERT INTO trainers \
                 (id, certification_id, full_name, email, specialties, \
                  issue_date, expiry_date, renewal_due_date, status, photo_url, bio, files, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, '[]'::jsonb, $12)",
            )
            .bind(id)
            .bind(&certification_id)
            .bind(&draft.full_name)
            .bind(&draft.email)
            .bind(&draft.specialties)
            .bind(draft.issue_date)
            .bind(draft.expiry_date)
            .bind(draft.renewal_due_date)
            .bind(draft.status.as_str())
            .bind(&draft.photo_url)
            .bind(&draft.bio)
            .bind(created_at)
            .execute(&mut *tx)
            .await;

            match inserted {
                Ok(_) => {
                    tx.commit()
                        .await
                        .map_err(|e| Error::SaveFailed(e.to_string()))?;
                    return Ok(Trainer {
                        id,
                        certification_id,
                        full_name: draft.full_name.clone(),
                        email: draft.email.clone(),
                        specialties: draft.specialties.clone(),
                        issue_date: draft.issue_date,
                        expiry_date: draft.expiry_date,
                        renewal_due_date: draft.renewal_due_date,
                        status: draft.status,
                        photo_url: draft.photo_url.clone(),
                        bio: draft.bio.clone(),
                        files: vec![],
                        created_at,
                    });
                }
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(
                        certification_id = %certification_id,
                        attempt,
                        "certification ID already taken, re-deriving"
                    );
                    // tx drops and rolls back; loop re-reads the count.
                    continue;
                }
                Err(e) => return Err(Error::SaveFailed(e.to_string())),
            }
        }

        Err(Error::Conflict(
            "certification ID sequence contention, retries exhausted".to_string(),
        ))
    }

    /// Partial update. Identity fields, the certification ID, the creation
    /// timestamp and `files` are unrepresentable in `TrainerPatch`, so they
    /// can never reach this statement.
    pub async fn update(&self, id: Uuid, patch: &TrainerPatch) -> Result<Trainer> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE trainers SET ");
        {
            let mut fields = qb.separated(", ");
            if let Some(v) = &patch.full_name {
                fields.push("full_name = ");
                fields.push_bind_unseparated(v.clone());
            }
            if let Some(v) = &patch.email {
                fields.push("email = ");
                fields.push_bind_unseparated(v.clone());
            }
            if let Some(v) = &patch.specialties {
                fields.push("specialties = ");
                fields.push_bind_unseparated(v.clone());
            }
            if let Some(v) = patch.issue_date {
                fields.push("issue_date = ");
                fields.push_bind_unseparated(v);
            }
            if let Some(v) = patch.expiry_date {
                fields.push("expiry_date = ");
                fields.push_bind_unseparated(v);
            }
            if let Some(v) = patch.renewal_due_date {
                fields.push("renewal_due_date = ");
                fields.push_bind_unseparated(v);
            }
            if let Some(v) = patch.status {
                fields.push("status = ");
                fields.push_bind_unseparated(v.as_str());
            }
            if let Some(v) = &patch.photo_url {
                fields.push("photo_url = ");
                fields.push_bind_unseparated(v.clone());
            }
            if let Some(v) = &patch.bio {
                fields.push("bio = ");
                fields.push_bind_unseparated(v.clone());
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {}", TRAINER_COLUMNS));

        let row = qb
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::UpdateFailed(e.to_string()))?;

        match row {
            Some(row) => row_to_trainer(&row),
            None => Err(Error::NotFound(format!("Trainer {}", id))),
        }
    }

    /// Unconditional delete by id. No soft delete, no cascading cleanup.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::DeleteFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Trainer {}", id)));
        }
        Ok(())
    }

    /// Appends an attachment descriptor to the JSONB `files` column. This is
    /// the only path that touches `files`; the update patch never does.
    pub async fn append_file(&self, id: Uuid, file: &TrainerFile) -> Result<()> {
        let descriptor =
            serde_json::to_value(file).map_err(|e| Error::Database(e.to_string()))?;
        let result = sqlx::query(
            "UPDATE trainers SET files = files || $2::jsonb WHERE id = $1",
        )
        .bind(id)
        .bind(descriptor)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::UpdateFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Trainer {}", id)));
        }
        Ok(())
    }
}

pub struct EmailLogRepository {
    pool: PgPool,
}

impl EmailLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts one attempt record. A duplicate client-generated id surfaces as
    /// `Error::Conflict` so the dispatcher can retry with a fresh id.
    pub async fn insert(&self, log: &EmailLog) -> Result<EmailLog> {
        sqlx::query(
            "INSERT INTO email_logs \
             (id, trainer_id, trainer_name, notification_type, subject, sent_at, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(log.id)
        .bind(log.trainer_id)
        .bind(&log.trainer_name)
        .bind(log.notification_type.as_str())
        .bind(&log.subject)
        .bind(log.sent_at)
        .bind(log.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::Conflict(format!("email log id {}", log.id))
            } else {
                Error::Database(e.to_string())
            }
        })?;

        Ok(log.clone())
    }

    /// All attempts, most recent first.
    pub async fn list(&self) -> Result<Vec<EmailLog>> {
        let rows = sqlx::query(
            "SELECT id, trainer_id, trainer_name, notification_type, subject, sent_at, status \
             FROM email_logs ORDER BY sent_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_fetch_error)?;

        rows.iter().map(row_to_email_log).collect()
    }
}

// ---------------------------------------------------------------------------
// Row mapping + error classification
// ---------------------------------------------------------------------------

fn row_to_trainer(row: &PgRow) -> Result<Trainer> {
    let status_raw: String = get(row, "status")?;
    let status: TrainerStatus = status_raw.parse().map_err(Error::Database)?;

    let files_raw: serde_json::Value = get(row, "files")?;
    let files: Vec<TrainerFile> = if files_raw.is_null() {
        vec![]
    } else {
        serde_json::from_value(files_raw).map_err(|e| Error::Database(e.to_string()))?
    };

    Ok(Trainer {
        id: get(row, "id")?,
        certification_id: get(row, "certification_id")?,
        full_name: get(row, "full_name")?,
        email: get(row, "email")?,
        specialties: get(row, "specialties")?,
        issue_date: get::<Option<NaiveDate>>(row, "issue_date")?,
        expiry_date: get::<Option<NaiveDate>>(row, "expiry_date")?,
        renewal_due_date: get::<Option<NaiveDate>>(row, "renewal_due_date")?,
        status,
        photo_url: get::<Option<String>>(row, "photo_url")?,
        bio: get::<Option<String>>(row, "bio")?,
        files,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
    })
}

fn row_to_email_log(row: &PgRow) -> Result<EmailLog> {
    let type_raw: String = get(row, "notification_type")?;
    let status_raw: String = get(row, "status")?;
    Ok(EmailLog {
        id: get(row, "id")?,
        trainer_id: get(row, "trainer_id")?,
        trainer_name: get(row, "trainer_name")?,
        notification_type: type_raw.parse::<NotificationType>().map_err(Error::Database)?,
        subject: get(row, "subject")?,
        sent_at: get::<DateTime<Utc>>(row, "sent_at")?,
        status: status_raw.parse::<DeliveryStatus>().map_err(Error::Database)?,
    })
}

fn get<'r, T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>>(
    row: &'r PgRow,
    column: &str,
) -> Result<T> {
    row.try_get(column)
        .map_err(|e| Error::Database(e.to_string()))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|d| d.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}

/// Distinguishes "the tables were never provisioned" from a generic transport
/// failure, so callers can offer the setup flow.
fn map_fetch_error(e: sqlx::Error) -> Error {
    let message = e.to_string().to_lowercase();
    let missing_relation = message.contains("does not exist")
        && (message.contains("relation") || message.contains("table"));
    if missing_relation || message.contains("schema cache") {
        Error::SchemaMissing
    } else {
        Error::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_relation_maps_to_schema_missing() {
        let err = map_fetch_error(sqlx::Error::Protocol(
            "relation \"trainers\" does not exist".into(),
        ));
        assert!(matches!(err, Error::SchemaMissing));
    }

    #[test]
    fn other_transport_failures_stay_generic() {
        let err = map_fetch_error(sqlx::Error::Protocol("connection reset by peer".into()));
        assert!(matches!(err, Error::Database(_)));
    }
}
