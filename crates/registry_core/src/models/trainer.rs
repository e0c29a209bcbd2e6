use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// The Asset: a certified legal trainer record.
// Wire shape matches the registry front-ends (camelCase).
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Renewal Due")]
    RenewalDue,
    #[serde(rename = "Expired")]
    Expired,
    #[serde(rename = "Suspended")]
    Suspended,
}

impl TrainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainerStatus::Active => "Active",
            TrainerStatus::RenewalDue => "Renewal Due",
            TrainerStatus::Expired => "Expired",
            TrainerStatus::Suspended => "Suspended",
        }
    }
}

impl std::fmt::Display for TrainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrainerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(TrainerStatus::Active),
            "Renewal Due" => Ok(TrainerStatus::RenewalDue),
            "Expired" => Ok(TrainerStatus::Expired),
            "Suspended" => Ok(TrainerStatus::Suspended),
            other => Err(format!("Unknown trainer status: '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    PDF,
    IMAGE,
    DOC,
}

/// Attachment descriptor. Present on reads, never client-mutable through the
/// update path (stripped with the other immutable fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerFile {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: Uuid,
    pub certification_id: String,
    pub full_name: String,
    pub email: String,
    pub specialties: Vec<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub renewal_due_date: Option<NaiveDate>,
    pub status: TrainerStatus,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub files: Vec<TrainerFile>,
    pub created_at: DateTime<Utc>,
}

/// Create payload. Identity fields (`id`, `certificationId`, `created_at`) and
/// `files` are unrepresentable here; the repository assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDraft {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default, deserialize_with = "blank_date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_date")]
    pub renewal_due_date: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: TrainerStatus,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

fn default_status() -> TrainerStatus {
    TrainerStatus::Active
}

/// Partial update. Omitted fields are untouched. Date fields distinguish
/// "omitted" (outer None) from "clear" (inner None) so an empty form field
/// nulls the column instead of persisting an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPatch {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
    #[serde(default, deserialize_with = "clearable_date")]
    pub issue_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "clearable_date")]
    pub expiry_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "clearable_date")]
    pub renewal_due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<TrainerStatus>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub bio: Option<Option<String>>,
}

impl TrainerPatch {
    /// True when no mutable field is present; the repository then skips the
    /// UPDATE and just returns the current row.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.specialties.is_none()
            && self.issue_date.is_none()
            && self.expiry_date.is_none()
            && self.renewal_due_date.is_none()
            && self.status.is_none()
            && self.photo_url.is_none()
            && self.bio.is_none()
    }
}

/// Strips fields the update path must never persist, even when a client sends
/// them: identity, certification ID, creation timestamp and attachments.
pub fn sanitize_patch(mut patch: serde_json::Value) -> serde_json::Value {
    if let Some(map) = patch.as_object_mut() {
        for key in [
            "id",
            "certificationId",
            "certification_id",
            "createdAt",
            "created_at",
            "files",
        ] {
            map.remove(key);
        }
    }
    patch
}

/// Registry-wide health counters surfaced on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_trainers: usize,
    pub active_trainers: usize,
    pub renewal_due_count: usize,
    pub expired_count: usize,
    pub pending_communications: usize,
}

// ---------------------------------------------------------------------------
// Date normalization
// Empty-string inputs become absent before persistence; "" is never stored.
// ---------------------------------------------------------------------------

fn blank_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn clearable_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    // Only invoked when the key is present: null/"" both mean "clear".
    blank_date(deserializer).map(Some)
}

fn clearable_string<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(Some(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_string_dates_normalize_to_absent() {
        let draft: TrainerDraft = serde_json::from_value(json!({
            "fullName": "A. Hassan",
            "email": "a.hassan@example.org",
            "issueDate": "",
            "expiryDate": "2027-06-30",
        }))
        .unwrap();

        assert_eq!(draft.issue_date, None);
        assert_eq!(
            draft.expiry_date,
            Some(NaiveDate::from_ymd_opt(2027, 6, 30).unwrap())
        );
        assert_eq!(draft.renewal_due_date, None);

        // Round-trip: the serialized draft carries null, never "".
        let back = serde_json::to_value(&draft).unwrap();
        assert_eq!(back["issueDate"], serde_json::Value::Null);
    }

    #[test]
    fn patch_distinguishes_omitted_from_cleared_dates() {
        let patch: TrainerPatch = serde_json::from_value(json!({
            "expiryDate": "",
            "renewalDueDate": "2026-01-15",
        }))
        .unwrap();

        assert_eq!(patch.issue_date, None); // omitted -> untouched
        assert_eq!(patch.expiry_date, Some(None)); // "" -> clear
        assert_eq!(
            patch.renewal_due_date,
            Some(Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()))
        );
    }

    #[test]
    fn sanitize_patch_drops_immutable_fields() {
        let cleaned = sanitize_patch(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "certificationId": "ILA-CLT-2024-0001",
            "created_at": "2024-01-01T00:00:00Z",
            "files": [{"name": "cert.pdf"}],
            "fullName": "A. Hassan",
        }));

        let map = cleaned.as_object().unwrap();
        assert!(!map.contains_key("id"));
        assert!(!map.contains_key("certificationId"));
        assert!(!map.contains_key("created_at"));
        assert!(!map.contains_key("files"));
        assert_eq!(map["fullName"], "A. Hassan");
    }

    #[test]
    fn status_round_trips_through_display_labels() {
        for status in [
            TrainerStatus::Active,
            TrainerStatus::RenewalDue,
            TrainerStatus::Expired,
            TrainerStatus::Suspended,
        ] {
            let parsed: TrainerStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("On Leave".parse::<TrainerStatus>().is_err());
    }
}
