use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "Welcome Email")]
    Welcome,
    #[serde(rename = "Renewal Reminder")]
    RenewalReminder,
    #[serde(rename = "Status Update")]
    StatusChange,
    #[serde(rename = "Custom Message")]
    Custom,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Welcome => "Welcome Email",
            NotificationType::RenewalReminder => "Renewal Reminder",
            NotificationType::StatusChange => "Status Update",
            NotificationType::Custom => "Custom Message",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Welcome Email" => Ok(NotificationType::Welcome),
            "Renewal Reminder" => Ok(NotificationType::RenewalReminder),
            "Status Update" => Ok(NotificationType::StatusChange),
            "Custom Message" => Ok(NotificationType::Custom),
            other => Err(format!("Unknown notification type: '{}'", other)),
        }
    }
}

/// Reflects only whether the remote dispatch call reported an error, never
/// actual mailbox delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    DELIVERED,
    FAILED,
    PENDING,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::DELIVERED => "DELIVERED",
            DeliveryStatus::FAILED => "FAILED",
            DeliveryStatus::PENDING => "PENDING",
        }
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELIVERED" => Ok(DeliveryStatus::DELIVERED),
            "FAILED" => Ok(DeliveryStatus::FAILED),
            "PENDING" => Ok(DeliveryStatus::PENDING),
            other => Err(format!("Unknown delivery status: '{}'", other)),
        }
    }
}

/// Immutable record of one notification attempt. The id is generated on the
/// client side at send time to avoid a round trip before the insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLog {
    pub id: Uuid,
    pub trainer_id: Uuid,
    pub trainer_name: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
    pub status: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_type_uses_display_labels_on_the_wire() {
        let json = serde_json::to_string(&NotificationType::RenewalReminder).unwrap();
        assert_eq!(json, "\"Renewal Reminder\"");
        let back: NotificationType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NotificationType::RenewalReminder);
    }

    #[test]
    fn log_serializes_type_under_the_legacy_key() {
        let log = EmailLog {
            id: Uuid::new_v4(),
            trainer_id: Uuid::new_v4(),
            trainer_name: "A. Hassan".into(),
            notification_type: NotificationType::Welcome,
            subject: "Welcome".into(),
            sent_at: Utc::now(),
            status: DeliveryStatus::DELIVERED,
        };
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["type"], "Welcome Email");
        assert_eq!(value["status"], "DELIVERED");
    }
}
