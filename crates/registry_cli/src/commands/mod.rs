pub mod amend;
pub mod draft;
pub mod list;
pub mod logs;
pub mod rebuild;
pub mod register;
pub mod revoke;
pub mod send;
pub mod upload_doc;
pub mod verify;

use registry_core::models::NotificationType;

/// Short CLI aliases for the wire-level notification labels.
pub fn parse_notification_type(raw: &str) -> Result<NotificationType, String> {
    match raw.to_lowercase().as_str() {
        "welcome" => Ok(NotificationType::Welcome),
        "renewal" => Ok(NotificationType::RenewalReminder),
        "status" => Ok(NotificationType::StatusChange),
        "custom" => Ok(NotificationType::Custom),
        other => raw.parse().map_err(|_| {
            format!(
                "Unknown notification type '{}'. Use: welcome, renewal, status, custom",
                other
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_and_full_labels_both_parse() {
        assert_eq!(
            parse_notification_type("renewal").unwrap(),
            NotificationType::RenewalReminder
        );
        assert_eq!(
            parse_notification_type("Renewal Reminder").unwrap(),
            NotificationType::RenewalReminder
        );
        assert!(parse_notification_type("carrier-pigeon").is_err());
    }
}
