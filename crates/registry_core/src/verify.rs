//! Public-portal lookup: match a search term to a trainer record.
//!
//! The scan is linear over the currently loaded set; the registry is small
//! enough that an index would be overhead, not a win.

use crate::models::Trainer;
use uuid::Uuid;

/// Case-insensitive exact match on certification ID, or a match on the
/// internal record id. The term is trimmed and uppercased first.
///
/// The caller passes the list in most-recent-first order; if two records ever
/// share a certification ID (the issuance race recovered by the repository),
/// the newest record wins.
pub fn resolve<'a>(term: &str, trainers: &'a [Trainer]) -> Option<&'a Trainer> {
    let needle = term.trim().to_uppercase();
    if needle.is_empty() {
        return None;
    }
    // UUID parsing is itself case-insensitive, so the uppercased term still
    // matches a lowercase internal id.
    let as_uuid = Uuid::parse_str(&needle).ok();

    trainers
        .iter()
        .find(|t| t.certification_id.to_uppercase() == needle || as_uuid == Some(t.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TrainerStatus};
    use chrono::{TimeZone, Utc};

    fn trainer(cert: &str, name: &str) -> Trainer {
        Trainer {
            id: Uuid::new_v4(),
            certification_id: cert.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
            specialties: vec!["Arbitration".into()],
            issue_date: None,
            expiry_date: None,
            renewal_due_date: None,
            status: TrainerStatus::Active,
            photo_url: None,
            bio: None,
            files: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn matches_are_case_insensitive_and_trimmed() {
        let list = vec![trainer("ILA-CLT-2024-0004", "A. Hassan")];
        let found = resolve(" ila-clt-2024-0004 ", &list).unwrap();
        assert_eq!(found.full_name, "A. Hassan");
    }

    #[test]
    fn matches_on_internal_id() {
        let list = vec![trainer("ILA-CLT-2024-0001", "B. Odeh")];
        let id = list[0].id.to_string();
        assert!(resolve(&id, &list).is_some());
        // Uppercased UUID still resolves.
        assert!(resolve(&id.to_uppercase(), &list).is_some());
    }

    #[test]
    fn empty_and_unknown_terms_yield_not_found() {
        let list = vec![trainer("ILA-CLT-2024-0001", "B. Odeh")];
        assert!(resolve("", &list).is_none());
        assert!(resolve("   ", &list).is_none());
        assert!(resolve("ILA-CLT-2024-9999", &list).is_none());
        assert!(resolve("anything", &[]).is_none());
    }

    #[test]
    fn duplicate_certification_ids_resolve_to_the_newest_record() {
        // The list is most-recent-first; first match wins.
        let newest = trainer("ILA-CLT-2024-0004", "New Holder");
        let older = trainer("ILA-CLT-2024-0004", "Old Holder");
        let list = vec![newest, older];
        let found = resolve("ILA-CLT-2024-0004", &list).unwrap();
        assert_eq!(found.full_name, "New Holder");
    }
}
