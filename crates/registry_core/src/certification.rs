//! Certification-ID issuance for the ILA-CLT registry.
//!
//! IDs are human readable: `ILA-CLT-<year>-<sequence>`, with the sequence
//! zero-padded to four digits. Issuance itself is a pure function of the
//! registry size; the repository is responsible for binding it to an insert
//! atomically (see `registry_db::repository::TrainerRepository::create`).

/// Institutional prefix printed on every certification ID and ID card.
pub const CERT_PREFIX: &str = "ILA-CLT";

/// Derives the next certification ID from the current record count.
///
/// `existing_count` is the number of records already in the registry, so the
/// new record gets sequence `existing_count + 1`.
pub fn issue_certification_id(existing_count: u64, year: i32) -> String {
    format!("{}-{}-{:04}", CERT_PREFIX, year, existing_count + 1)
}

/// Checks the `ILA-CLT-YYYY-NNNN` shape. Used by validation and by the
/// card-OCR path to reject hallucinated IDs before lookup.
pub fn certification_id_format_ok(id: &str) -> bool {
    let Some(rest) = id.strip_prefix(CERT_PREFIX) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix('-') else {
        return false;
    };
    let mut parts = rest.splitn(2, '-');
    let year_ok = parts
        .next()
        .map(|y| y.len() == 4 && y.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    let seq_ok = parts
        .next()
        .map(|s| s.len() >= 4 && s.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    year_ok && seq_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_count_plus_one_zero_padded() {
        assert_eq!(issue_certification_id(3, 2024), "ILA-CLT-2024-0004");
        assert_eq!(issue_certification_id(0, 2024), "ILA-CLT-2024-0001");
        assert_eq!(issue_certification_id(41, 2026), "ILA-CLT-2026-0042");
    }

    #[test]
    fn rederiving_from_a_refreshed_count_leaves_no_gap() {
        // A creation that loses the insert race re-reads the count (which now
        // includes the rival's row) and re-derives: the next sequence, not a
        // skipped one.
        let lost_race = issue_certification_id(3, 2024);
        let rederived = issue_certification_id(4, 2024);
        assert_eq!(lost_race, "ILA-CLT-2024-0004");
        assert_eq!(rederived, "ILA-CLT-2024-0005");
    }

    #[test]
    fn padding_widens_past_four_digits() {
        assert_eq!(issue_certification_id(9999, 2024), "ILA-CLT-2024-10000");
    }

    #[test]
    fn format_check_accepts_issued_ids() {
        for n in [0, 3, 9999, 123456] {
            assert!(certification_id_format_ok(&issue_certification_id(n, 2025)));
        }
    }

    #[test]
    fn format_check_rejects_garbage() {
        assert!(!certification_id_format_ok(""));
        assert!(!certification_id_format_ok("ILA-CLT"));
        assert!(!certification_id_format_ok("ILA-CLT-24-0001"));
        assert!(!certification_id_format_ok("ILA-CLT-2024-01"));
        assert!(!certification_id_format_ok("XYZ-CLT-2024-0001"));
        assert!(!certification_id_format_ok("ILA-CLT-2024-00A1"));
    }
}
