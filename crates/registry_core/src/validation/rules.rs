use crate::models::TrainerDraft;
use crate::validation::{ValidationError, ValidationRule};

// =========================================================================
// RULE: REG-001
// "Full name is required"
// Caught client-side before any network call is made.
// =========================================================================
pub struct RuleReg001;

impl ValidationRule for RuleReg001 {
    fn rule_id(&self) -> &str {
        "REG-001"
    }

    fn check(&self, draft: &TrainerDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if draft.full_name.trim().is_empty() {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "High Error".to_string(),
                message: "Trainer full name is required and cannot be empty".to_string(),
                field: Some("fullName".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: REG-002
// "Email is required"
// =========================================================================
pub struct RuleReg002;

impl ValidationRule for RuleReg002 {
    fn rule_id(&self) -> &str {
        "REG-002"
    }

    fn check(&self, draft: &TrainerDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if draft.email.trim().is_empty() {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "High Error".to_string(),
                message: "Institutional email address is required".to_string(),
                field: Some("email".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: REG-003
// "Email must look like an address"
// Minimal shape check only; deliverability is the mail function's problem.
// =========================================================================
pub struct RuleReg003;

impl ValidationRule for RuleReg003 {
    fn rule_id(&self) -> &str {
        "REG-003"
    }

    fn check(&self, draft: &TrainerDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let email = draft.email.trim();
        if !email.is_empty() {
            let well_formed = email
                .split_once('@')
                .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
                .unwrap_or(false);
            if !well_formed {
                errors.push(ValidationError {
                    code: self.rule_id().to_string(),
                    severity: "High Error".to_string(),
                    message: format!("'{}' is not a valid email address", email),
                    field: Some("email".to_string()),
                });
            }
        }
        errors
    }
}

// =========================================================================
// RULE: REG-004
// "Expiry must not precede issuance"
// Warning only: operators set status by hand, dates are informational.
// =========================================================================
pub struct RuleReg004;

impl ValidationRule for RuleReg004 {
    fn rule_id(&self) -> &str {
        "REG-004"
    }

    fn check(&self, draft: &TrainerDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let (Some(issued), Some(expires)) = (draft.issue_date, draft.expiry_date) {
            if expires < issued {
                errors.push(ValidationError {
                    code: self.rule_id().to_string(),
                    severity: "Warning".to_string(),
                    message: format!(
                        "Expiry date {} precedes issue date {}",
                        expires, issued
                    ),
                    field: Some("expiryDate".to_string()),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_standard_validator;
    use crate::models::TrainerStatus;
    use chrono::NaiveDate;

    fn draft(name: &str, email: &str) -> TrainerDraft {
        TrainerDraft {
            full_name: name.to_string(),
            email: email.to_string(),
            specialties: vec![],
            issue_date: None,
            expiry_date: None,
            renewal_due_date: None,
            status: TrainerStatus::Active,
            photo_url: None,
            bio: None,
        }
    }

    #[test]
    fn valid_draft_passes_the_standard_validator() {
        let errors = get_standard_validator().run(&draft("A. Hassan", "a.hassan@ila.example"));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn missing_required_fields_are_high_errors() {
        let errors = get_standard_validator().run(&draft("  ", ""));
        let codes: Vec<_> = errors.iter().map(|e| e.code.as_str()).collect();
        assert!(codes.contains(&"REG-001"));
        assert!(codes.contains(&"REG-002"));
        assert!(errors.iter().all(|e| e.severity == "High Error"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = RuleReg003.check(&draft("A. Hassan", "not-an-address"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "REG-003");
    }

    #[test]
    fn inverted_date_range_is_a_warning() {
        let mut d = draft("A. Hassan", "a@b.example");
        d.issue_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        d.expiry_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        let errors = RuleReg004.check(&d);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, "Warning");
    }
}
