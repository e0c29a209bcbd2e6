pub mod certification;
pub mod error;
pub mod models;
pub mod validation;
pub mod verify;

use validation::{rules, ValidationEngine};

// Convenience re-exports (keeps call-sites clean)
pub use certification::{certification_id_format_ok, issue_certification_id, CERT_PREFIX};
pub use error::{Error, Result};
pub use models::{
    DashboardStats, DeliveryStatus, EmailLog, NotificationType, Trainer, TrainerDraft,
    TrainerFile, TrainerPatch, TrainerStatus,
};

/// The rule set applied to every trainer draft before it reaches the network.
pub fn get_standard_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(rules::RuleReg001)
        .add_rule(rules::RuleReg002)
        .add_rule(rules::RuleReg003)
        .add_rule(rules::RuleReg004)
}
