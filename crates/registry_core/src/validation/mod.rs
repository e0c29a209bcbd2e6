use crate::models::TrainerDraft;
use serde::Serialize;

pub mod rules;

// The structure of a failure
#[derive(Debug, Serialize, Clone)]
pub struct ValidationError {
    pub code: String,     // e.g., "REG-001"
    pub severity: String, // "High Error", "Warning"
    pub message: String,
    pub field: Option<String>, // Which input field failed?
}

// The contract every rule must fulfill
pub trait ValidationRule {
    fn check(&self, draft: &TrainerDraft) -> Vec<ValidationError>;
    fn rule_id(&self) -> &str;
}

// The Engine that holds the registry of all rules
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, draft: &TrainerDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let mut rule_errors = rule.check(draft);
            errors.append(&mut rule_errors);
        }
        errors
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
