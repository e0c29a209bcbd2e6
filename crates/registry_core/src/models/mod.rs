pub mod email_log;
pub mod trainer;

pub use email_log::{DeliveryStatus, EmailLog, NotificationType};
pub use trainer::{
    sanitize_patch, DashboardStats, FileKind, Trainer, TrainerDraft, TrainerFile, TrainerPatch,
    TrainerStatus,
};
