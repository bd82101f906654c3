pub mod approval;
pub mod seed;

pub use approval::{ApprovalDesk, ApprovalOutcome, RejectionOutcome};
pub use seed::sample_submissions;
