pub mod chat;
pub mod listing;
pub mod money;
pub mod user;

pub use chat::{ChatMessage, Direction};
pub use listing::{ApprovedSubmission, FeatureKind, PendingSubmission, PropertyPreview};
pub use money::{Money, ParseMoneyError};
pub use user::{Role, UserProfile};
