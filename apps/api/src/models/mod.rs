pub mod activity;
pub mod message;
pub mod record;

pub use activity::ActivityType;
pub use message::{ChatMessage, Role};
pub use record::{ActivityRecord, FieldValue, ProfileRecord, Record};
