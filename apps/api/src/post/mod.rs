// Activity posts: keyword matching, schema completeness, follow-up questions,
// rendering and quick edits. Everything here is pure and stateless.

pub mod completeness;
pub mod matcher;
pub mod prompts;
pub mod quick_edit;
pub mod renderer;
pub mod schema;
pub mod tone;
pub mod vocabulary;

pub use completeness::{check_missing_info, MissingInfo};
pub use matcher::{detect_activity_type, extract_technologies, generate_smart_hashtags};
pub use prompts::generate_info_request;
pub use quick_edit::{apply_quick_edit, QuickEdit};
pub use renderer::{format_post, Draft};
pub use schema::{blank_activity_record, schema_for, Schema};
pub use tone::ToneStyle;
