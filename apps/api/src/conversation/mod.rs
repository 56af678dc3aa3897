// Conversation flow: first-turn intent routing, canned templates and the
// dispatcher that hands later turns to the completion collaborator.

pub mod dispatcher;
pub mod intent;
pub mod prompts;
pub mod templates;

pub use dispatcher::{DispatchState, Dispatcher};
pub use intent::{detect_initial_intent, Intent};
pub use templates::{next_prompt, ConversationState};
