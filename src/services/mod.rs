pub mod conversation;
pub mod matcher;

pub use conversation::ConversationService;
pub use matcher::{ItemMatch, MatchService, MAX_MATCHES};
