mod chat;
mod describe;
mod item;
mod message;
mod user;

pub use chat::ChatForm;
pub use describe::{AnalyzeImage, GeneratePrompt};
pub use item::ItemForm;
pub use message::{ImageMessageForm, MessageForm};
pub use user::Login;
