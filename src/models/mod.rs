mod chat;
mod item;
mod message;
pub mod user;

pub use chat::*;
pub use item::*;
pub use message::*;
pub use user::*;
