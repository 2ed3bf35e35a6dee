mod chat;
mod item;
mod user;

pub use chat::*;
pub use item::*;
pub use user::*;
