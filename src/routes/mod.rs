pub(crate) mod auth;
pub(crate) mod chat;
pub(crate) mod describe;
pub(crate) mod found_item;
pub mod health_checks;
pub(crate) mod lost_item;
pub(crate) mod message;

pub use health_checks::*;
