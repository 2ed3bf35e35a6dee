use serde::Serialize;
use uuid::Uuid;

use crate::models;

/// Outward identity record. The stored password never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
}

impl From<models::User> for Profile {
    fn from(user: models::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
