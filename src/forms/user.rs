use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Login {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}
