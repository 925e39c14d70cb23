use crate::domain::error::UserError;
use chrono::{DateTime, Utc};
use lazy_regex::regex_is_match;
use uuid::Uuid;

/// E-mail of the fixture user the diagnostic looks for.
pub const TEST_USER_EMAIL: &str = "test12345@test.com";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, email: String, created_at: DateTime<Utc>) -> Result<Self, UserError> {
        if !regex_is_match!(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", email.as_str()) {
            return Err(UserError::InvalidEmail { email });
        }

        Ok(User {
            id,
            email,
            created_at,
        })
    }

    pub fn now(email: String) -> Result<Self, UserError> {
        User::new(Uuid::now_v7(), email, Utc::now())
    }
}
