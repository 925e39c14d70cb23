use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum UserError {
    InvalidEmail { email: String },
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::InvalidEmail { email } => write!(f, "Invalid email: {}", email),
        }
    }
}

impl Error for UserError {}
