use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidPhone(String),
    InvalidEmail(String),
    Url(url::ParseError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidPhone(raw) => {
                write!(f, "invalid phone number: {raw:?}")
            }
            ModelError::InvalidEmail(raw) => {
                write!(f, "invalid e-mail address: {raw:?}")
            }
            ModelError::Url(err) => write!(f, "url error: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Url(err) => Some(err),
            ModelError::InvalidPhone(_) | ModelError::InvalidEmail(_) => None,
        }
    }
}

impl From<url::ParseError> for ModelError {
    fn from(err: url::ParseError) -> Self {
        ModelError::Url(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
