use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidLanguageCode(String),
    InvalidPrice(f64),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidLanguageCode(code) => {
                write!(f, "invalid language code: {code:?}")
            }
            ModelError::InvalidPrice(price) => {
                write!(f, "invalid price: {price}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
