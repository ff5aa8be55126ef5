use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
   #[error("Validation failed: {0}")]
   Validation(#[from] ValidationError),

   #[error("{model} matching id {id} does not exist")]
   DoesNotExist { model: &'static str, id: i64 },

   #[error("{model} has not been saved yet")]
   Unsaved { model: &'static str },

   #[error("Model already registered: {0}")]
   AlreadyRegistered(String),

   #[error("Model not registered: {0}")]
   NotRegistered(String),

   #[error("Unknown field {field} on {model}")]
   UnknownField { model: &'static str, field: String },

   #[error("Database error: {0}")]
   Database(#[from] postgres::Error),

   #[error("Configuration error: {0}")]
   Config(#[from] config::ConfigError),

   #[error("I/O error: {0}")]
   Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
