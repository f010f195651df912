use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Validation: {0}")]
  Validation(#[from] ValidationError),

  #[error("Config: {0}")]
  Config(String),

  #[error("Invalid ticket id: {0}")]
  InvalidTicket(String),

  #[error("IO: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
