//! Error types for `sazon-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("a recipe titled {0:?} already exists")]
  DuplicateTitle(String),

  #[error("no recipe titled {0:?}")]
  TitleNotFound(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
