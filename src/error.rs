//! Error types for the freebies store

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Database error: {0}")]
  Database(#[from] sea_orm::DbErr),

  #[error("Company {0} not found")]
  CompanyNotFound(i32),

  #[error("Dev {0} not found")]
  DevNotFound(i32),

  #[error("Freebie {0} not found")]
  FreebieNotFound(i32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
