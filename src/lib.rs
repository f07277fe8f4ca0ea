//! Freebies - companies, developers and the swag companies hand out
//!
//! Architecture:
//! - SeaORM entities over SQLite, schema owned by the `migration` crate
//! - `sv` service handles borrowing one `DatabaseConnection`
//! - `Store` opens, migrates and closes that connection
//! - `seed` resets the store to a known demo dataset

pub mod entity;
pub mod error;
pub mod prelude;
pub mod seed;
pub mod store;
pub mod sv;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use store::{Config, Services, Store};
