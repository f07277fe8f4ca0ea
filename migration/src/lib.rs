//! Schema for the freebies store, expressed as SeaORM migrations

pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_companies;
mod m20241001_000002_create_devs;
mod m20241001_000003_create_freebies;
mod m20241001_000004_create_dev_company_association;

pub use m20241001_000001_create_companies::Companies;
pub use m20241001_000002_create_devs::Devs;
pub use m20241001_000003_create_freebies::Freebies;
pub use m20241001_000004_create_dev_company_association::DevCompanyAssociation;

/// Foreign key name following `fk_<table>_<column>_<referred_table>`.
pub fn fk_name(table: &str, column: &str, referred: &str) -> String {
  format!("fk_{table}_{column}_{referred}")
}

/// `CONSTRAINT` clause for a `CREATE TABLE` body. SQLite has no
/// `ALTER TABLE .. ADD CONSTRAINT`, and SeaQuery drops the name from inline
/// foreign keys, so tables with foreign keys are created from raw DDL.
pub fn foreign_key(
  table: &str,
  column: &str,
  referred: &str,
  on_delete: Option<&str>,
) -> String {
  let mut clause = format!(
    r#"CONSTRAINT "{}" FOREIGN KEY ("{column}") REFERENCES "{referred}" ("id")"#,
    fk_name(table, column, referred)
  );
  if let Some(action) = on_delete {
    clause.push_str(" ON DELETE ");
    clause.push_str(action);
  }
  clause
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20241001_000001_create_companies::Migration),
      Box::new(m20241001_000002_create_devs::Migration),
      Box::new(m20241001_000003_create_freebies::Migration),
      Box::new(m20241001_000004_create_dev_company_association::Migration),
    ]
  }
}
