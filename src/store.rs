use std::env;

use migration::{Migrator, MigratorTrait};

use crate::{prelude::*, seed, sv};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self { database_url: String::from("sqlite:freebies.db?mode=rwc") }
  }
}

impl Config {
  /// Reads `DATABASE_URL`, falling back to `freebies.db` in the working dir.
  pub fn from_env() -> Self {
    env::var("DATABASE_URL")
      .map(|database_url| Self { database_url })
      .unwrap_or_default()
  }
}

pub struct Services<'a> {
  pub company: sv::Company<'a>,
  pub dev: sv::Dev<'a>,
  pub freebie: sv::Freebie<'a>,
}

/// Handle to the relational store. Opened once, passed by reference to
/// whoever needs it, closed explicitly at shutdown.
pub struct Store {
  db: DatabaseConnection,
  config: Config,
}

impl Store {
  pub async fn open(config: Config) -> Result<Self> {
    info!("Connecting to database...");
    let db = Database::connect(config.database_url.as_str()).await?;

    info!("Running migrations...");
    Migrator::up(&db, None).await?;

    Ok(Self { db, config })
  }

  pub fn db(&self) -> &DatabaseConnection {
    &self.db
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      company: sv::Company::new(&self.db),
      dev: sv::Dev::new(&self.db),
      freebie: sv::Freebie::new(&self.db),
    }
  }

  pub async fn seed(&self) -> Result<seed::Seeded> {
    seed::run(&self.db).await
  }

  pub async fn close(self) -> Result<()> {
    debug!("Closing database connection");
    self.db.close().await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{DbBackend, Statement};

  use super::*;

  async fn table_sql(db: &DatabaseConnection, table: &str) -> String {
    let row = db
      .query_one(Statement::from_sql_and_values(
        DbBackend::Sqlite,
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?",
        [table.into()],
      ))
      .await
      .unwrap()
      .unwrap();
    row.try_get("", "sql").unwrap()
  }

  fn memory() -> Config {
    Config { database_url: "sqlite::memory:".into() }
  }

  #[test]
  fn test_default_config() {
    assert_eq!(Config::default().database_url, "sqlite:freebies.db?mode=rwc");
  }

  #[tokio::test]
  async fn test_open_creates_tables() {
    let store = Store::open(memory()).await.unwrap();
    assert_eq!(store.config(), &memory());

    for table in ["companies", "devs", "freebies", "dev_company_association"] {
      assert!(table_sql(store.db(), table).await.starts_with("CREATE TABLE"));
    }

    store.close().await.unwrap();
  }

  #[tokio::test]
  async fn test_foreign_key_names() {
    let store = Store::open(memory()).await.unwrap();

    let freebies = table_sql(store.db(), "freebies").await;
    assert!(freebies.contains("fk_freebies_dev_id_devs"));
    assert!(freebies.contains("fk_freebies_company_id_companies"));
    assert!(freebies.contains(
      r#"CONSTRAINT "fk_freebies_dev_id_devs" FOREIGN KEY ("dev_id") REFERENCES "devs" ("id") ON DELETE CASCADE"#
    ));

    let link = table_sql(store.db(), "dev_company_association").await;
    assert!(link.contains("fk_dev_company_association_dev_id_devs"));
    assert!(link.contains("fk_dev_company_association_company_id_companies"));
  }

  #[tokio::test]
  async fn test_reopen_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("freebies.db");
    let config =
      Config { database_url: format!("sqlite://{}?mode=rwc", path.display()) };

    let store = Store::open(config.clone()).await.unwrap();
    store.seed().await.unwrap();
    store.close().await.unwrap();

    let store = Store::open(config).await.unwrap();
    let sv = store.sv();
    assert_eq!(sv.company.all().await.unwrap().len(), 3);
    assert_eq!(sv.dev.all().await.unwrap().len(), 3);
    assert_eq!(sv.freebie.all().await.unwrap().len(), 3);

    store.seed().await.unwrap();
    assert_eq!(sv.freebie.all().await.unwrap().len(), 3);
  }
}
