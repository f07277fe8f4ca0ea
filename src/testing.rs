use migration::{Migrator, MigratorTrait};

use crate::prelude::*;

/// Fresh in-memory store with the full schema applied.
pub async fn setup_test_db() -> DatabaseConnection {
  let db = Database::connect("sqlite::memory:").await.unwrap();
  Migrator::up(&db, None).await.unwrap();
  db
}
