use sea_orm_migration::prelude::*;

use super::foreign_key;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let sql = format!(
      r#"CREATE TABLE IF NOT EXISTS "freebies" (
  "id" integer NOT NULL PRIMARY KEY AUTOINCREMENT,
  "item_name" varchar NOT NULL,
  "value" integer NULL,
  "dev_id" integer NULL,
  "company_id" integer NULL,
  {},
  {}
)"#,
      foreign_key("freebies", "dev_id", "devs", Some("CASCADE")),
      foreign_key("freebies", "company_id", "companies", Some("CASCADE")),
    );

    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Freebies::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Freebies {
  Table,
  Id,
  ItemName,
  Value,
  DevId,
  CompanyId,
}
