use sea_orm_migration::prelude::*;

use super::foreign_key;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Link rows carry no key of their own, so duplicate pairs are allowed.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let sql = format!(
      r#"CREATE TABLE IF NOT EXISTS "dev_company_association" (
  "dev_id" integer NOT NULL,
  "company_id" integer NOT NULL,
  {},
  {}
)"#,
      foreign_key("dev_company_association", "dev_id", "devs", None),
      foreign_key("dev_company_association", "company_id", "companies", None),
    );

    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(DevCompanyAssociation::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum DevCompanyAssociation {
  Table,
  DevId,
  CompanyId,
}
