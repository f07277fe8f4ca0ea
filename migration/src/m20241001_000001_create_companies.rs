use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Companies::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Companies::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Companies::Name).string().not_null())
          .col(ColumnDef::new(Companies::FoundingYear).integer().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Companies {
  Table,
  Id,
  Name,
  FoundingYear,
}
