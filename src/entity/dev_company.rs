//! Link rows between devs and companies
//!
//! The table has no primary key of its own. SeaORM needs one, so the pair
//! is declared as the key here; the store still accepts duplicate pairs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
  Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize,
)]
#[sea_orm(table_name = "dev_company_association")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub dev_id: i32,
  #[sea_orm(primary_key, auto_increment = false)]
  pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::dev::Entity",
    from = "Column::DevId",
    to = "super::dev::Column::Id"
  )]
  Dev,
  #[sea_orm(
    belongs_to = "super::company::Entity",
    from = "Column::CompanyId",
    to = "super::company::Column::Id"
  )]
  Company,
}

impl Related<super::dev::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Dev.def()
  }
}

impl Related<super::company::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Company.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
