//! Freebie entity - a promotional item a company handed to a dev

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
  Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize,
)]
#[sea_orm(table_name = "freebies")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub item_name: String,
  pub value: Option<i32>,
  /// Current owner, reassigned on transfer
  pub dev_id: Option<i32>,
  pub company_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::dev::Entity",
    from = "Column::DevId",
    to = "super::dev::Column::Id",
    on_delete = "Cascade"
  )]
  Dev,
  #[sea_orm(
    belongs_to = "super::company::Entity",
    from = "Column::CompanyId",
    to = "super::company::Column::Id",
    on_delete = "Cascade"
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
