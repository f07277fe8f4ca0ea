use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
  Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize,
)]
#[sea_orm(table_name = "devs")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::freebie::Entity")]
  Freebies,
  #[sea_orm(has_many = "super::dev_company::Entity")]
  DevCompany,
}

impl Related<super::freebie::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Freebies.def()
  }
}

impl Related<super::company::Entity> for Entity {
  fn to() -> RelationDef {
    super::dev_company::Relation::Company.def()
  }

  fn via() -> Option<RelationDef> {
    Some(super::dev_company::Relation::Dev.def().rev())
  }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<Dev {}>", self.name)
  }
}
