use std::fmt;

use crate::{entity::*, prelude::*};

const UNKNOWN: &str = "Unknown";

/// A freebie with its owner and issuing company loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
  pub freebie: freebie::Model,
  pub dev: Option<dev::Model>,
  pub company: Option<company::Model>,
}

impl Details {
  fn dev_name(&self) -> &str {
    self.dev.as_ref().map_or(UNKNOWN, |dev| dev.name.as_str())
  }

  fn company_name(&self) -> &str {
    self.company.as_ref().map_or(UNKNOWN, |company| company.name.as_str())
  }

  /// e.g. `Developer 1 owns a T-shirt from Company X`
  pub fn ownership(&self) -> String {
    format!(
      "{} owns a {} from {}",
      self.dev_name(),
      self.freebie.item_name,
      self.company_name()
    )
  }
}

impl fmt::Display for Details {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "<Freebie {} from {}>",
      self.freebie.item_name,
      self.company_name()
    )
  }
}

pub struct Freebie<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Freebie<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn by_id(&self, id: i32) -> Result<Option<freebie::Model>> {
    let freebie = freebie::Entity::find_by_id(id).one(self.db).await?;
    Ok(freebie)
  }

  pub async fn all(&self) -> Result<Vec<freebie::Model>> {
    let freebies = freebie::Entity::find()
      .order_by_asc(freebie::Column::Id)
      .all(self.db)
      .await?;
    Ok(freebies)
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(freebie::Entity::find().count(self.db).await?)
  }

  pub async fn details(&self, id: i32) -> Result<Details> {
    let freebie = freebie::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::FreebieNotFound(id))?;

    let dev = match freebie.dev_id {
      Some(dev_id) => dev::Entity::find_by_id(dev_id).one(self.db).await?,
      None => None,
    };
    let company = match freebie.company_id {
      Some(company_id) => {
        company::Entity::find_by_id(company_id).one(self.db).await?
      }
      None => None,
    };

    Ok(Details { freebie, dev, company })
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let res = freebie::Entity::delete_by_id(id).exec(self.db).await?;
    if res.rows_affected == 0 {
      return Err(Error::FreebieNotFound(id));
    }
    Ok(())
  }
}
