//! Seed loader - resets the store to a fixed demo dataset
//!
//! Rerunning is safe: every run wipes the previous rows first. A failure
//! part way through leaves whatever the last commit wrote.

use crate::{entity::*, prelude::*};

const COMPANIES: [(&str, i32); 3] =
  [("Company X", 2005), ("Company Y", 2012), ("Company Z", 1998)];

const DEVS: [&str; 3] = ["Developer 1", "Developer 2", "Developer 3"];

/// Freebie `i` goes to dev `i` from company `i`.
const FREEBIES: [(&str, i32); 3] = [("T-shirt", 20), ("Mug", 10), ("Sticker", 5)];

#[derive(Debug, Clone)]
pub struct Seeded {
  pub companies: Vec<company::Model>,
  pub devs: Vec<dev::Model>,
  pub freebies: Vec<freebie::Model>,
}

/// Deletes every row, children before parents.
pub async fn clear(db: &DatabaseConnection) -> Result<()> {
  let txn = db.begin().await?;

  let links = dev_company::Entity::delete_many().exec(&txn).await?;
  let freebies = freebie::Entity::delete_many().exec(&txn).await?;
  let devs = dev::Entity::delete_many().exec(&txn).await?;
  let companies = company::Entity::delete_many().exec(&txn).await?;

  txn.commit().await?;
  debug!(
    links = links.rows_affected,
    freebies = freebies.rows_affected,
    devs = devs.rows_affected,
    companies = companies.rows_affected,
    "Store cleared"
  );
  Ok(())
}

pub async fn run(db: &DatabaseConnection) -> Result<Seeded> {
  clear(db).await?;

  // companies and devs first, so freebies can use their generated ids
  let txn = db.begin().await?;

  let mut companies = Vec::with_capacity(COMPANIES.len());
  for (name, founding_year) in COMPANIES {
    let company = company::ActiveModel {
      id: NotSet,
      name: Set(name.to_string()),
      founding_year: Set(founding_year),
    }
    .insert(&txn)
    .await?;
    companies.push(company);
  }

  let mut devs = Vec::with_capacity(DEVS.len());
  for name in DEVS {
    let dev = dev::ActiveModel { id: NotSet, name: Set(name.to_string()) }
      .insert(&txn)
      .await?;
    devs.push(dev);
  }

  txn.commit().await?;

  let txn = db.begin().await?;

  let mut freebies = Vec::with_capacity(FREEBIES.len());
  for ((item_name, value), (dev, company)) in
    FREEBIES.into_iter().zip(devs.iter().zip(&companies))
  {
    let freebie = freebie::ActiveModel {
      id: NotSet,
      item_name: Set(item_name.to_string()),
      value: Set(Some(value)),
      dev_id: Set(Some(dev.id)),
      company_id: Set(Some(company.id)),
    }
    .insert(&txn)
    .await?;
    freebies.push(freebie);
  }

  txn.commit().await?;

  info!(
    companies = companies.len(),
    devs = devs.len(),
    freebies = freebies.len(),
    "Store seeded"
  );
  Ok(Seeded { companies, devs, freebies })
}
