use crate::{entity::*, prelude::*};

pub struct Dev<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Dev<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, name: impl Into<String>) -> Result<dev::Model> {
    let dev = dev::ActiveModel { id: NotSet, name: Set(name.into()) };
    Ok(dev.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<Option<dev::Model>> {
    let dev = dev::Entity::find_by_id(id).one(self.db).await?;
    Ok(dev)
  }

  pub async fn all(&self) -> Result<Vec<dev::Model>> {
    let devs =
      dev::Entity::find().order_by_asc(dev::Column::Id).all(self.db).await?;
    Ok(devs)
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(dev::Entity::find().count(self.db).await?)
  }

  pub async fn rename(
    &self,
    id: i32,
    name: impl Into<String>,
  ) -> Result<dev::Model> {
    let dev = dev::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::DevNotFound(id))?;

    let dev = dev::ActiveModel { name: Set(name.into()), ..dev.into() }
      .update(self.db)
      .await?;

    Ok(dev)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let txn = self.db.begin().await?;

    dev_company::Entity::delete_many()
      .filter(dev_company::Column::DevId.eq(id))
      .exec(&txn)
      .await?;

    let res = dev::Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
      txn.rollback().await?;
      return Err(Error::DevNotFound(id));
    }

    txn.commit().await?;
    info!("Dev {id} deleted");
    Ok(())
  }

  pub async fn freebies(&self, dev: &dev::Model) -> Result<Vec<freebie::Model>> {
    let freebies = dev
      .find_related(freebie::Entity)
      .order_by_asc(freebie::Column::Id)
      .all(self.db)
      .await?;
    Ok(freebies)
  }

  pub async fn companies(
    &self,
    dev: &dev::Model,
  ) -> Result<Vec<company::Model>> {
    let companies = dev
      .find_related(company::Entity)
      .order_by_asc(company::Column::Id)
      .all(self.db)
      .await?;
    Ok(companies)
  }

  /// Whether `dev` currently owns a freebie named exactly `item_name`.
  pub async fn received_one(
    &self,
    dev: &dev::Model,
    item_name: &str,
  ) -> Result<bool> {
    let freebies = self.freebies(dev).await?;
    Ok(freebies.iter().any(|freebie| freebie.item_name == item_name))
  }

  /// Moves `freebie` from `dev` to `target`.
  ///
  /// Ownership is checked against the stored row. When `dev` does not own
  /// the freebie nothing changes and `None` is returned; otherwise the
  /// updated freebie is returned.
  pub async fn give_away(
    &self,
    dev: &dev::Model,
    target: &dev::Model,
    freebie: &freebie::Model,
  ) -> Result<Option<freebie::Model>> {
    let txn = self.db.begin().await?;

    let owned = freebie::Entity::find_by_id(freebie.id)
      .filter(freebie::Column::DevId.eq(dev.id))
      .one(&txn)
      .await?;

    let Some(owned) = owned else {
      txn.rollback().await?;
      debug!("{dev} does not own freebie {}, skipping give away", freebie.id);
      return Ok(None);
    };

    let moved =
      freebie::ActiveModel { dev_id: Set(Some(target.id)), ..owned.into() }
        .update(&txn)
        .await?;

    txn.commit().await?;
    info!("{dev} gave {} away to {target}", moved.item_name);
    Ok(Some(moved))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{sv, testing::setup_test_db};

  struct Fixture {
    company: company::Model,
    ada: dev::Model,
    bob: dev::Model,
  }

  async fn fixture(db: &DatabaseConnection) -> Fixture {
    let devs = Dev::new(db);
    Fixture {
      company: sv::Company::new(db).create("Acme", 2001).await.unwrap(),
      ada: devs.create("Ada").await.unwrap(),
      bob: devs.create("Bob").await.unwrap(),
    }
  }

  #[tokio::test]
  async fn test_received_one() {
    let db = setup_test_db().await;
    let Fixture { company, ada, bob } = fixture(&db).await;
    let sv = Dev::new(&db);

    sv::Company::new(&db)
      .give_freebie(&company, &ada, "T-shirt", Some(20))
      .await
      .unwrap();

    assert!(sv.received_one(&ada, "T-shirt").await.unwrap());
    assert!(!sv.received_one(&ada, "t-shirt").await.unwrap());
    assert!(!sv.received_one(&ada, "Mug").await.unwrap());
    assert!(!sv.received_one(&bob, "T-shirt").await.unwrap());
  }

  #[tokio::test]
  async fn test_give_away() {
    let db = setup_test_db().await;
    let Fixture { company, ada, bob } = fixture(&db).await;
    let sv = Dev::new(&db);

    let mug = sv::Company::new(&db)
      .give_freebie(&company, &ada, "Mug", Some(10))
      .await
      .unwrap();

    let moved = sv.give_away(&ada, &bob, &mug).await.unwrap().unwrap();

    assert_eq!(moved.id, mug.id);
    assert_eq!(moved.dev_id, Some(bob.id));
    assert!(sv.freebies(&ada).await.unwrap().is_empty());
    assert_eq!(sv.freebies(&bob).await.unwrap(), vec![moved]);
    assert!(sv.received_one(&bob, "Mug").await.unwrap());
  }

  #[tokio::test]
  async fn test_give_away_not_owned() {
    let db = setup_test_db().await;
    let Fixture { company, ada, bob } = fixture(&db).await;
    let sv = Dev::new(&db);
    let carol = sv.create("Carol").await.unwrap();

    let mug = sv::Company::new(&db)
      .give_freebie(&company, &ada, "Mug", Some(10))
      .await
      .unwrap();

    assert_eq!(sv.give_away(&bob, &carol, &mug).await.unwrap(), None);

    assert_eq!(sv.freebies(&ada).await.unwrap(), vec![mug]);
    assert!(sv.freebies(&bob).await.unwrap().is_empty());
    assert!(sv.freebies(&carol).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_give_away_uses_stored_owner() {
    let db = setup_test_db().await;
    let Fixture { company, ada, bob } = fixture(&db).await;
    let sv = Dev::new(&db);

    let stale = sv::Company::new(&db)
      .give_freebie(&company, &ada, "Sticker", Some(5))
      .await
      .unwrap();
    sv.give_away(&ada, &bob, &stale).await.unwrap().unwrap();

    // `stale` still says ada, but bob owns it now
    assert_eq!(sv.give_away(&ada, &ada, &stale).await.unwrap(), None);
    assert!(sv.received_one(&bob, "Sticker").await.unwrap());
  }

  #[tokio::test]
  async fn test_delete_cascades_freebies() {
    let db = setup_test_db().await;
    let Fixture { company, ada, bob } = fixture(&db).await;
    let sv = Dev::new(&db);
    let companies = sv::Company::new(&db);

    companies.give_freebie(&company, &ada, "Mug", None).await.unwrap();
    let pin = companies.give_freebie(&company, &bob, "Pin", None).await.unwrap();
    companies.add_dev(&company, &ada).await.unwrap();

    sv.delete(ada.id).await.unwrap();

    assert_eq!(sv.all().await.unwrap(), vec![bob]);
    assert_eq!(companies.freebies(&company).await.unwrap(), vec![pin]);
    assert!(companies.devs(&company).await.unwrap().is_empty());

    assert!(matches!(sv.delete(ada.id).await, Err(Error::DevNotFound(_))));
  }

  #[tokio::test]
  async fn test_rename() {
    let db = setup_test_db().await;
    let sv = Dev::new(&db);

    let dev = sv.create("Ada").await.unwrap();
    let dev = sv.rename(dev.id, "Ada Lovelace").await.unwrap();

    assert_eq!(sv.by_id(dev.id).await.unwrap().unwrap().name, "Ada Lovelace");
    assert_eq!(dev.to_string(), "<Dev Ada Lovelace>");
  }
}
