use crate::{entity::*, prelude::*};

pub struct Company<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Company<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(
    &self,
    name: impl Into<String>,
    founding_year: i32,
  ) -> Result<company::Model> {
    let company = company::ActiveModel {
      id: NotSet,
      name: Set(name.into()),
      founding_year: Set(founding_year),
    };

    Ok(company.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<Option<company::Model>> {
    let company = company::Entity::find_by_id(id).one(self.db).await?;
    Ok(company)
  }

  pub async fn all(&self) -> Result<Vec<company::Model>> {
    let companies = company::Entity::find()
      .order_by_asc(company::Column::Id)
      .all(self.db)
      .await?;
    Ok(companies)
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(company::Entity::find().count(self.db).await?)
  }

  pub async fn rename(
    &self,
    id: i32,
    name: impl Into<String>,
  ) -> Result<company::Model> {
    let company = company::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::CompanyNotFound(id))?;

    let company = company::ActiveModel { name: Set(name.into()), ..company.into() }
      .update(self.db)
      .await?;

    Ok(company)
  }

  pub async fn set_founding_year(
    &self,
    id: i32,
    founding_year: i32,
  ) -> Result<company::Model> {
    let company = company::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::CompanyNotFound(id))?;

    let company = company::ActiveModel {
      founding_year: Set(founding_year),
      ..company.into()
    }
    .update(self.db)
    .await?;

    Ok(company)
  }

  /// Deletes the company together with its dev links. Its freebies go
  /// with it through the `ON DELETE CASCADE` foreign key.
  pub async fn delete(&self, id: i32) -> Result<()> {
    let txn = self.db.begin().await?;

    dev_company::Entity::delete_many()
      .filter(dev_company::Column::CompanyId.eq(id))
      .exec(&txn)
      .await?;

    let res = company::Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
      txn.rollback().await?;
      return Err(Error::CompanyNotFound(id));
    }

    txn.commit().await?;
    info!("Company {id} deleted");
    Ok(())
  }

  /// Hands a new freebie from `company` to `dev`, persisted right away.
  pub async fn give_freebie(
    &self,
    company: &company::Model,
    dev: &dev::Model,
    item_name: impl Into<String>,
    value: Option<i32>,
  ) -> Result<freebie::Model> {
    let freebie = freebie::ActiveModel {
      id: NotSet,
      item_name: Set(item_name.into()),
      value: Set(value),
      dev_id: Set(Some(dev.id)),
      company_id: Set(Some(company.id)),
    }
    .insert(self.db)
    .await?;

    debug!("{company} gave {} to {dev}", freebie.item_name);
    Ok(freebie)
  }

  /// Company with the smallest founding year; ties resolve in store order.
  pub async fn oldest(&self) -> Result<Option<company::Model>> {
    let company = company::Entity::find()
      .order_by_asc(company::Column::FoundingYear)
      .one(self.db)
      .await?;
    Ok(company)
  }

  pub async fn freebies(
    &self,
    company: &company::Model,
  ) -> Result<Vec<freebie::Model>> {
    let freebies = company
      .find_related(freebie::Entity)
      .order_by_asc(freebie::Column::Id)
      .all(self.db)
      .await?;
    Ok(freebies)
  }

  pub async fn devs(&self, company: &company::Model) -> Result<Vec<dev::Model>> {
    let devs = company
      .find_related(dev::Entity)
      .order_by_asc(dev::Column::Id)
      .all(self.db)
      .await?;
    Ok(devs)
  }

  /// Links a dev to the company. Linking the same pair twice stores two rows.
  pub async fn add_dev(
    &self,
    company: &company::Model,
    dev: &dev::Model,
  ) -> Result<()> {
    dev_company::Entity::insert(dev_company::ActiveModel {
      dev_id: Set(dev.id),
      company_id: Set(company.id),
    })
    .exec_without_returning(self.db)
    .await?;

    Ok(())
  }

  pub async fn remove_dev(
    &self,
    company: &company::Model,
    dev: &dev::Model,
  ) -> Result<u64> {
    let res = dev_company::Entity::delete_many()
      .filter(dev_company::Column::CompanyId.eq(company.id))
      .filter(dev_company::Column::DevId.eq(dev.id))
      .exec(self.db)
      .await?;
    Ok(res.rows_affected)
  }
}
