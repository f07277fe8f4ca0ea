//! Seeds the freebies store and prints what ended up in it.

use anyhow::Context;
use freebies::{Config, Store, prelude::*};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "freebies=debug,sea_orm=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  info!("Starting freebies seeder v{}", env!("CARGO_PKG_VERSION"));

  let store =
    Store::open(Config::from_env()).await.context("Failed to open store")?;
  let seeded = store.seed().await.context("Failed to seed store")?;

  info!("Database seeded successfully!");

  let sv = store.sv();
  for company in &seeded.companies {
    info!("{company}");
  }
  for dev in &seeded.devs {
    info!("{dev}");
  }
  for freebie in &seeded.freebies {
    let details = sv.freebie.details(freebie.id).await?;
    info!("{details}: {}", details.ownership());
  }

  if let Some(oldest) = sv.company.oldest().await? {
    info!("Oldest company: {oldest}");
  }

  store.close().await?;
  Ok(())
}
