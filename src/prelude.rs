pub use sea_orm::{
  ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection,
  EntityTrait, ModelTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
  Set, TransactionTrait,
};
pub use tracing::{debug, info, warn};

pub use crate::error::{Error, Result};
