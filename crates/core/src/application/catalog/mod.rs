// Catalog Service - Core use cases for the coffee catalog

pub mod create;
pub mod get;
pub mod list;
pub mod update;

use crate::domain::{Coffee, CoffeeId, CoffeeUpdate, CoffeeView, NewCoffee};
use crate::error::{AppError, Result};
use crate::port::{CoffeeRepository, CoffeeWriteTransaction, TransactionalCoffeeRepository};
use std::sync::Arc;

/// Catalog Service - entry point for the HTTP layer
pub struct CatalogService {
    coffees: Arc<dyn CoffeeRepository>,
    writer: Arc<dyn TransactionalCoffeeRepository>,
}

impl CatalogService {
    pub fn new(
        coffees: Arc<dyn CoffeeRepository>,
        writer: Arc<dyn TransactionalCoffeeRepository>,
    ) -> Self {
        Self { coffees, writer }
    }

    /// All coffees with their locations
    pub async fn list(&self) -> Result<Vec<CoffeeView>> {
        list::execute(self.coffees.as_ref()).await
    }

    /// Single coffee by id
    pub async fn get(&self, id: CoffeeId) -> Result<CoffeeView> {
        get::execute(self.coffees.as_ref(), id).await
    }

    /// Create a coffee together with its place
    pub async fn create(&self, input: NewCoffee) -> Result<Coffee> {
        create::execute(self.writer.as_ref(), input).await
    }

    /// Update a coffee and its place in one unit of work
    pub async fn update(&self, id: CoffeeId, input: CoffeeUpdate) -> Result<Coffee> {
        update::execute(self.writer.as_ref(), id, input).await
    }
}

/// Roll back an open transaction, then propagate the original error.
/// A rollback failure is logged rather than returned; the statement
/// error is what the caller needs to see.
pub(crate) async fn rollback_with<T>(
    tx: Box<dyn CoffeeWriteTransaction>,
    err: AppError,
) -> Result<T> {
    if let Err(rollback_err) = tx.rollback().await {
        tracing::error!(error = %rollback_err, "rollback failed after statement error");
    }
    Err(err)
}
