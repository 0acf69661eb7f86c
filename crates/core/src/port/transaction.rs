// Transaction port for atomic paired writes

use crate::domain::{Coffee, CoffeeId, CoffeeUpdate, LocationUpdate, NewCoffee, NewLocation,
    PlaceLocation};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations.
///
/// Both finishers consume the handle, so the underlying connection is
/// released exactly once on every exit path (dropping an unfinished
/// handle also releases it, rolling the transaction back).
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Write access to the coffee catalog via scoped transactions.
#[async_trait]
pub trait TransactionalCoffeeRepository: Send + Sync {
    /// Check out a dedicated connection and begin a transaction.
    async fn begin_transaction(&self) -> Result<Box<dyn CoffeeWriteTransaction>>;
}

/// Statements available within a coffee write transaction.
///
/// All statements run sequentially on the same dedicated connection;
/// nothing else interleaves between begin and commit/rollback.
#[async_trait]
pub trait CoffeeWriteTransaction: Transaction {
    /// Insert a place_location row; returns the inserted row including
    /// its generated identity.
    async fn insert_location(
        &mut self,
        name: &str,
        location: &NewLocation,
    ) -> Result<PlaceLocation>;

    /// Insert a coffee row referencing `location_id`; returns the raw
    /// inserted row.
    async fn insert_coffee(&mut self, input: &NewCoffee, location_id: i64) -> Result<Coffee>;

    /// Update a place_location row by `location.id`; returns the number
    /// of rows affected.
    async fn update_location(&mut self, name: &str, location: &LocationUpdate) -> Result<u64>;

    /// Update a coffee row by id; `None` when no row matched.
    async fn update_coffee(&mut self, id: CoffeeId, input: &CoffeeUpdate)
        -> Result<Option<Coffee>>;
}
