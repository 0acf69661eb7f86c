// Coffee Repository Port (Interface) - read side

use crate::domain::{CoffeeId, CoffeeView};
use crate::error::Result;
use async_trait::async_trait;

/// Read access to the coffee catalog (coffee joined with its place).
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// All coffees with their location attributes. Empty catalog is Ok.
    async fn list_all(&self) -> Result<Vec<CoffeeView>>;

    /// Single coffee by primary key; `None` when no row matches.
    async fn find_by_id(&self, id: CoffeeId) -> Result<Option<CoffeeView>>;
}
