// List Use Case

use crate::domain::CoffeeView;
use crate::error::Result;
use crate::port::CoffeeRepository;

/// All coffees with their locations, in the store's natural row order.
pub async fn execute(repo: &dyn CoffeeRepository) -> Result<Vec<CoffeeView>> {
    repo.list_all().await
}
