// Create Use Case

use super::rollback_with;
use crate::domain::{Coffee, NewCoffee};
use crate::error::Result;
use crate::port::TransactionalCoffeeRepository;

/// Create a coffee together with its place as a single unit of work.
///
/// The location goes in first so its generated identity can be wired
/// into the coffee row. Any statement failure rolls both inserts back;
/// no partial state is left behind.
pub async fn execute(
    repo: &dyn TransactionalCoffeeRepository,
    input: NewCoffee,
) -> Result<Coffee> {
    let mut tx = repo.begin_transaction().await?;

    let location = match tx.insert_location(&input.place, &input.location).await {
        Ok(location) => location,
        Err(e) => return rollback_with(tx, e).await,
    };

    let coffee = match tx.insert_coffee(&input, location.id).await {
        Ok(coffee) => coffee,
        Err(e) => return rollback_with(tx, e).await,
    };

    tx.commit().await?;

    tracing::debug!(coffee_id = coffee.id, location_id = location.id, "coffee created");
    Ok(coffee)
}
