// Update Use Case

use super::rollback_with;
use crate::domain::{Coffee, CoffeeId, CoffeeUpdate};
use crate::error::{AppError, Result};
use crate::port::TransactionalCoffeeRepository;

/// Update a coffee and its place as a single unit of work.
///
/// Both updates are keyed by their own identities (`input.location.id`
/// and `id`). A target matching zero rows is surfaced as `NotFound`
/// after rollback, never as an empty success.
pub async fn execute(
    repo: &dyn TransactionalCoffeeRepository,
    id: CoffeeId,
    input: CoffeeUpdate,
) -> Result<Coffee> {
    let mut tx = repo.begin_transaction().await?;

    let location_rows = match tx.update_location(&input.place, &input.location).await {
        Ok(rows) => rows,
        Err(e) => return rollback_with(tx, e).await,
    };
    if location_rows == 0 {
        let err = AppError::NotFound(format!("place location {} not found", input.location.id));
        return rollback_with(tx, err).await;
    }

    let updated = match tx.update_coffee(id, &input).await {
        Ok(updated) => updated,
        Err(e) => return rollback_with(tx, e).await,
    };
    let Some(coffee) = updated else {
        let err = AppError::NotFound(format!("coffee {} not found", id));
        return rollback_with(tx, err).await;
    };

    tx.commit().await?;

    tracing::debug!(coffee_id = coffee.id, "coffee updated");
    Ok(coffee)
}
