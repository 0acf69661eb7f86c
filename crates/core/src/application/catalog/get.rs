// Get Use Case

use crate::domain::{CoffeeId, CoffeeView};
use crate::error::{AppError, Result};
use crate::port::CoffeeRepository;

/// Look up a single coffee; a missing id is `NotFound`, distinct from
/// any store failure.
pub async fn execute(repo: &dyn CoffeeRepository, id: CoffeeId) -> Result<CoffeeView> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("coffee {} not found", id)))
}
