// Brewlog Infrastructure - SQLite Adapter
// Implements: CoffeeRepository, TransactionalCoffeeRepository

mod coffee_repository;
mod connection;
mod migration;
mod transaction;

pub use coffee_repository::SqliteCoffeeRepository;
pub use connection::{close_pool, create_pool};
pub use migration::run_migrations;
pub use transaction::SqliteCoffeeTransaction;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
