// Port Layer - Interfaces for external dependencies

pub mod coffee_repository;
pub mod transaction;

// Re-exports
pub use coffee_repository::CoffeeRepository;
pub use transaction::{CoffeeWriteTransaction, Transaction, TransactionalCoffeeRepository};
