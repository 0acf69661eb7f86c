// Domain Layer - Pure entities and API-facing view shapes

pub mod coffee;
pub mod location;

// Re-exports
pub use coffee::{Coffee, CoffeeId, CoffeeUpdate, CoffeeView, NewCoffee};
pub use location::{LocationId, LocationUpdate, LocationView, NewLocation, PlaceLocation};
