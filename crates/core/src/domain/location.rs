// PlaceLocation Domain Model

use serde::{Deserialize, Serialize};

/// Location ID (store-generated integer key)
pub type LocationId = i64;

/// A physical place a coffee was reviewed at, as persisted.
///
/// Referenced by zero or more coffees via `coffee.location_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Location fields accepted when creating a coffee. The place name
/// travels separately as the `place` field of [`NewCoffee`].
///
/// [`NewCoffee`]: crate::domain::NewCoffee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Location fields accepted on update; carries its own identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub id: LocationId,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The nested `location` object of a [`CoffeeView`]. The place name is
/// flattened out of this shape into the view's `place` field.
///
/// [`CoffeeView`]: crate::domain::CoffeeView
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationView {
    pub id: LocationId,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}
