// Coffee Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::location::{LocationId, LocationUpdate, LocationView, NewLocation};

/// Coffee ID (store-generated integer key)
pub type CoffeeId = i64;

/// A coffee review as persisted: the raw `coffee` table row.
///
/// This is what create/update hand back to callers. Reads go through
/// [`CoffeeView`] instead, which joins in the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub rating: i32,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub notes: String,
    pub location_id: LocationId,
}

/// Input shape for creating a coffee together with its place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoffee {
    pub name: String,
    pub place: String,
    pub rating: i32,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub notes: String,
    pub location: NewLocation,
}

/// Input shape for updating a coffee and its place in one unit of work.
/// The location must carry its own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeUpdate {
    pub name: String,
    pub place: String,
    pub rating: i32,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub notes: String,
    pub location: LocationUpdate,
}

/// API-facing read shape: a coffee joined with its place, with the place
/// name flattened into `place` and the remaining location attributes
/// nested under `location`. The raw paired entity is never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeView {
    pub id: CoffeeId,
    pub name: String,
    pub rating: i32,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub notes: String,
    pub place: String,
    pub location: LocationView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_serializes_flattened_shape() {
        let view = CoffeeView {
            id: 1,
            name: "Espresso".to_string(),
            rating: 5,
            coffee_type: "espresso".to_string(),
            notes: String::new(),
            place: "Blue Bottle".to_string(),
            location: LocationView {
                id: 7,
                address: "1 Main St".to_string(),
                city: "Oakland".to_string(),
                latitude: 37.8,
                longitude: -122.27,
            },
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["place"], "Blue Bottle");
        assert_eq!(json["type"], "espresso");
        assert_eq!(json["location"]["id"], 7);
        assert!(json["location"]["latitude"].is_f64());
        assert!(json.get("placeLocation").is_none());
        assert!(json.get("coffee_type").is_none());
    }

    #[test]
    fn test_new_coffee_deserializes_type_field() {
        let input: NewCoffee = serde_json::from_str(
            r#"{
                "name": "Flat White",
                "place": "Corner Cafe",
                "rating": 4,
                "type": "milk",
                "notes": "smooth",
                "location": {
                    "address": "2 Side St",
                    "city": "Berkeley",
                    "latitude": 37.87,
                    "longitude": -122.27
                }
            }"#,
        )
        .unwrap();

        assert_eq!(input.coffee_type, "milk");
        assert_eq!(input.location.city, "Berkeley");
    }
}
