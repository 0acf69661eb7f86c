// SQLite Transaction Implementation

use crate::coffee_repository::{map_sqlx_error, parse_coordinate, CoffeeRow};
use async_trait::async_trait;
use brewlog_core::domain::{Coffee, CoffeeId, CoffeeUpdate, NewCoffee, NewLocation,
    LocationUpdate, PlaceLocation};
use brewlog_core::error::Result;
use brewlog_core::port::{CoffeeWriteTransaction, Transaction};
use sqlx::{Sqlite, Transaction as SqlxTransaction};

/// One checked-out connection running the paired write statements.
/// Commit, rollback, and drop all hand the connection back to the pool.
pub struct SqliteCoffeeTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
}

impl<'a> SqliteCoffeeTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Transaction for SqliteCoffeeTransaction<'_> {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl CoffeeWriteTransaction for SqliteCoffeeTransaction<'_> {
    async fn insert_location(
        &mut self,
        name: &str,
        location: &NewLocation,
    ) -> Result<PlaceLocation> {
        let row: LocationRow = sqlx::query_as(
            r#"
            INSERT INTO place_location (name, address, city, latitude, longitude)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(&location.address)
        .bind(&location.city)
        .bind(location.latitude.to_string())
        .bind(location.longitude.to_string())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        row.into_place_location()
    }

    async fn insert_coffee(&mut self, input: &NewCoffee, location_id: i64) -> Result<Coffee> {
        let row: CoffeeRow = sqlx::query_as(
            r#"
            INSERT INTO coffee (name, rating, type, notes, location_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.rating)
        .bind(&input.coffee_type)
        .bind(&input.notes)
        .bind(location_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_coffee())
    }

    async fn update_location(&mut self, name: &str, location: &LocationUpdate) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE place_location
            SET name = ?, address = ?, city = ?, latitude = ?, longitude = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(&location.address)
        .bind(&location.city)
        .bind(location.latitude.to_string())
        .bind(location.longitude.to_string())
        .bind(location.id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_coffee(
        &mut self,
        id: CoffeeId,
        input: &CoffeeUpdate,
    ) -> Result<Option<Coffee>> {
        let row: Option<CoffeeRow> = sqlx::query_as(
            r#"
            UPDATE coffee
            SET name = ?, rating = ?, type = ?, notes = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.rating)
        .bind(&input.coffee_type)
        .bind(&input.notes)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_coffee()))
    }
}

/// Raw `place_location` table row.
#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: i64,
    name: String,
    address: String,
    city: String,
    latitude: String,
    longitude: String,
}

impl LocationRow {
    fn into_place_location(self) -> Result<PlaceLocation> {
        let latitude = parse_coordinate("latitude", &self.latitude)?;
        let longitude = parse_coordinate("longitude", &self.longitude)?;

        Ok(PlaceLocation {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            latitude,
            longitude,
        })
    }
}
