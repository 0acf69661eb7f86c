// SQLite CoffeeRepository Implementation

use crate::SqliteCoffeeTransaction;
use async_trait::async_trait;
use brewlog_core::domain::{Coffee, CoffeeId, CoffeeView, LocationView};
use brewlog_core::error::{AppError, Result};
use brewlog_core::port::{CoffeeRepository, CoffeeWriteTransaction, TransactionalCoffeeRepository};
use sqlx::SqlitePool;

/// Join query shared by the read operations. The column aliases are a
/// contract: callers of the raw row shape rely on these exact names.
const COFFEE_JOIN_SQL: &str = r#"
    SELECT
        c.id AS coffee_id,
        c.name AS coffee_name,
        c.rating,
        c.type,
        c.notes,
        pl.id AS location_id,
        pl.name AS location_name,
        pl.address,
        pl.city,
        pl.latitude,
        pl.longitude
    FROM coffee c
    JOIN place_location pl ON c.location_id = pl.id
"#;

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => AppError::Database(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "787" | "3850" => AppError::Database(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => AppError::Database(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        _ => AppError::Database(err.to_string()),
    }
}

/// The driver may hand coordinates back as text; views always carry floats.
pub(crate) fn parse_coordinate(column: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| AppError::Database(format!("non-numeric {} value: {:?}", column, raw)))
}

pub struct SqliteCoffeeRepository {
    pool: SqlitePool,
}

impl SqliteCoffeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoffeeRepository for SqliteCoffeeRepository {
    async fn list_all(&self) -> Result<Vec<CoffeeView>> {
        let rows: Vec<CoffeeJoinRow> = sqlx::query_as(COFFEE_JOIN_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(|row| row.into_view()).collect()
    }

    async fn find_by_id(&self, id: CoffeeId) -> Result<Option<CoffeeView>> {
        let sql = format!("{} WHERE c.id = ?", COFFEE_JOIN_SQL);
        let row: Option<CoffeeJoinRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(|r| r.into_view()).transpose()
    }
}

#[async_trait]
impl TransactionalCoffeeRepository for SqliteCoffeeRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn CoffeeWriteTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteCoffeeTransaction::new(tx)))
    }
}

/// One row of the coffee ⋈ place_location join.
#[derive(Debug, sqlx::FromRow)]
struct CoffeeJoinRow {
    coffee_id: i64,
    coffee_name: String,
    rating: i32,
    #[sqlx(rename = "type")]
    coffee_type: String,
    notes: String,
    location_id: i64,
    location_name: String,
    address: String,
    city: String,
    latitude: String,
    longitude: String,
}

impl CoffeeJoinRow {
    /// Pure projection into the nested view shape: the place name is
    /// flattened into `place`, everything else about the location nests
    /// under `location`. Builds only the final shape.
    fn into_view(self) -> Result<CoffeeView> {
        let latitude = parse_coordinate("latitude", &self.latitude)?;
        let longitude = parse_coordinate("longitude", &self.longitude)?;

        Ok(CoffeeView {
            id: self.coffee_id,
            name: self.coffee_name,
            rating: self.rating,
            coffee_type: self.coffee_type,
            notes: self.notes,
            place: self.location_name,
            location: LocationView {
                id: self.location_id,
                address: self.address,
                city: self.city,
                latitude,
                longitude,
            },
        })
    }
}

/// Raw `coffee` table row, as returned by the insert/update statements.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CoffeeRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) rating: i32,
    #[sqlx(rename = "type")]
    pub(crate) coffee_type: String,
    pub(crate) notes: String,
    pub(crate) location_id: i64,
}

impl CoffeeRow {
    pub(crate) fn into_coffee(self) -> Coffee {
        Coffee {
            id: self.id,
            name: self.name,
            rating: self.rating,
            coffee_type: self.coffee_type,
            notes: self.notes,
            location_id: self.location_id,
        }
    }
}
