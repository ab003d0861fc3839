use std::env;
use std::error::Error;

use uuid::Uuid;

pub mod error;
pub mod queries;
pub mod rows;

pub use error::{DatabaseError, Result};
pub use rows::{NewTripPlan, TripPlanRecord, TripPlanRow};

pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Option<Self> {
        let username = env::var("DATABASE_USER").ok()?;
        let password = env::var("DATABASE_PASSWORD").ok()?;
        let hostname = env::var("DATABASE_HOST").ok()?;
        let port: u16 = env::var("DATABASE_PORT").ok()?.parse().ok()?;
        let database = env::var("DATABASE_NAME").ok()?;
        Some(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub(self) fn postgres_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.hostname, self.port, self.database
        )
    }
}

#[derive(Clone)]
pub struct PgDatabase {
    pool: sqlx::PgPool,
}

impl PgDatabase {
    pub async fn connect(connection_info: &DatabaseConnectionInfo) -> Result<Self, Box<dyn Error>> {
        let url = connection_info.postgres_url();
        let pool = sqlx::postgres::PgPool::connect(&url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Runs [`queries::insert_trip_plan`] and its children inside one
    /// transaction so a partial failure leaves nothing behind.
    pub async fn insert_plan(&self, plan: &NewTripPlan) -> error::Result<Uuid> {
        let mut tx = self.pool.begin().await.map_err(error::convert_error)?;
        let id = queries::insert_trip_plan(&mut tx, plan).await?;
        tx.commit().await.map_err(error::convert_error)?;
        Ok(id)
    }

    pub async fn list_plans(&self) -> error::Result<Vec<TripPlanRow>> {
        queries::list_trip_plans(&self.pool).await
    }

    pub async fn get_plan(&self, id: Uuid) -> error::Result<TripPlanRecord> {
        queries::get_trip_plan(&self.pool, id).await
    }
}
