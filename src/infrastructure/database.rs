//! Pooled SQLite connection

use di::inject;
use di::injectable;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

static TEST_POOL: Mutex<Option<SqlitePool>> = Mutex::new(None);

pub struct DatabaseConnection {
    connection: SqlitePool,
}

#[injectable]
impl DatabaseConnection {
    #[inject]
    pub fn create() -> DatabaseConnection {
        if let Some(pool) = TEST_POOL.lock().unwrap().clone() {
            return DatabaseConnection { connection: pool };
        }

        dotenvy::dotenv().ok();
        let connection_string = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy(&connection_string)
            .expect("Cannot connect to database");

        DatabaseConnection { connection: pool }
    }
}

impl DatabaseConnection {
    /// Overrides the pool used by DI-created connections. The `more-di`
    /// provider constructs `DatabaseConnection` itself, so tests cannot hand
    /// it a pool; they set a global one instead.
    pub fn set_test_pool(pool: SqlitePool) {
        *TEST_POOL.lock().unwrap() = Some(pool);
    }

    pub fn clear_test_pool() {
        *TEST_POOL.lock().unwrap() = None;
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for DatabaseConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}
