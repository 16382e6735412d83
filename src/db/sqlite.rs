//! SQLite-backed persistence medium.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path` and ensure tables exist.
    /// `":memory:"` opens a throwaway in-memory database for tests.
    pub fn new(path: &str) -> Result<Self, String> {
        let (manager, max_size) = if path == ":memory:" {
            // A :memory: pool wider than one connection would hand each
            // checkout its own empty database.
            (SqliteConnectionManager::memory(), 1)
        } else {
            if let Some(dir) = Path::new(path).parent() {
                if !dir.as_os_str().is_empty() {
                    std::fs::create_dir_all(dir)
                        .map_err(|e| format!("Failed to create database directory: {}", e))?;
                }
            }
            let manager = SqliteConnectionManager::file(path).with_init(|conn| {
                conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            });
            (manager, 8)
        };

        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(|e| format!("Failed to create connection pool: {}", e))?;

        let db = Database { pool };
        db.create_tables()?;
        Ok(db)
    }

    fn create_tables(&self) -> Result<(), String> {
        let conn = self.conn()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS collections (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )
        .map_err(|e| format!("Failed to create tables: {}", e))?;
        Ok(())
    }

    pub(crate) fn conn(&self) -> Result<DbConn, String> {
        self.pool
            .get()
            .map_err(|e| format!("Failed to get database connection: {}", e))
    }
}
