use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    role TEXT NOT NULL
)"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT,
    measure TEXT,
    target INTEGER,
    unit TEXT,
    assignedTo TEXT,
    status TEXT,
    assignedBy TEXT,
    assignedTime TEXT
)"#;

/// Tables created by [`ensure_schema`].
pub const SCHEMA_TABLES: [&str; 2] = ["users", "tasks"];

/// Creates `users` and `tasks` when missing. Existing tables and rows are left alone.
pub async fn ensure_schema(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;
    Ok(())
}

pub mod repositories;
