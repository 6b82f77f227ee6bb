use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    query,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
};

pub mod keywords;
pub mod learned;

pub use keywords::KeywordRepository;
pub use learned::LearnedPatternRepository;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS keywords (
        category_position INTEGER NOT NULL,
        position INTEGER NOT NULL,
        category TEXT NOT NULL,
        keyword TEXT NOT NULL,
        PRIMARY KEY (category_position, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS store_meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS learned_domains (
        domain TEXT PRIMARY KEY,
        category TEXT NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS learned_senders (
        sender_name TEXT PRIMARY KEY,
        category TEXT NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS learned_phrases (
        category TEXT NOT NULL,
        phrase TEXT NOT NULL,
        updated_at INTEGER NOT NULL,
        PRIMARY KEY (category, phrase)
    )
    "#,
];

pub async fn init_pool(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path.display()))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    for statement in SCHEMA {
        query(statement).execute(&pool).await?;
    }

    Ok(pool)
}

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::sqlite::SqlitePool;
    use tempfile::TempDir;

    /// A pool over a throwaway database file. Keep the directory alive for as
    /// long as the pool is used.
    pub async fn temp_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("temp dir");
        let pool = super::init_pool(&dir.path().join("test.db"))
            .await
            .expect("init pool");
        (dir, pool)
    }
}
