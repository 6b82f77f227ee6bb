use sqlx::{query, query_as, sqlite::SqlitePool};

use crate::domain::{KeywordSet, KeywordStore};

const SAVED_MARKER: &str = "keywords_saved_at";

/// Persists the user's keyword lists. Until the first save the bundled
/// defaults are served.
#[derive(Clone)]
pub struct KeywordRepository {
    pool: SqlitePool,
}

impl KeywordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn load(&self) -> Result<KeywordStore, sqlx::Error> {
        let saved: Option<(String,)> = query_as(r#"SELECT value FROM store_meta WHERE key = ?1"#)
            .bind(SAVED_MARKER)
            .fetch_optional(&self.pool)
            .await?;
        if saved.is_none() {
            return Ok(KeywordStore::defaults());
        }

        let rows: Vec<(String, String)> = query_as(
            r#"SELECT category, keyword FROM keywords ORDER BY category_position, position"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut store = KeywordStore::default();
        for (category, keyword) in rows {
            store.push(&category, keyword);
        }
        Ok(store)
    }

    /// Replaces the whole store in one transaction.
    pub async fn save(&self, store: &KeywordStore) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        query(r#"DELETE FROM keywords"#).execute(&mut *tx).await?;

        for (category_position, KeywordSet { category, keywords }) in
            store.sets().iter().enumerate()
        {
            for (position, keyword) in keywords.iter().enumerate() {
                query(
                    r#"INSERT INTO keywords (category_position, position, category, keyword)
                        VALUES (?1, ?2, ?3, ?4)"#,
                )
                .bind(category_position as i64)
                .bind(position as i64)
                .bind(category)
                .bind(keyword)
                .execute(&mut *tx)
                .await?;
            }
        }

        query(r#"INSERT OR REPLACE INTO store_meta (key, value) VALUES (?1, ?2)"#)
            .bind(SAVED_MARKER)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(
            target: "store",
            categories = store.sets().len(),
            keywords = store.total_keywords(),
            "keyword store saved"
        );
        Ok(())
    }
}
