use chrono::Utc;
use sqlx::{query, query_as, sqlite::SqlitePool, Sqlite, Transaction};

use crate::domain::{LearnedPatterns, LearnedSummary};

/// Table and key column for each learned mapping; used for capacity eviction.
const LEARNED_TABLES: &[(&str, &str)] = &[
    ("learned_domains", "domain"),
    ("learned_senders", "sender_name"),
    ("learned_phrases", "category || char(31) || phrase"),
];

/// Patterns learned from user corrections. Every table is capped at
/// `max_entries` rows; the least recently updated rows are evicted first.
#[derive(Clone)]
pub struct LearnedPatternRepository {
    pool: SqlitePool,
    max_entries: u32,
}

impl LearnedPatternRepository {
    /// A cap below one is raised to one so the newest row always survives.
    pub fn new(pool: SqlitePool, max_entries: u32) -> Self {
        Self {
            pool,
            max_entries: max_entries.max(1),
        }
    }

    pub async fn load(&self) -> Result<LearnedPatterns, sqlx::Error> {
        let mut learned = LearnedPatterns::default();

        let domains: Vec<(String, String)> =
            query_as(r#"SELECT domain, category FROM learned_domains"#)
                .fetch_all(&self.pool)
                .await?;
        learned.domains.extend(domains);

        let senders: Vec<(String, String)> =
            query_as(r#"SELECT sender_name, category FROM learned_senders"#)
                .fetch_all(&self.pool)
                .await?;
        learned.sender_names.extend(senders);

        let phrases: Vec<(String, String)> =
            query_as(r#"SELECT category, phrase FROM learned_phrases"#)
                .fetch_all(&self.pool)
                .await?;
        for (category, phrase) in phrases {
            learned
                .subject_phrases
                .entry(category)
                .or_default()
                .insert(phrase);
        }

        Ok(learned)
    }

    /// Maps `domain` to `category`, overwriting any earlier mapping.
    pub async fn record_domain(&self, domain: &str, category: &str) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        upsert_domain(&mut tx, domain, category, Utc::now().timestamp_millis()).await?;
        self.evict(&mut tx).await?;
        tx.commit().await
    }

    /// Merges `patterns` into the store; imported entries win over existing
    /// ones with the same key.
    pub async fn import(&self, patterns: &LearnedPatterns) -> Result<(), sqlx::Error> {
        let now = Utc::now().timestamp_millis();
        let mut tx = self.pool.begin().await?;

        for (domain, category) in &patterns.domains {
            upsert_domain(&mut tx, domain, category, now).await?;
        }
        for (sender_name, category) in &patterns.sender_names {
            query(
                r#"INSERT INTO learned_senders (sender_name, category, updated_at)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(sender_name) DO UPDATE
                    SET category = excluded.category, updated_at = excluded.updated_at"#,
            )
            .bind(sender_name)
            .bind(category)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
        for (category, phrases) in &patterns.subject_phrases {
            for phrase in phrases {
                query(
                    r#"INSERT INTO learned_phrases (category, phrase, updated_at)
                        VALUES (?1, ?2, ?3)
                        ON CONFLICT(category, phrase) DO UPDATE
                        SET updated_at = excluded.updated_at"#,
                )
                .bind(category)
                .bind(phrase)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
        }

        self.evict(&mut tx).await?;
        tx.commit().await
    }

    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for (table, _) in LEARNED_TABLES {
            query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn summary(&self) -> Result<LearnedSummary, sqlx::Error> {
        let (domains,): (i64,) = query_as(r#"SELECT COUNT(*) FROM learned_domains"#)
            .fetch_one(&self.pool)
            .await?;
        let (sender_names,): (i64,) = query_as(r#"SELECT COUNT(*) FROM learned_senders"#)
            .fetch_one(&self.pool)
            .await?;
        let (subject_phrases,): (i64,) =
            query_as(r#"SELECT COUNT(DISTINCT category) FROM learned_phrases"#)
                .fetch_one(&self.pool)
                .await?;
        Ok(LearnedSummary {
            domains: domains as usize,
            sender_names: sender_names as usize,
            subject_phrases: subject_phrases as usize,
        })
    }

    async fn evict(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
        for (table, key) in LEARNED_TABLES {
            let evicted = query(&format!(
                "DELETE FROM {table} WHERE {key} IN (
                    SELECT {key} FROM {table}
                    ORDER BY updated_at DESC, rowid DESC
                    LIMIT -1 OFFSET ?1
                )"
            ))
            .bind(i64::from(self.max_entries))
            .execute(&mut **tx)
            .await?
            .rows_affected();
            if evicted > 0 {
                tracing::info!(target: "store", table, evicted, "learned patterns evicted");
            }
        }
        Ok(())
    }
}

async fn upsert_domain(
    tx: &mut Transaction<'_, Sqlite>,
    domain: &str,
    category: &str,
    updated_at: i64,
) -> Result<(), sqlx::Error> {
    query(
        r#"INSERT INTO learned_domains (domain, category, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(domain) DO UPDATE
            SET category = excluded.category, updated_at = excluded.updated_at"#,
    )
    .bind(domain)
    .bind(category)
    .bind(updated_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::testing::temp_pool;

    #[tokio::test]
    async fn last_correction_wins() {
        let (_dir, pool) = temp_pool().await;
        let repo = LearnedPatternRepository::new(pool, 100);
        repo.record_domain("shop.invalid", "Shopping").await.unwrap();
        repo.record_domain("shop.invalid", "Receipts").await.unwrap();
        let learned = repo.load().await.unwrap();
        assert_eq!(learned.domains.len(), 1);
        assert_eq!(learned.domains["shop.invalid"], "Receipts");
    }

    #[tokio::test]
    async fn oldest_entries_are_evicted_past_capacity() {
        let (_dir, pool) = temp_pool().await;
        let repo = LearnedPatternRepository::new(pool, 2);
        repo.record_domain("a.invalid", "A").await.unwrap();
        repo.record_domain("b.invalid", "B").await.unwrap();
        repo.record_domain("c.invalid", "C").await.unwrap();
        let learned = repo.load().await.unwrap();
        let domains: Vec<_> = learned.domains.keys().cloned().collect();
        assert_eq!(domains, vec!["b.invalid".to_string(), "c.invalid".to_string()]);
    }

    #[tokio::test]
    async fn zero_capacity_still_keeps_latest_correction() {
        let (_dir, pool) = temp_pool().await;
        let repo = LearnedPatternRepository::new(pool, 0);
        repo.record_domain("foo.invalid", "Custom").await.unwrap();
        let learned = repo.load().await.unwrap();
        assert_eq!(learned.match_domain("foo.invalid"), Some("Custom"));
    }

    #[tokio::test]
    async fn import_summary_and_clear() {
        let (_dir, pool) = temp_pool().await;
        let repo = LearnedPatternRepository::new(pool, 100);
        let mut patterns = LearnedPatterns::default();
        patterns.domains.insert("news.invalid".into(), "News".into());
        patterns
            .sender_names
            .insert("daily digest".into(), "News".into());
        patterns
            .subject_phrases
            .entry("News".into())
            .or_default()
            .extend(["morning edition".to_string(), "evening edition".to_string()]);
        repo.import(&patterns).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), patterns);
        assert_eq!(
            repo.summary().await.unwrap(),
            LearnedSummary {
                domains: 1,
                sender_names: 1,
                subject_phrases: 1,
            }
        );

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_empty());
        assert_eq!(repo.summary().await.unwrap().total(), 0);
    }
}
