use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::fs;
use std::path::Path;

pub type DbPool = Pool<Sqlite>;

/// The only persisted data is the horoscope cache. Results are a pure
/// function of (sign, period, date), so rows can be dropped at any time
/// and recomputed.
pub async fn init_db(db_path: &str) -> Result<DbPool> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS horoscope_cache (
          sign TEXT NOT NULL,
          period TEXT NOT NULL,
          date TEXT NOT NULL,
          payload TEXT NOT NULL,
          cts TEXT NOT NULL,
          PRIMARY KEY (sign, period, date)
        );
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

pub async fn get_cached_horoscope(
    pool: &DbPool,
    sign: &str,
    period: &str,
    date: &str,
) -> Result<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as(
        "SELECT payload FROM horoscope_cache WHERE sign = ? AND period = ? AND date = ?",
    )
    .bind(sign)
    .bind(period)
    .bind(date)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(payload,)| payload))
}

pub async fn put_cached_horoscope(
    pool: &DbPool,
    sign: &str,
    period: &str,
    date: &str,
    payload: &str,
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    sqlx::query(
        "INSERT OR REPLACE INTO horoscope_cache (sign, period, date, payload, cts) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(sign)
    .bind(period)
    .bind(date)
    .bind(payload)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Drop cache rows for dates strictly before the cutoff (ISO dates compare
/// lexicographically).
pub async fn purge_cache_before(pool: &DbPool, cutoff_date: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM horoscope_cache WHERE date < ?")
        .bind(cutoff_date)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
