use anyhow::Result;
use chrono::Duration;

use crate::db::{purge_cache_before, put_cached_horoscope, DbPool};
use crate::domain::horoscope::{generate, today_in_vietnam, Period};
use crate::domain::zodiac::ALL_SIGNS;

/// Daily batch: precompute today's daily horoscope for every sign so the
/// morning traffic spike is served from cache, then drop stale rows.
pub async fn run_daily_refresh(pool: DbPool) -> Result<()> {
    let date = today_in_vietnam();
    let date_str = date.format("%Y-%m-%d").to_string();
    tracing::info!(date = %date_str, "Running daily horoscope refresh");

    let mut written = 0usize;
    for sign in ALL_SIGNS {
        let result = generate(sign, date, Period::Daily);
        let payload = serde_json::to_string(&result)?;
        if let Err(e) =
            put_cached_horoscope(&pool, sign.as_str(), Period::Daily.as_str(), &date_str, &payload)
                .await
        {
            tracing::error!(%sign, error = ?e, "Failed to cache horoscope");
            continue;
        }
        written += 1;
    }

    let cutoff = (date - Duration::days(7)).format("%Y-%m-%d").to_string();
    let purged = purge_cache_before(&pool, &cutoff).await?;

    tracing::info!(written, purged, "Refresh complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_cached_horoscope, init_db};

    #[tokio::test]
    async fn test_refresh_fills_cache_for_every_sign() -> Result<()> {
        let pool = init_db(":memory:").await?;
        run_daily_refresh(pool.clone()).await?;

        let date_str = today_in_vietnam().format("%Y-%m-%d").to_string();
        for sign in ALL_SIGNS {
            let cached = get_cached_horoscope(&pool, sign.as_str(), "daily", &date_str).await?;
            let payload = cached.expect("sign should be cached");
            let value: serde_json::Value = serde_json::from_str(&payload)?;
            assert_eq!(value["sign"]["sign"], sign.as_str());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_purges_old_rows() -> Result<()> {
        let pool = init_db(":memory:").await?;
        put_cached_horoscope(&pool, "leo", "daily", "2000-01-01", "{}").await?;

        run_daily_refresh(pool.clone()).await?;

        let stale = get_cached_horoscope(&pool, "leo", "daily", "2000-01-01").await?;
        assert!(stale.is_none());
        Ok(())
    }
}
