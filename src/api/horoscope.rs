use axum::{extract::State, Json};
use serde::Deserialize;
use std::str::FromStr;

use crate::api::{ok, parse_birth_date, Envelope, QsQuery, ValidationErrors};
use crate::db::{get_cached_horoscope, put_cached_horoscope};
use crate::domain::horoscope::{generate, today_in_vietnam, Period};
use crate::domain::zodiac::ZodiacSign;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeParams {
    pub birth_date: String,
    #[serde(default)]
    pub period: Option<String>,
}

/// Cache read-through: results are deterministic per (sign, period, date),
/// so a cached payload is byte-identical to a recomputed one.
pub async fn read(
    State(state): State<AppState>,
    QsQuery(params): QsQuery<HoroscopeParams>,
) -> Result<Json<Envelope<serde_json::Value>>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let birth = match parse_birth_date(&params.birth_date) {
        Ok(date) => Some(date),
        Err(message) => {
            errors.add("birthDate", message);
            None
        }
    };

    let period = match params.period.as_deref() {
        None => Some(Period::Daily),
        Some(raw) => match Period::from_str(raw) {
            Ok(p) => Some(p),
            Err(()) => {
                errors.add("period", "Kỳ dự báo phải là daily, weekly hoặc monthly");
                None
            }
        },
    };

    errors.into_result()?;
    let (birth, period) = (birth.unwrap(), period.unwrap());

    let sign = ZodiacSign::from_date(birth);
    let date = today_in_vietnam();
    let date_str = date.format("%Y-%m-%d").to_string();

    let cached = get_cached_horoscope(&state.pool, sign.as_str(), period.as_str(), &date_str)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "Horoscope cache read failed");
            None
        });

    if let Some(payload) = cached {
        if let Ok(value) = serde_json::from_str(&payload) {
            tracing::debug!(%sign, %period, date = %date_str, "Horoscope cache hit");
            return Ok(ok(value));
        }
        tracing::warn!(%sign, %period, date = %date_str, "Horoscope cache row unreadable, recomputing");
    }

    let result = generate(sign, date, period);
    let payload = serde_json::to_value(&result).expect("horoscope result serializes");

    if let Err(e) = put_cached_horoscope(
        &state.pool,
        sign.as_str(),
        period.as_str(),
        &date_str,
        &payload.to_string(),
    )
    .await
    {
        tracing::warn!(error = ?e, "Horoscope cache write failed");
    }

    Ok(ok(payload))
}
