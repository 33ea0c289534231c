use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod flying_stars;
pub mod horoscope;
pub mod kua;
pub mod numerology;

use crate::domain::horoscope::today_in_vietnam;
use crate::state::AppState;

pub struct QsQuery<T>(pub T);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/numerology", post(numerology::calculate))
        .route("/api/horoscope", get(horoscope::read))
        .route("/api/kua", post(kua::calculate))
        .route("/api/flying-stars", get(flying_stars::chart))
        .route(
            "/api/_health",
            get(|| async {
                Json(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))
            }),
        )
        .with_state(state)
}

#[async_trait]
impl<S, T> FromRequestParts<S> for QsQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or("");
        match serde_qs::from_str(query) {
            Ok(v) => Ok(QsQuery(v)),
            Err(e) => {
                tracing::warn!(error = %e, "query string rejected");
                Err(StatusCode::BAD_REQUEST)
            }
        }
    }
}

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

/// Field-keyed validation errors with Vietnamese messages, rendered as
/// `{ "success": false, "errors": { field: message } }` with status 422.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "errors": self.errors,
        });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Shared birth-date validation: ISO format, not in the future, year 1900+.
pub(crate) fn parse_birth_date(raw: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Ngày sinh không hợp lệ, cần định dạng YYYY-MM-DD".to_string())?;
    if date > today_in_vietnam() {
        return Err("Ngày sinh không được nằm trong tương lai".to_string());
    }
    if date.year() < 1900 {
        return Err("Năm sinh phải từ 1900 trở về sau".to_string());
    }
    Ok(date)
}
