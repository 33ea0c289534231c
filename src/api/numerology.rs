use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::{ok, parse_birth_date, Envelope, ValidationErrors};
use crate::domain::horoscope::today_in_vietnam;
use crate::domain::name::fold_name;
use crate::domain::numerology::{full_profile, NumerologyProfile};
use crate::domain::Gender;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyRequest {
    pub full_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResponse {
    pub full_name: String,
    pub birth_date: String,
    pub profile: NumerologyProfile,
}

pub async fn calculate(
    Json(input): Json<NumerologyRequest>,
) -> Result<Json<Envelope<NumerologyResponse>>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = input.full_name.trim();
    if name.chars().count() < 2 {
        errors.add("fullName", "Họ tên phải có ít nhất 2 ký tự");
    } else if fold_name(name).is_empty() {
        errors.add("fullName", "Họ tên phải chứa ít nhất một chữ cái");
    }

    let birth = match parse_birth_date(&input.birth_date) {
        Ok(date) => Some(date),
        Err(message) => {
            errors.add("birthDate", message);
            None
        }
    };

    if let Some(raw) = input.gender.as_deref() {
        if Gender::from_str(raw).is_err() {
            errors.add("gender", "Giới tính phải là male hoặc female");
        }
    }

    errors.into_result()?;
    let birth = birth.unwrap();

    let profile = full_profile(name, birth, today_in_vietnam());
    tracing::info!(
        life_path = profile.life_path,
        destiny = profile.destiny,
        "Numerology profile computed"
    );

    Ok(ok(NumerologyResponse {
        full_name: name.to_string(),
        birth_date: birth.format("%Y-%m-%d").to_string(),
        profile,
    }))
}
