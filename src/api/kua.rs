use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::{ok, Envelope, ValidationErrors};
use crate::domain::kua::{kua_number, profile, KuaProfile};
use crate::domain::Gender;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuaRequest {
    pub birth_year: i64,
    pub gender: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KuaResponse {
    pub birth_year: u32,
    pub gender: Gender,
    #[serde(flatten)]
    pub profile: KuaProfile,
    pub lucky_direction_names: Vec<&'static str>,
    pub unlucky_direction_names: Vec<&'static str>,
}

pub async fn calculate(
    Json(input): Json<KuaRequest>,
) -> Result<Json<Envelope<KuaResponse>>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if !(1900..=2100).contains(&input.birth_year) {
        errors.add("birthYear", "Năm sinh phải trong khoảng 1900-2100");
    }
    let gender = match Gender::from_str(&input.gender) {
        Ok(g) => Some(g),
        Err(()) => {
            errors.add("gender", "Giới tính phải là male hoặc female");
            None
        }
    };

    errors.into_result()?;
    let gender = gender.unwrap();
    let year = input.birth_year as u32;

    let kua = kua_number(year, gender);
    let profile = profile(kua);
    tracing::info!(year, %gender, kua, "Kua profile computed");

    let lucky_direction_names = profile
        .lucky_directions
        .iter()
        .map(|d| d.name_vi())
        .collect();
    let unlucky_direction_names = profile
        .unlucky_directions
        .iter()
        .map(|d| d.name_vi())
        .collect();

    Ok(ok(KuaResponse {
        birth_year: year,
        gender,
        profile,
        lucky_direction_names,
        unlucky_direction_names,
    }))
}
