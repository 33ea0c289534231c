use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ok, Envelope, QsQuery, ValidationErrors};
use crate::domain::direction::Direction;
use crate::domain::flying_stars::{
    annual_chart, monthly_chart, star_info, FlyingStarChart, StarInfo, PALACE_GRID,
};

#[derive(Deserialize)]
pub struct FlyingStarParams {
    pub year: i64,
    #[serde(default)]
    pub month: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalaceCell {
    /// None marks the center palace (trung cung).
    pub direction: Option<Direction>,
    pub direction_name: Option<&'static str>,
    pub star: StarInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyingStarsResponse {
    #[serde(flatten)]
    pub chart: FlyingStarChart,
    pub cells: Vec<PalaceCell>,
}

pub async fn chart(
    QsQuery(params): QsQuery<FlyingStarParams>,
) -> Result<Json<Envelope<FlyingStarsResponse>>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if !(1900..=2100).contains(&params.year) {
        errors.add("year", "Năm phải trong khoảng 1900-2100");
    }
    if let Some(month) = params.month {
        if !(1..=12).contains(&month) {
            errors.add("month", "Tháng phải trong khoảng 1-12");
        }
    }
    errors.into_result()?;

    let year = params.year as u32;
    let chart = match params.month {
        Some(month) => monthly_chart(year, month as u32),
        None => annual_chart(year),
    };
    tracing::info!(year, month = ?params.month, center = chart.center, "Flying star chart computed");

    let mut cells = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            let direction = PALACE_GRID[row][col];
            cells.push(PalaceCell {
                direction,
                direction_name: direction.map(|d| d.name_vi()),
                star: star_info(chart.grid[row][col]),
            });
        }
    }

    Ok(ok(FlyingStarsResponse { chart, cells }))
}
