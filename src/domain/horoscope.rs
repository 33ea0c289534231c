use crate::domain::direction::{Direction, ALL_DIRECTIONS};
use crate::domain::zodiac::ZodiacSign;
use chrono::{FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Seeded horoscope generation.
///
/// Scores are not random: every draw is a SHA-256 over
/// `"{date}:{sign index}:{period weight}:{domain}"`, read as big-endian
/// 4-byte windows. Identical (date, sign, period) input always produces an
/// identical result, which is what makes the daily cache valid.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    fn seed_weight(&self) -> u32 {
        match self {
            Period::Daily => 1,
            Period::Weekly => 2,
            Period::Monthly => 3,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Career,
    Health,
    Finance,
    Luck,
}

pub const ALL_CATEGORIES: [Category; 5] = [
    Category::Love,
    Category::Career,
    Category::Health,
    Category::Finance,
    Category::Luck,
];

impl Category {
    pub fn name_vi(&self) -> &'static str {
        match self {
            Category::Love => "Tình yêu",
            Category::Career => "Sự nghiệp",
            Category::Health => "Sức khỏe",
            Category::Finance => "Tài chính",
            Category::Luck => "May mắn",
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Category::Love => 0.25,
            Category::Career => 0.25,
            Category::Health => 0.20,
            Category::Finance => 0.20,
            Category::Luck => 0.10,
        }
    }

    /// Canned advice per score tier: >=8, >=6, >=4, below.
    fn message(&self, score: u32) -> &'static str {
        match self {
            Category::Love => match score {
                8..=10 => "Chuyện tình cảm thăng hoa, hãy mạnh dạn bày tỏ.",
                6..=7 => "Tình cảm ổn định, một buổi hẹn nhỏ sẽ thêm gắn kết.",
                4..=5 => "Nên lắng nghe nhiều hơn để tránh hiểu lầm không đáng có.",
                _ => "Tránh tranh luận gay gắt, giữ hòa khí là ưu tiên hôm nay.",
            },
            Category::Career => match score {
                8..=10 => "Cơ hội lớn xuất hiện, cứ tự tin nhận việc khó.",
                6..=7 => "Công việc trôi chảy, hoàn thành sớm những việc tồn đọng.",
                4..=5 => "Tập trung vào việc chính, đừng ôm đồm quá nhiều.",
                _ => "Cẩn trọng với giấy tờ và lời hứa, kiểm tra kỹ trước khi gửi.",
            },
            Category::Health => match score {
                8..=10 => "Năng lượng dồi dào, thích hợp vận động mạnh.",
                6..=7 => "Sức khỏe tốt, duy trì giờ giấc ngủ nghỉ điều độ.",
                4..=5 => "Cơ thể hơi mệt, nên ăn nhẹ và nghỉ ngơi sớm.",
                _ => "Chú ý giữ ấm và tránh làm việc quá sức.",
            },
            Category::Finance => match score {
                8..=10 => "Tài lộc hanh thông, có thể tính đến khoản đầu tư mới.",
                6..=7 => "Thu chi cân bằng, giữ thói quen ghi chép chi tiêu.",
                4..=5 => "Hạn chế mua sắm theo cảm hứng trong hôm nay.",
                _ => "Không nên cho vay hay ký kết tài chính quan trọng.",
            },
            Category::Luck => match score {
                8..=10 => "Quý nhân xuất hiện, chuyện khó cũng thành dễ.",
                6..=7 => "Vận may nhè nhẹ, thử bắt đầu việc đã trì hoãn.",
                4..=5 => "May mắn trung bình, mọi việc nên chuẩn bị kỹ.",
                _ => "Ngày kém may, tránh quyết định vội vàng.",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub score: u32,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResult {
    pub sign: SignInfo,
    pub period: Period,
    pub date: NaiveDate,
    pub scores: Vec<CategoryScore>,
    pub overall_score: f64,
    pub lucky_numbers: Vec<u32>,
    pub lucky_directions: Vec<Direction>,
}

/// "Today" for horoscope purposes is the civil date in Vietnam (UTC+7).
pub fn today_in_vietnam() -> NaiveDate {
    let ict = FixedOffset::east_opt(7 * 3600).unwrap();
    Utc::now().with_timezone(&ict).date_naive()
}

fn seed_hash(sign: ZodiacSign, date: NaiveDate, period: Period, domain: &str) -> [u8; 32] {
    let seed = format!(
        "{}:{}:{}:{}",
        date.format("%Y-%m-%d"),
        sign.index(),
        period.seed_weight(),
        domain
    );
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.finalize().into()
}

fn window(hash: &[u8; 32], i: usize) -> u32 {
    let at = i * 4;
    u32::from_be_bytes(hash[at..at + 4].try_into().unwrap())
}

/// Draw `count` distinct values in 1..=max from a hash, probing past the
/// eight raw windows deterministically when a duplicate shows up.
fn distinct_draws(hash: &[u8; 32], count: usize, max: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(count);
    let mut i = 0usize;
    while out.len() < count {
        let raw = window(hash, i % 8) as u64 + (i / 8) as u64;
        let candidate = 1 + (raw % max as u64) as u32;
        if !out.contains(&candidate) {
            out.push(candidate);
        }
        i += 1;
    }
    out
}

pub fn generate(sign: ZodiacSign, date: NaiveDate, period: Period) -> HoroscopeResult {
    let score_hash = seed_hash(sign, date, period, "scores");

    let mut scores = Vec::with_capacity(ALL_CATEGORIES.len());
    let mut overall = 0.0;
    for (i, category) in ALL_CATEGORIES.into_iter().enumerate() {
        let score = 1 + window(&score_hash, i) % 10;
        overall += category.weight() * score as f64;
        scores.push(CategoryScore {
            category,
            label: category.name_vi(),
            score,
            message: category.message(score),
        });
    }
    let overall_score = (overall * 10.0).round() / 10.0;

    let number_hash = seed_hash(sign, date, period, "lucky-numbers");
    let lucky_numbers = distinct_draws(&number_hash, 3, 99);

    let direction_hash = seed_hash(sign, date, period, "lucky-directions");
    let lucky_directions = distinct_draws(&direction_hash, 2, 8)
        .into_iter()
        .map(|n| ALL_DIRECTIONS[(n - 1) as usize])
        .collect();

    HoroscopeResult {
        sign: SignInfo {
            sign,
            name: sign.name_vi(),
            symbol: sign.symbol(),
            element: sign.element().name_vi(),
        },
        period,
        date,
        scores,
        overall_score,
        lucky_numbers,
        lucky_directions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_idempotent() {
        let a = generate(ZodiacSign::Capricorn, date(2026, 8, 6), Period::Daily);
        let b = generate(ZodiacSign::Capricorn, date(2026, 8, 6), Period::Daily);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_inputs_change_output() {
        // Not every pair must differ, but a constant generator would be a bug.
        let across_signs: std::collections::HashSet<String> = crate::domain::zodiac::ALL_SIGNS
            .into_iter()
            .map(|s| serde_json::to_string(&generate(s, date(2026, 8, 6), Period::Daily).scores).unwrap())
            .collect();
        assert!(across_signs.len() > 1);

        let across_days: std::collections::HashSet<String> = (1..=28)
            .map(|d| {
                serde_json::to_string(&generate(ZodiacSign::Leo, date(2026, 8, d), Period::Daily).scores)
                    .unwrap()
            })
            .collect();
        assert!(across_days.len() > 1);
    }

    #[test]
    fn test_score_ranges_and_weights() {
        for sign in crate::domain::zodiac::ALL_SIGNS {
            let result = generate(sign, date(2026, 1, 1), Period::Daily);
            assert_eq!(result.scores.len(), 5);
            let mut expected = 0.0;
            for cs in &result.scores {
                assert!((1..=10).contains(&cs.score));
                expected += cs.category.weight() * cs.score as f64;
            }
            assert_eq!(result.overall_score, (expected * 10.0).round() / 10.0);
        }
    }

    #[test]
    fn test_lucky_draws_distinct_and_in_range() {
        for day in 1..=28 {
            let result = generate(ZodiacSign::Pisces, date(2026, 2, day), Period::Daily);
            assert_eq!(result.lucky_numbers.len(), 3);
            for n in &result.lucky_numbers {
                assert!((1..=99).contains(n));
            }
            assert_ne!(result.lucky_numbers[0], result.lucky_numbers[1]);
            assert_ne!(result.lucky_numbers[0], result.lucky_numbers[2]);
            assert_ne!(result.lucky_numbers[1], result.lucky_numbers[2]);
            assert_eq!(result.lucky_directions.len(), 2);
            assert_ne!(result.lucky_directions[0], result.lucky_directions[1]);
        }
    }

    #[test]
    fn test_message_tiers() {
        assert_eq!(
            Category::Love.message(9),
            "Chuyện tình cảm thăng hoa, hãy mạnh dạn bày tỏ."
        );
        assert_eq!(
            Category::Luck.message(1),
            "Ngày kém may, tránh quyết định vội vàng."
        );
    }
}
