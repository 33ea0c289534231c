use crate::domain::direction::Element;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The twelve western zodiac signs with their Vietnamese names and
/// month/day ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn name_vi(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Bạch Dương",
            ZodiacSign::Taurus => "Kim Ngưu",
            ZodiacSign::Gemini => "Song Tử",
            ZodiacSign::Cancer => "Cự Giải",
            ZodiacSign::Leo => "Sư Tử",
            ZodiacSign::Virgo => "Xử Nữ",
            ZodiacSign::Libra => "Thiên Bình",
            ZodiacSign::Scorpio => "Bọ Cạp",
            ZodiacSign::Sagittarius => "Nhân Mã",
            ZodiacSign::Capricorn => "Ma Kết",
            ZodiacSign::Aquarius => "Bảo Bình",
            ZodiacSign::Pisces => "Song Ngư",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            // Air signs map to Kim in the Vietnamese presentation.
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Metal,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    /// Inclusive (month, day) range. Capricorn's wraps the year boundary.
    pub fn range(&self) -> ((u32, u32), (u32, u32)) {
        match self {
            ZodiacSign::Aries => ((3, 21), (4, 19)),
            ZodiacSign::Taurus => ((4, 20), (5, 20)),
            ZodiacSign::Gemini => ((5, 21), (6, 21)),
            ZodiacSign::Cancer => ((6, 22), (7, 22)),
            ZodiacSign::Leo => ((7, 23), (8, 22)),
            ZodiacSign::Virgo => ((8, 23), (9, 22)),
            ZodiacSign::Libra => ((9, 23), (10, 23)),
            ZodiacSign::Scorpio => ((10, 24), (11, 21)),
            ZodiacSign::Sagittarius => ((11, 22), (12, 21)),
            ZodiacSign::Capricorn => ((12, 22), (1, 19)),
            ZodiacSign::Aquarius => ((1, 20), (2, 18)),
            ZodiacSign::Pisces => ((2, 19), (3, 20)),
        }
    }

    /// Position in the seasonal order, used as the seed component.
    pub fn index(&self) -> u32 {
        ALL_SIGNS.iter().position(|s| s == self).unwrap() as u32
    }

    pub fn from_date(date: NaiveDate) -> ZodiacSign {
        let md = (date.month(), date.day());
        for sign in ALL_SIGNS {
            let (start, end) = sign.range();
            let contains = if start.0 > end.0 {
                // Wraps the year boundary: Dec 22 - Jan 19.
                md >= start || md <= end
            } else {
                md >= start && md <= end
            };
            if contains {
                return sign;
            }
        }
        // Ranges cover every day of the year.
        unreachable!("no zodiac range contains {:?}", md)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .into_iter()
            .find(|sign| sign.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_capricorn_wraparound() {
        assert_eq!(ZodiacSign::from_date(date(1995, 12, 25)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1996, 1, 5)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1996, 12, 22)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1996, 1, 19)), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_boundaries_around_capricorn() {
        assert_eq!(ZodiacSign::from_date(date(1990, 12, 21)), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::from_date(date(1990, 1, 20)), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_mid_range_lookups() {
        assert_eq!(ZodiacSign::from_date(date(1990, 1, 15)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1988, 4, 1)), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_date(date(2000, 8, 10)), ZodiacSign::Leo);
        assert_eq!(ZodiacSign::from_date(date(2000, 11, 21)), ZodiacSign::Scorpio);
        assert_eq!(ZodiacSign::from_date(date(2000, 11, 22)), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_every_day_maps_to_exactly_one_sign() {
        // Leap year covers Feb 29 as well.
        let mut d = date(2024, 1, 1);
        while d.year() == 2024 {
            let _ = ZodiacSign::from_date(d);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_round_trip_and_index() {
        for (i, sign) in ALL_SIGNS.into_iter().enumerate() {
            assert_eq!(ZodiacSign::from_str(sign.as_str()), Ok(sign));
            assert_eq!(sign.index(), i as u32);
        }
    }
}
