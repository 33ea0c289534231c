use crate::domain::name::{fold_name, is_vowel, letter_value};
use crate::domain::reduce::{reduce_single, reduce_with_masters};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Thần số học core numbers. All letter-based numbers run over the folded
/// name (see `domain::name`); callers are expected to have validated that
/// the name holds at least one letter — a letterless input sums to 0, which
/// the API boundary rejects before it can reach here.

fn letter_sum<F>(name: &str, keep: F) -> u32
where
    F: Fn(char) -> bool,
{
    fold_name(name)
        .chars()
        .filter(|&c| keep(c))
        .map(letter_value)
        .sum()
}

/// Sum of every letter, master-aware reduction.
pub fn destiny_number(name: &str) -> u32 {
    reduce_with_masters(letter_sum(name, |_| true))
}

/// Vowels only (Y counts as a vowel here).
pub fn soul_urge_number(name: &str) -> u32 {
    reduce_with_masters(letter_sum(name, is_vowel))
}

/// Consonants only.
pub fn personality_number(name: &str) -> u32 {
    reduce_with_masters(letter_sum(name, |c| !is_vowel(c)))
}

/// Day, month and year are reduced independently (masters kept at every
/// stage), then the three are summed and reduced once more.
pub fn life_path_number(date: NaiveDate) -> u32 {
    let day = reduce_with_masters(date.day());
    let month = reduce_with_masters(date.month());
    let year = reduce_with_masters(date.year() as u32);
    reduce_with_masters(day + month + year)
}

pub fn maturity_number(life_path: u32, destiny: u32) -> u32 {
    reduce_with_masters(life_path + destiny)
}

/// Four challenge numbers. Single-digit components, single-digit results,
/// no master-number exemption anywhere in this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeSet {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

pub fn challenges(date: NaiveDate) -> ChallengeSet {
    let day = reduce_single(date.day());
    let month = reduce_single(date.month());
    let year = reduce_single(date.year() as u32);

    let first = reduce_single(month.abs_diff(day));
    let second = reduce_single(day.abs_diff(year));
    let third = reduce_single(first.abs_diff(second));
    let fourth = reduce_single(month.abs_diff(year));

    ChallengeSet {
        first,
        second,
        third,
        fourth,
    }
}

/// One pinnacle with the life stage it governs. The fourth stage is
/// open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pinnacle {
    pub number: u32,
    pub from_age: u32,
    pub to_age: Option<u32>,
}

/// Pairwise sums over the reduced date components, masters kept. The first
/// stage runs to 36 minus the single-digit life path, the next two span
/// nine years each.
pub fn pinnacles(date: NaiveDate) -> [Pinnacle; 4] {
    let day = reduce_single(date.day());
    let month = reduce_single(date.month());
    let year = reduce_single(date.year() as u32);

    let p1 = reduce_with_masters(day + month);
    let p2 = reduce_with_masters(day + year);
    let p3 = reduce_with_masters(p1 + p2);
    let p4 = reduce_with_masters(month + year);

    let first_end = 36 - reduce_single(life_path_number(date));
    [
        Pinnacle {
            number: p1,
            from_age: 0,
            to_age: Some(first_end),
        },
        Pinnacle {
            number: p2,
            from_age: first_end + 1,
            to_age: Some(first_end + 9),
        },
        Pinnacle {
            number: p3,
            from_age: first_end + 10,
            to_age: Some(first_end + 18),
        },
        Pinnacle {
            number: p4,
            from_age: first_end + 19,
            to_age: None,
        },
    ]
}

/// Personal year/month/day cycle numbers for an evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalCycles {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

pub fn personal_cycles(birth: NaiveDate, on: NaiveDate) -> PersonalCycles {
    let year = reduce_with_masters(
        reduce_single(birth.day()) + reduce_single(birth.month()) + reduce_single(on.year() as u32),
    );
    let month = reduce_with_masters(year + on.month());
    let day = reduce_with_masters(month + on.day());
    PersonalCycles { year, month, day }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub destiny: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub challenges: ChallengeSet,
    pub pinnacles: [Pinnacle; 4],
    pub personal_cycles: PersonalCycles,
}

pub fn full_profile(name: &str, birth: NaiveDate, on: NaiveDate) -> NumerologyProfile {
    let life_path = life_path_number(birth);
    let destiny = destiny_number(name);
    NumerologyProfile {
        life_path,
        destiny,
        soul_urge: soul_urge_number(name),
        personality: personality_number(name),
        maturity: maturity_number(life_path, destiny),
        challenges: challenges(birth),
        pinnacles: pinnacles(birth),
        personal_cycles: personal_cycles(birth, on),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reduce::is_master;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_name() {
        // Nguyen Van A, 1990-01-15: the sign-off fixture.
        let name = "Nguyen Van A";
        assert_eq!(destiny_number(name), 7);
        assert_eq!(soul_urge_number(name), 8);
        assert_eq!(personality_number(name), 8);
        assert_eq!(life_path_number(date(1990, 1, 15)), 8);
        assert_eq!(maturity_number(8, 7), 6);
    }

    #[test]
    fn test_diacritics_and_master_personality() {
        // NGUYENVANDUC consonants: N G N V N D C = 5+7+5+4+5+4+3 = 33
        assert_eq!(personality_number("Nguyễn Văn Đức"), 33);
        assert_eq!(destiny_number("Nguyễn Văn Đức"), 7);
        assert_eq!(soul_urge_number("Nguyễn Văn Đức"), 1);
    }

    #[test]
    fn test_life_path_master() {
        // day 5, month 3, year 1983 -> 21 -> 3; 5 + 3 + 3 = 11 stays 11
        assert_eq!(life_path_number(date(1983, 3, 5)), 11);
    }

    #[test]
    fn test_outputs_stay_in_range() {
        for name in ["Nguyen Van A", "Trần Thị Hằng", "Lê Hoàng Phúc Nguyên"] {
            for n in [
                destiny_number(name),
                soul_urge_number(name),
                personality_number(name),
            ] {
                assert!((1..=9).contains(&n) || is_master(n), "out of range: {}", n);
            }
        }
    }

    #[test]
    fn test_challenges_reference_date() {
        // 1990-01-15: day 6, month 1, year 1
        let c = challenges(date(1990, 1, 15));
        assert_eq!(
            c,
            ChallengeSet {
                first: 5,
                second: 5,
                third: 0,
                fourth: 0
            }
        );
        assert!(c.first <= 9 && c.second <= 9 && c.third <= 9 && c.fourth <= 9);
    }

    #[test]
    fn test_pinnacles_reference_date() {
        let p = pinnacles(date(1990, 1, 15));
        assert_eq!(p[0].number, 7);
        assert_eq!(p[1].number, 7);
        assert_eq!(p[2].number, 5);
        assert_eq!(p[3].number, 2);
        // life path 8 -> first stage ends at 28
        assert_eq!(p[0].to_age, Some(28));
        assert_eq!(p[1].from_age, 29);
        assert_eq!(p[1].to_age, Some(37));
        assert_eq!(p[3].from_age, 47);
        assert_eq!(p[3].to_age, None);
    }

    #[test]
    fn test_personal_cycles_deterministic() {
        let birth = date(1990, 1, 15);
        let on = date(2026, 8, 6);
        let a = personal_cycles(birth, on);
        let b = personal_cycles(birth, on);
        assert_eq!(a, b);
        // day 6 + month 1 + year(2026 -> 10 -> 1) = 8
        assert_eq!(a.year, 8);
        assert_eq!(a.month, reduce_with_masters(8 + 8));
        assert_eq!(a.day, reduce_with_masters(a.month + 6));
    }
}
