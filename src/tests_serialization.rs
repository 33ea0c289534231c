#[cfg(test)]
mod tests {
    use crate::domain::flying_stars::annual_chart;
    use crate::domain::horoscope::{generate, Period};
    use crate::domain::kua::profile;
    use crate::domain::numerology::full_profile;
    use crate::domain::zodiac::ZodiacSign;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kua_profile_json_golden() {
        // Kua 9 (1990, male). The wire casing and field order are part of
        // the contract with the calling layer; a mismatch here means a
        // breaking API change.
        let json = serde_json::to_string(&profile(9)).expect("Serialization failed");

        let expected = "{\"kuaNumber\":9,\"group\":\"east\",\"element\":\"fire\",\"elementName\":\"Hỏa\",\"luckyDirections\":[\"east\",\"southeast\",\"north\",\"south\"],\"unluckyDirections\":[\"northeast\",\"west\",\"southwest\",\"northwest\"],\"luckyColors\":[\"đỏ\",\"cam\",\"tím\"],\"personality\":\"Nhiệt huyết, sáng rực như lửa, truyền cảm hứng cho người khác.\",\"career\":\"Hợp nghề ánh sáng sân khấu, marketing, năng lượng; hướng Đông thúc đẩy danh tiếng.\",\"health\":\"Để ý tim mạch và huyết áp, tránh căng thẳng dồn dập.\",\"relationships\":\"Yêu say đắm, hợp người mệnh Mộc và Thổ.\"}";

        assert_eq!(json, expected, "Kua profile wire format changed");
    }

    #[test]
    fn test_numerology_profile_json_golden() {
        // The sign-off fixture with a pinned evaluation date.
        let profile = full_profile("Nguyen Van A", date(1990, 1, 15), date(2026, 8, 6));
        let json = serde_json::to_string(&profile).expect("Serialization failed");

        let expected = "{\"lifePath\":8,\"destiny\":7,\"soulUrge\":8,\"personality\":8,\"maturity\":6,\"challenges\":{\"first\":5,\"second\":5,\"third\":0,\"fourth\":0},\"pinnacles\":[{\"number\":7,\"fromAge\":0,\"toAge\":28},{\"number\":7,\"fromAge\":29,\"toAge\":37},{\"number\":5,\"fromAge\":38,\"toAge\":46},{\"number\":2,\"fromAge\":47,\"toAge\":null}],\"personalCycles\":{\"year\":8,\"month\":7,\"day\":4}}";

        assert_eq!(json, expected, "Numerology profile wire format changed");
    }

    #[test]
    fn test_flying_star_chart_json_golden() {
        let json = serde_json::to_string(&annual_chart(2024)).expect("Serialization failed");

        let expected = "{\"year\":2024,\"month\":null,\"period\":9,\"center\":3,\"grid\":[[2,7,9],[1,3,5],[6,8,4]]}";

        assert_eq!(json, expected, "Flying star chart wire format changed");
    }

    #[test]
    fn test_horoscope_result_wire_keys() {
        // Score values are seed-dependent; the key casing is not.
        let result = generate(ZodiacSign::Capricorn, date(2026, 8, 6), Period::Daily);
        let value = serde_json::to_value(&result).unwrap();

        for key in [
            "sign",
            "period",
            "date",
            "scores",
            "overallScore",
            "luckyNumbers",
            "luckyDirections",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["date"], "2026-08-06");
        assert_eq!(value["period"], "daily");
        for score in value["scores"].as_array().unwrap() {
            assert!(score.get("category").is_some());
            assert!(score.get("label").is_some());
            assert!(score.get("score").is_some());
            assert!(score.get("message").is_some());
        }
    }
}
