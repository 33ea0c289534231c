use crate::domain::direction::{Direction, Element};
use crate::domain::reduce::reduce_single;
use crate::domain::Gender;
use serde::Serialize;

use crate::domain::direction::Direction::*;

/// Bát trạch: Kua number and the direction profile it keys.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KuaGroup {
    East,
    West,
}

/// Digit-sum the birth year, then apply the gender rule.
///
/// Nam: 10 - tổng; quẻ 5 đổi thành 2 (Khôn).
/// Nữ: tổng + 5, trừ 9 nếu vượt 9; quẻ 5 đổi thành 8 (Cấn).
/// The remaps are the domain convention, not derivable arithmetic.
pub fn kua_number(year: u32, gender: Gender) -> u32 {
    let s = reduce_single(year);
    match gender {
        Gender::Male => {
            let k = 10 - s;
            if k == 5 {
                2
            } else {
                k
            }
        }
        Gender::Female => {
            let mut k = s + 5;
            if k > 9 {
                k -= 9;
            }
            if k == 5 {
                8
            } else {
                k
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KuaProfile {
    pub kua_number: u32,
    pub group: KuaGroup,
    pub element: Element,
    pub element_name: &'static str,
    /// Sinh Khí, Thiên Y, Diên Niên, Phục Vị.
    pub lucky_directions: [Direction; 4],
    /// Họa Hại, Ngũ Quỷ, Lục Sát, Tuyệt Mệnh.
    pub unlucky_directions: [Direction; 4],
    pub lucky_colors: &'static [&'static str],
    pub personality: &'static str,
    pub career: &'static str,
    pub health: &'static str,
    pub relationships: &'static str,
}

/// Static profile table for the eight reachable Kua numbers. Kua 5 never
/// reaches this function; hitting it means the remap in `kua_number` broke.
pub fn profile(kua: u32) -> KuaProfile {
    let (group, element, lucky, unlucky) = match kua {
        1 => (
            KuaGroup::East,
            Element::Water,
            [Southeast, East, South, North],
            [West, Northeast, Northwest, Southwest],
        ),
        2 => (
            KuaGroup::West,
            Element::Earth,
            [Northeast, West, Northwest, Southwest],
            [East, Southeast, South, North],
        ),
        3 => (
            KuaGroup::East,
            Element::Wood,
            [South, North, Southeast, East],
            [Southwest, Northwest, Northeast, West],
        ),
        4 => (
            KuaGroup::East,
            Element::Wood,
            [North, South, East, Southeast],
            [Northwest, Southwest, West, Northeast],
        ),
        6 => (
            KuaGroup::West,
            Element::Metal,
            [West, Northeast, Southwest, Northwest],
            [Southeast, East, North, South],
        ),
        7 => (
            KuaGroup::West,
            Element::Metal,
            [Northwest, Southwest, Northeast, West],
            [North, South, Southeast, East],
        ),
        8 => (
            KuaGroup::West,
            Element::Earth,
            [Southwest, Northwest, West, Northeast],
            [South, North, East, Southeast],
        ),
        9 => (
            KuaGroup::East,
            Element::Fire,
            [East, Southeast, North, South],
            [Northeast, West, Southwest, Northwest],
        ),
        5 => unreachable!("kua 5 is remapped by gender before lookup"),
        _ => unreachable!("kua number out of range: {}", kua),
    };

    let lucky_colors: &'static [&'static str] = match element {
        Element::Water => &["xanh dương", "đen", "trắng"],
        Element::Wood => &["xanh lá", "xanh dương", "đen"],
        Element::Metal => &["trắng", "xám", "vàng ánh kim"],
        Element::Earth => &["vàng", "nâu", "đỏ"],
        Element::Fire => &["đỏ", "cam", "tím"],
    };

    let (personality, career, health, relationships) = match kua {
        1 => (
            "Linh hoạt như nước, dễ thích nghi nhưng hay suy nghĩ nhiều.",
            "Hợp các nghề giao tiếp, thương mại và tư vấn; nên làm việc quay về hướng Đông Nam.",
            "Chú ý thận và hệ tuần hoàn, nên uống đủ nước.",
            "Sâu sắc trong tình cảm, hợp với người mệnh Mộc và Kim.",
        ),
        2 => (
            "Điềm đạm, kiên nhẫn, là chỗ dựa đáng tin của mọi người.",
            "Bền bỉ với công việc quản lý, đất đai, hậu cần; hướng Đông Bắc hỗ trợ tài lộc.",
            "Để ý dạ dày và tiêu hóa, tránh lo âu kéo dài.",
            "Chung thủy nhưng ít bày tỏ, hợp với người mệnh Hỏa và Kim.",
        ),
        3 => (
            "Thẳng thắn, quyết đoán, thích khởi đầu cái mới.",
            "Hợp khởi nghiệp và các nghề kỹ thuật; làm việc quay hướng Nam dễ thăng tiến.",
            "Chú ý gan và hệ thần kinh, nên vận động ngoài trời.",
            "Nhiệt tình nhưng nóng tính, cần người bạn đời biết nhường nhịn.",
        ),
        4 => (
            "Mềm mỏng, khéo léo, giỏi dung hòa các mối quan hệ.",
            "Hợp giáo dục, sáng tạo, truyền thông; hướng Bắc giúp sự nghiệp ổn định.",
            "Để ý hô hấp và dễ cảm vặt khi đổi mùa.",
            "Lãng mạn, được nhiều người quý mến, hợp người mệnh Thủy.",
        ),
        6 => (
            "Nguyên tắc, có uy, thiên về lý trí hơn cảm xúc.",
            "Hợp vai trò lãnh đạo, tài chính, pháp lý; hướng Tây củng cố quyền uy.",
            "Chú ý đầu và phổi, tránh làm việc quá khuya.",
            "Nghiêm túc trong hôn nhân, hợp người mệnh Thổ.",
        ),
        7 => (
            "Hoạt ngôn, tinh tế, có duyên trong giao tiếp.",
            "Hợp nghề nói và nghề biểu diễn, ngoại giao; hướng Tây Bắc mở rộng quan hệ.",
            "Để ý răng miệng và hô hấp, hạn chế đồ lạnh.",
            "Vui vẻ dễ gần nhưng cả thèm chóng chán, cần sự kiên định.",
        ),
        8 => (
            "Trầm ổn, thực tế, càng về sau vận càng vượng.",
            "Hợp bất động sản, tích lũy dài hạn; hướng Tây Nam là hướng tài vị.",
            "Chú ý xương khớp, nên duy trì đi bộ mỗi ngày.",
            "Chậm mà chắc trong tình cảm, hợp người mệnh Hỏa.",
        ),
        9 => (
            "Nhiệt huyết, sáng rực như lửa, truyền cảm hứng cho người khác.",
            "Hợp nghề ánh sáng sân khấu, marketing, năng lượng; hướng Đông thúc đẩy danh tiếng.",
            "Để ý tim mạch và huyết áp, tránh căng thẳng dồn dập.",
            "Yêu say đắm, hợp người mệnh Mộc và Thổ.",
        ),
        _ => unreachable!(),
    };

    KuaProfile {
        kua_number: kua,
        group,
        element,
        element_name: element.name_vi(),
        lucky_directions: lucky,
        unlucky_directions: unlucky,
        lucky_colors,
        personality,
        career,
        health,
        relationships,
    }
}
