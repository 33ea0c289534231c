use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The eight compass directions used by the Kua, flying-star and horoscope
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::Northeast,
    Direction::East,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::West,
    Direction::Northwest,
];

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::Northeast => "northeast",
            Direction::East => "east",
            Direction::Southeast => "southeast",
            Direction::South => "south",
            Direction::Southwest => "southwest",
            Direction::West => "west",
            Direction::Northwest => "northwest",
        }
    }

    pub fn name_vi(&self) -> &'static str {
        match self {
            Direction::North => "Bắc",
            Direction::Northeast => "Đông Bắc",
            Direction::East => "Đông",
            Direction::Southeast => "Đông Nam",
            Direction::South => "Nam",
            Direction::Southwest => "Tây Nam",
            Direction::West => "Tây",
            Direction::Northwest => "Tây Bắc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "northeast" => Ok(Direction::Northeast),
            "east" => Ok(Direction::East),
            "southeast" => Ok(Direction::Southeast),
            "south" => Ok(Direction::South),
            "southwest" => Ok(Direction::Southwest),
            "west" => Ok(Direction::West),
            "northwest" => Ok(Direction::Northwest),
            _ => Err(()),
        }
    }
}

/// Ngũ hành, the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }

    pub fn name_vi(&self) -> &'static str {
        match self {
            Element::Metal => "Kim",
            Element::Wood => "Mộc",
            Element::Water => "Thủy",
            Element::Fire => "Hỏa",
            Element::Earth => "Thổ",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_str(d.as_str()), Ok(d));
        }
        assert!(Direction::from_str("up").is_err());
    }

    #[test]
    fn test_vietnamese_labels() {
        assert_eq!(Direction::Southeast.name_vi(), "Đông Nam");
        assert_eq!(Element::Water.name_vi(), "Thủy");
    }
}
