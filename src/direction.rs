use crate::error::AntError;
use std::fmt;
use std::str::FromStr;

/// Eight compass headings. Each topology only uses a subset of them.
///
/// The declaration order is the fixed total order used when a topology sorts
/// its direction set for turning, so `Ord` must stay derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CardinalDirection {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl FromStr for CardinalDirection {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"n" | b"north" => Ok(CardinalDirection::North),
            b"ne" | b"north-east" | b"northeast" => Ok(CardinalDirection::NorthEast),
            b"e" | b"east" => Ok(CardinalDirection::East),
            b"se" | b"south-east" | b"southeast" => Ok(CardinalDirection::SouthEast),
            b"s" | b"south" => Ok(CardinalDirection::South),
            b"sw" | b"south-west" | b"southwest" => Ok(CardinalDirection::SouthWest),
            b"w" | b"west" => Ok(CardinalDirection::West),
            b"nw" | b"north-west" | b"northwest" => Ok(CardinalDirection::NorthWest),
            _ => Err(AntError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CardinalDirection {
    /// All directions, in sort order
    pub const ALL: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::NorthEast,
        CardinalDirection::East,
        CardinalDirection::SouthEast,
        CardinalDirection::South,
        CardinalDirection::SouthWest,
        CardinalDirection::West,
        CardinalDirection::NorthWest,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Short compass label
    pub const fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::NorthWest => "NW",
        }
    }
}
