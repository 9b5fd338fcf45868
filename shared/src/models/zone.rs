//! Zone Model
//!
//! Rooms are grouped into lettered zones that share default content.

use serde::{Deserialize, Serialize};

/// Room zone (A/B/C/D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
    D,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::A, Zone::B, Zone::C, Zone::D];

    /// Parse a zone letter, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Zone::A),
            'B' => Some(Zone::B),
            'C' => Some(Zone::C),
            'D' => Some(Zone::D),
            _ => None,
        }
    }

    /// Parse a zone path segment such as `a` or `B`
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Zone of a room identifier: its first character (`A3` -> `A`)
    pub fn of_room(room_id: &str) -> Option<Self> {
        room_id.trim().chars().next().and_then(Self::from_char)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
            Zone::C => "C",
            Zone::D => "D",
        }
    }

    /// Lowercase letter used in route paths and default page types
    pub fn slug(&self) -> &'static str {
        match self {
            Zone::A => "a",
            Zone::B => "b",
            Zone::C => "c",
            Zone::D => "d",
        }
    }

    /// `page_type` of the rows every room in this zone inherits
    pub fn default_page_type(&self) -> String {
        format!("zone_default_{}", self.slug())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
