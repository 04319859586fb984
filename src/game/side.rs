use std::fmt;

/// One of the two players. `First` always opens a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// 1-based player number, as shown to users.
    pub fn number(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_side_number() {
        assert_eq!(Side::First.number(), 1);
        assert_eq!(Side::Second.number(), 2);
    }

    #[test]
    fn test_side_serde_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            side: Side,
        }
        let w: Wrapper = toml::from_str("side = \"second\"").unwrap();
        assert_eq!(w.side, Side::Second);
    }
}
