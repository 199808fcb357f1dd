use std::fmt;
use std::str::FromStr;

// ============================================================================
// POSITIONS
// ============================================================================

/// The positions whose career stats are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
}

/// Every supported position, in dataset order
pub const POSITIONS: [Position; 5] = [
    Position::QB,
    Position::RB,
    Position::WR,
    Position::TE,
    Position::K,
];

const QB_COLUMNS: &[&str] = &[
    "NAME", "SEASON", "TEAM", "G", "GS", "Comp", "Att", "Pct", "Yds", "Avg", "TD", "Int", "Sck",
    "SckY", "Rate", "Att", "RuYds", "RuAvg", "RuTD", "FUM", "Lost",
];

const RB_COLUMNS: &[&str] = &[
    "NAME", "SEASON", "TEAM", "G", "GS", "Att", "RuYds", "RuAvg", "RuLng", "RuTD", "Rec", "Yds",
    "Avg", "Lng", "TD", "FUM", "Lost",
];

// Receivers and tight ends share the same career table layout
const RECEIVER_COLUMNS: &[&str] = &[
    "NAME", "SEASON", "TEAM", "G", "GS", "Rec", "Yds", "Avg", "Lng", "TD", "Att", "RuYds", "RuAvg",
    "RuLng", "RuTD", "FUM", "Lost",
];

const K_COLUMNS: &[&str] = &[
    "NAME", "SEASON", "TEAM", "G", "GS", "FGB", "LNG", "FGA", "FGM", "PCT", "XPM", "PCT", "XPB",
    "KO", "AVG1", "TB", "RET", "AVG2",
];

impl Position {
    /// Short code used on profile pages and as the dataset file stem.
    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
        }
    }

    /// Ordered output columns. The first is always NAME, then SEASON and TEAM.
    pub fn schema(&self) -> &'static [&'static str] {
        match self {
            Position::QB => QB_COLUMNS,
            Position::RB => RB_COLUMNS,
            Position::WR | Position::TE => RECEIVER_COLUMNS,
            Position::K => K_COLUMNS,
        }
    }

    /// Dataset file name, e.g. `QB.csv`
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.code())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POSITIONS
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| format!("Unsupported position: {}", s))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_starts_with_name_season_team() {
        for position in POSITIONS {
            assert_eq!(&position.schema()[..3], &["NAME", "SEASON", "TEAM"]);
        }
    }

    #[test]
    fn test_schema_lookup_is_stable() {
        let first = Position::K.schema();
        let second = Position::K.schema();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 18);
    }

    #[test]
    fn test_schema_lengths() {
        assert_eq!(Position::QB.schema().len(), 21);
        assert_eq!(Position::RB.schema().len(), 17);
        assert_eq!(Position::WR.schema().len(), 17);
        assert_eq!(Position::TE.schema(), Position::WR.schema());
    }

    #[test]
    fn test_parse_position_codes() {
        assert_eq!("QB".parse::<Position>(), Ok(Position::QB));
        assert_eq!("K".parse::<Position>(), Ok(Position::K));
        assert!("LB".parse::<Position>().is_err());
        assert!("qb".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Position::TE.file_name(), "TE.csv");
    }
}
