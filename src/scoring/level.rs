use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CEFR proficiency level, A1 easiest through C2 hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 6] = [
        ProficiencyLevel::A1,
        ProficiencyLevel::A2,
        ProficiencyLevel::B1,
        ProficiencyLevel::B2,
        ProficiencyLevel::C1,
        ProficiencyLevel::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::A1 => "A1",
            ProficiencyLevel::A2 => "A2",
            ProficiencyLevel::B1 => "B1",
            ProficiencyLevel::B2 => "B2",
            ProficiencyLevel::C1 => "C1",
            ProficiencyLevel::C2 => "C2",
        }
    }

    /// Position in [`ProficiencyLevel::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ProficiencyLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| format!("unknown proficiency level '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("A1".parse::<ProficiencyLevel>(), Ok(ProficiencyLevel::A1));
        assert_eq!(" c2 ".parse::<ProficiencyLevel>(), Ok(ProficiencyLevel::C2));
        assert!("D1".parse::<ProficiencyLevel>().is_err());
        assert!("".parse::<ProficiencyLevel>().is_err());
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(ProficiencyLevel::A1 < ProficiencyLevel::A2);
        assert!(ProficiencyLevel::B2 < ProficiencyLevel::C1);
        for (i, level) in ProficiencyLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for level in ProficiencyLevel::ALL {
            assert_eq!(level.to_string().parse::<ProficiencyLevel>(), Ok(level));
        }
    }
}
