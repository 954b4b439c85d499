use serde::{Deserialize, Serialize};

/// A symbol placed on a cell by one of the two players.
///
/// X always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    /// Returns the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        for mark in Mark::ALL {
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_char_conversion() {
        for mark in Mark::ALL {
            assert_eq!(Mark::from_char(mark.as_char()), Some(mark));
            assert_eq!(mark.to_string(), mark.as_char().to_string());
        }
        assert_eq!(Mark::from_char('x'), Some(Mark::X));
        assert_eq!(Mark::from_char('.'), None);
    }
}
