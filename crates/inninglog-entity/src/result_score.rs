use std::cmp::Ordering;
use std::fmt;

/// Outcome of a game from the member's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResultScore {
    Win,
    Lose,
    Draw,
}

impl ResultScore {
    #[must_use]
    pub fn classify(our_score: i32, their_score: i32) -> Self {
        match our_score.cmp(&their_score) {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Lose,
            Ordering::Equal => Self::Draw,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Draw => "DRAW",
        }
    }
}

impl fmt::Display for ResultScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
