//! Character-diversity strength meter.
//!
//! The score is the number of character classes present, plus one point for
//! a length over 8 and another for a length over 12. Anything shorter than 8
//! characters or scoring below 3 is [`StrengthTier::Weak`], a score below 5
//! is [`StrengthTier::Good`], the rest is [`StrengthTier::Perfect`].

use std::fmt;

const MIN_LENGTH: usize = 8;
const FIRST_BONUS_LENGTH: usize = 8;
const SECOND_BONUS_LENGTH: usize = 12;
const GOOD_SCORE: u8 = 3;
const PERFECT_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Good,
    Perfect,
}

impl StrengthTier {
    pub fn index(self) -> u8 {
        match self {
            StrengthTier::Weak => 0,
            StrengthTier::Good => 1,
            StrengthTier::Perfect => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Good => "Good",
            StrengthTier::Perfect => "Perfect",
        }
    }

    /// Display colour as a hex triplet.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => "#f64a4a",
            StrengthTier::Good => "#f6c44a",
            StrengthTier::Perfect => "#4af65b",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which classes occur in a password. Each flag is tested on its own, so a
/// single character can only ever set one of them but the checks do not
/// depend on each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn of(password: &str) -> Self {
        Self {
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn count(&self) -> u8 {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|&&present| present)
            .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub classes: CharacterClasses,
    pub length: usize,
    pub score: u8,
    pub tier: StrengthTier,
}

pub fn evaluate(password: &str) -> Evaluation {
    if password.is_empty() {
        return Evaluation {
            classes: CharacterClasses::default(),
            length: 0,
            score: 0,
            tier: StrengthTier::Weak,
        };
    }

    let classes = CharacterClasses::of(password);
    // UTF-16 code units, so astral characters count twice.
    let length = password.encode_utf16().count();

    let mut score = classes.count();
    if length > FIRST_BONUS_LENGTH {
        score += 1;
    }
    if length > SECOND_BONUS_LENGTH {
        score += 1;
    }

    let tier = if length < MIN_LENGTH || score < GOOD_SCORE {
        StrengthTier::Weak
    } else if score < PERFECT_SCORE {
        StrengthTier::Good
    } else {
        StrengthTier::Perfect
    };

    Evaluation {
        classes,
        length,
        score,
        tier,
    }
}

pub fn score(password: &str) -> StrengthTier {
    evaluate(password).tier
}
