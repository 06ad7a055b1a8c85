//! User preferences collected by the setup screen.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Question difficulty accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Selector order on the setup screen.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire value (`easy`, `medium`, `hard`).
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Display label, the wire value capitalized.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// Field name used by keyed profile updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    Category,
    Difficulty,
}

/// Returned when parsing a field name the form never produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(ProfileField::FirstName),
            "category" | "categoryId" => Ok(ProfileField::Category),
            "difficulty" => Ok(ProfileField::Difficulty),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Name, category id and difficulty for the current round.
///
/// Empty at session start and after every restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub category_id: String,
    pub difficulty: Option<Difficulty>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update exactly one attribute.
    ///
    /// An empty or unparseable difficulty value clears the difficulty.
    pub fn update(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::FirstName => self.first_name = value.to_string(),
            ProfileField::Category => self.category_id = value.to_string(),
            ProfileField::Difficulty => self.difficulty = value.parse().ok(),
        }
    }

    /// Fails with [`ValidationError::MissingFields`] if any field is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.is_empty() || self.category_id.is_empty() || self.difficulty.is_none() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    /// Capitalized difficulty, or an empty string when unset.
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(Difficulty::label).unwrap_or("")
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
