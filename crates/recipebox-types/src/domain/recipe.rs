use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{Error, Result};

static PREP_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(\d+)\s*(?:hours|hour|hrs|hr|h))?\s*(?:(\d+)\s*(?:minutes|minute|mins|min|m)?)?\s*$",
    )
    .unwrap()
});

/// Highest rating a recipe can carry
pub const MAX_RATING: f64 = 5.0;

/// Nutrient name to display value (e.g. "protein" -> "12g")
pub type Nutrition = BTreeMap<String, String>;

/// Stable identifier of a recipe within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u64);

impl RecipeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(RecipeId)
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a recipe id", s)))
    }
}

/// How hard a recipe is to make. Ordered `Easy < Medium < Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed sort rank: Easy=1, Medium=2, Hard=3
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidInput(format!(
                "unknown difficulty '{}' (expected Easy, Medium or Hard)",
                s
            ))),
        }
    }
}

/// Preparation time as it was entered.
///
/// Older catalogs carry free text such as `"45 mins"`; new recipes carry
/// whole minutes. Both forms serialize back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrepTime {
    Minutes(u32),
    Text(String),
}

impl PrepTime {
    /// Parsed minutes, or `None` when the text cannot be understood.
    ///
    /// Accepts `"45"`, `"45 mins"`, `"1 hr 15 mins"`, `"2 hours"`.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            PrepTime::Minutes(m) => Some(*m),
            PrepTime::Text(text) => parse_minutes(text),
        }
    }
}

impl Default for PrepTime {
    fn default() -> Self {
        PrepTime::Minutes(0)
    }
}

impl fmt::Display for PrepTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepTime::Minutes(m) => write!(f, "{} mins", m),
            PrepTime::Text(text) => f.write_str(text),
        }
    }
}

impl FromStr for PrepTime {
    type Err = Error;

    /// Plain integers become `Minutes`; anything else is kept as text if it parses.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(minutes) = trimmed.parse::<u32>() {
            return Ok(PrepTime::Minutes(minutes));
        }
        if parse_minutes(trimmed).is_some() {
            return Ok(PrepTime::Text(trimmed.to_string()));
        }
        Err(Error::InvalidInput(format!(
            "cannot read '{}' as a preparation time",
            s
        )))
    }
}

fn parse_minutes(text: &str) -> Option<u32> {
    let caps = PREP_TIME_REGEX.captures(text)?;
    let hours = caps.get(1);
    let minutes = caps.get(2);
    if hours.is_none() && minutes.is_none() {
        return None;
    }

    let hours: u32 = match hours {
        Some(h) => h.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u32 = match minutes {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    hours.checked_mul(60)?.checked_add(minutes)
}

fn default_servings() -> u32 {
    1
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub prep_time: PrepTime,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub calories: u32,
    pub rating: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Check the per-record invariants a catalog relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(format!("recipe {} has an empty name", self.id)));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::Validation(format!(
                "recipe {} has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        if self.servings == 0 {
            return Err(Error::Validation(format!(
                "recipe {} must serve at least one person",
                self.id
            )));
        }
        Ok(())
    }

    pub fn prep_minutes(&self) -> Option<u32> {
        self.prep_time.minutes()
    }
}
