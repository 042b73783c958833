use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::recipe::{Difficulty, MAX_RATING};
use crate::{Error, Result};

pub const DEFAULT_MIN_RATING: f64 = 0.0;
pub const DEFAULT_MAX_PREP_TIME: u32 = 120;
pub const DEFAULT_MAX_CALORIES: u32 = 1000;

/// Label that disables the category and difficulty predicates
pub const ALL_LABEL: &str = "All";

/// Category selector: every category, or exactly one label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_LABEL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(trimmed.to_string()))
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Difficulty selector: any difficulty, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    Any,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::Any => true,
            DifficultyFilter::Only(selected) => *selected == difficulty,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::Any => f.write_str(ALL_LABEL),
            DifficultyFilter::Only(d) => write!(f, "{}", d),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_LABEL) || trimmed.eq_ignore_ascii_case("any") {
            return Ok(DifficultyFilter::Any);
        }
        trimmed.parse().map(DifficultyFilter::Only)
    }
}

impl Serialize for DifficultyFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DifficultyFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordering applied to the derived list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Keep master-list order
    #[default]
    #[serde(rename = "none")]
    Unsorted,
    /// Highest rating first
    Rating,
    /// Easiest first
    Difficulty,
    /// Quickest first
    PrepTime,
    /// Lightest first
    Calories,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::Rating => "rating",
            SortKey::Difficulty => "difficulty",
            SortKey::PrepTime => "prepTime",
            SortKey::Calories => "calories",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "" | "none" => Ok(SortKey::Unsorted),
            "rating" => Ok(SortKey::Rating),
            "difficulty" => Ok(SortKey::Difficulty),
            "preptime" => Ok(SortKey::PrepTime),
            "calories" => Ok(SortKey::Calories),
            _ => Err(Error::InvalidInput(format!(
                "unknown sort key '{}' (expected none, rating, difficulty, prepTime or calories)",
                s
            ))),
        }
    }
}

/// One field update for the advanced filter panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvancedFilter {
    Difficulty(DifficultyFilter),
    MinRating(f64),
    MaxPrepTime(u32),
    MaxCalories(u32),
}

impl AdvancedFilter {
    /// Build an update from a field name and its textual value.
    ///
    /// Field names are matched loosely: `minRating`, `min-rating` and
    /// `min_rating` are the same field.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match normalize_key(field).as_str() {
            "difficulty" => value.parse().map(AdvancedFilter::Difficulty),
            "minrating" => {
                let rating: f64 = value.trim().parse().map_err(|_| {
                    Error::InvalidInput(format!("min rating '{}' is not a number", value))
                })?;
                Ok(AdvancedFilter::MinRating(rating))
            }
            "maxpreptime" => parse_bound("max prep time", value).map(AdvancedFilter::MaxPrepTime),
            "maxcalories" => parse_bound("max calories", value).map(AdvancedFilter::MaxCalories),
            _ => Err(Error::InvalidInput(format!(
                "unknown filter '{}' (expected difficulty, minRating, maxPrepTime or maxCalories)",
                field
            ))),
        }
    }
}

fn parse_bound(name: &str, value: &str) -> Result<u32> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{} '{}' is not a whole number", name, value)))?;
    if parsed < 0 {
        return Err(Error::InvalidInput(format!(
            "{} must not be negative (got {})",
            name, parsed
        )));
    }
    u32::try_from(parsed).map_err(|_| Error::InvalidInput(format!("{} {} is too large", name, parsed)))
}

fn normalize_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Everything that narrows the catalog down to the derived list.
/// All thresholds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    /// Always stored lower-cased
    pub search: String,
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub min_rating: f64,
    pub max_prep_time: u32,
    pub max_calories: u32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            difficulty: DifficultyFilter::Any,
            min_rating: DEFAULT_MIN_RATING,
            max_prep_time: DEFAULT_MAX_PREP_TIME,
            max_calories: DEFAULT_MAX_CALORIES,
        }
    }
}

impl FilterSettings {
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
    }

    /// Apply a single advanced-filter update. Min rating is clamped to 0-5;
    /// a non-finite rating is rejected and leaves the settings untouched.
    pub fn apply(&mut self, update: AdvancedFilter) -> Result<()> {
        match update {
            AdvancedFilter::Difficulty(d) => self.difficulty = d,
            AdvancedFilter::MinRating(r) => {
                if !r.is_finite() {
                    return Err(Error::InvalidInput(format!(
                        "min rating must be a finite number (got {})",
                        r
                    )));
                }
                self.min_rating = r.clamp(DEFAULT_MIN_RATING, MAX_RATING);
            }
            AdvancedFilter::MaxPrepTime(m) => self.max_prep_time = m,
            AdvancedFilter::MaxCalories(c) => self.max_calories = c,
        }
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reset_values() {
        let settings = FilterSettings::default();
        assert_eq!(settings.search, "");
        assert_eq!(settings.category, CategoryFilter::All);
        assert_eq!(settings.difficulty, DifficultyFilter::Any);
        assert_eq!(settings.min_rating, 0.0);
        assert_eq!(settings.max_prep_time, 120);
        assert_eq!(settings.max_calories, 1000);
    }

    #[test]
    fn test_min_rating_is_clamped() {
        let mut settings = FilterSettings::default();
        settings.apply(AdvancedFilter::MinRating(7.5)).unwrap();
        assert_eq!(settings.min_rating, 5.0);
        settings.apply(AdvancedFilter::MinRating(-1.0)).unwrap();
        assert_eq!(settings.min_rating, 0.0);
    }

    #[test]
    fn test_nan_min_rating_rejected() {
        let mut settings = FilterSettings::default();
        settings.apply(AdvancedFilter::MinRating(3.0)).unwrap();
        assert!(settings.apply(AdvancedFilter::MinRating(f64::NAN)).is_err());
        assert_eq!(settings.min_rating, 3.0);
    }

    #[test]
    fn test_parse_advanced_filter() {
        assert_eq!(
            AdvancedFilter::parse("minRating", "4.6").unwrap(),
            AdvancedFilter::MinRating(4.6)
        );
        assert_eq!(
            AdvancedFilter::parse("max-prep-time", "30").unwrap(),
            AdvancedFilter::MaxPrepTime(30)
        );
        assert_eq!(
            AdvancedFilter::parse("difficulty", "all").unwrap(),
            AdvancedFilter::Difficulty(DifficultyFilter::Any)
        );
        assert_eq!(
            AdvancedFilter::parse("difficulty", "hard").unwrap(),
            AdvancedFilter::Difficulty(DifficultyFilter::Only(Difficulty::Hard))
        );
    }

    #[test]
    fn test_parse_advanced_filter_rejects_bad_values() {
        assert!(AdvancedFilter::parse("max_calories", "-10").is_err());
        assert!(AdvancedFilter::parse("difficulty", "brutal").is_err());
        assert!(AdvancedFilter::parse("spiciness", "3").is_err());
        assert!(AdvancedFilter::parse("minRating", "lots").is_err());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("prep-time".parse::<SortKey>().unwrap(), SortKey::PrepTime);
        assert_eq!("prepTime".parse::<SortKey>().unwrap(), SortKey::PrepTime);
        assert_eq!("none".parse::<SortKey>().unwrap(), SortKey::Unsorted);
        assert!("name".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_filter_from_str() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Italian".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("Italian".into())
        );
        assert!(CategoryFilter::Only("Italian".into()).matches("Italian"));
        assert!(!CategoryFilter::Only("Italian".into()).matches("italian"));
    }
}
