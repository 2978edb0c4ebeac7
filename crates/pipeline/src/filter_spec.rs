//! User-chosen filter settings.
//!
//! `FilterSpec::default()` filters nothing: empty search term, no diet, no
//! cuisine, calorie range `[0, 1000]`, no cooking-time bucket.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Diet tags offered by the dashboard selector
pub const DIET_PRESETS: &[&str] = &["gluten free", "ketogenic", "vegetarian", "vegan"];

/// Cuisine tags offered by the dashboard selector
pub const CUISINE_PRESETS: &[&str] = &["Italian", "Mexican", "Asian", "American"];

/// Cooking-time buckets offered by the dashboard selector, as (label, bucket)
pub const COOKING_TIME_PRESETS: &[(&str, CookingTimeBucket)] = &[
    ("Quick (0-15 minutes)", CookingTimeBucket::new(0, 15)),
    ("Medium (16-30 minutes)", CookingTimeBucket::new(16, 30)),
    ("Long (31-60 minutes)", CookingTimeBucket::new(31, 60)),
    ("Very Long (60+ minutes)", CookingTimeBucket::new(61, 1000)),
];

pub const DEFAULT_MIN_CALORIES: f64 = 0.0;
pub const DEFAULT_MAX_CALORIES: f64 = 1000.0;

/// Inclusive calorie bounds.
///
/// A range with `min > max` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieRange {
    pub min: f64,
    pub max: f64,
}

impl CalorieRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, calories: f64) -> bool {
        calories >= self.min && calories <= self.max
    }
}

impl Default for CalorieRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CALORIES, DEFAULT_MAX_CALORIES)
    }
}

/// The cooking-time string was not `"<min>-<max>"` with `min <= max`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed cooking-time bucket {input:?}: expected \"<min>-<max>\" in whole minutes")]
pub struct MalformedTimeBucket {
    pub input: String,
}

/// Inclusive range of minutes, written `"min-max"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CookingTimeBucket {
    pub min: u32,
    pub max: u32,
}

impl CookingTimeBucket {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }
}

impl FromStr for CookingTimeBucket {
    type Err = MalformedTimeBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedTimeBucket {
            input: s.to_string(),
        };

        let (min, max) = s.trim().split_once('-').ok_or_else(malformed)?;
        let min: u32 = min.trim().parse().map_err(|_| malformed())?;
        let max: u32 = max.trim().parse().map_err(|_| malformed())?;
        if min > max {
            return Err(malformed());
        }
        Ok(Self { min, max })
    }
}

impl fmt::Display for CookingTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The full set of filters applied to the recipe set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSpec {
    /// Case-insensitive substring of the title; empty matches everything
    pub search_term: String,
    /// Exact diet tag, `None` for no filter
    pub diet: Option<String>,
    /// Exact cuisine tag, `None` for no filter
    pub cuisine: Option<String>,
    pub calorie_range: CalorieRange,
    /// `None` for no filter
    pub cooking_time: Option<CookingTimeBucket>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Empty or blank tags mean "no filter".
    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = non_blank(diet.into());
        self
    }

    /// Empty or blank tags mean "no filter".
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = non_blank(cuisine.into());
        self
    }

    pub fn with_calorie_range(mut self, min: f64, max: f64) -> Self {
        self.calorie_range = CalorieRange::new(min, max);
        self
    }

    /// Set the cooking-time bucket from its `"min-max"` form.
    ///
    /// An empty string clears the bucket. A malformed string is logged and
    /// also leaves the bucket unset, so the filter fails open.
    pub fn with_cooking_time(mut self, bucket: &str) -> Self {
        if bucket.trim().is_empty() {
            self.cooking_time = None;
            return self;
        }
        self.cooking_time = match bucket.parse::<CookingTimeBucket>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("{}; cooking-time filter disabled", e);
                None
            }
        };
        self
    }

    pub fn with_cooking_time_bucket(mut self, bucket: CookingTimeBucket) -> Self {
        self.cooking_time = Some(bucket);
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
