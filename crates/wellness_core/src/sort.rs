//! Stable sorting of nutrition table rows by a chosen column.

use std::cmp::Ordering;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WellnessError;
use crate::types::NutritionEntry;

/// Sortable columns of the nutrition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Date,
    MealType,
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl FromStr for SortKey {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            k if k.eq_ignore_ascii_case("date") => SortKey::Date,
            k if k.eq_ignore_ascii_case("mealType") => SortKey::MealType,
            k if k.eq_ignore_ascii_case("calories") => SortKey::Calories,
            k if k.eq_ignore_ascii_case("protein") => SortKey::Protein,
            k if k.eq_ignore_ascii_case("carbs") => SortKey::Carbs,
            k if k.eq_ignore_ascii_case("fat") => SortKey::Fat,
            other => return Err(WellnessError::InvalidSortKey(other.to_string())),
        };
        Ok(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascending") {
            Ok(SortDirection::Ascending)
        } else if s.eq_ignore_ascii_case("descending") {
            Ok(SortDirection::Descending)
        } else {
            Err(WellnessError::InvalidSortDirection(s.to_string()))
        }
    }
}

/// Column selection state for an interactive table header.
///
/// Selecting the active key flips the direction; selecting a new key
/// resets it to ascending. The default matches the table's initial
/// most-recent-first view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn request(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Return a stably-ordered copy of `entries`. The input is not mutated;
/// ties keep their original relative order.
pub fn sorted_entries(
    entries: &[NutritionEntry],
    key: SortKey,
    direction: SortDirection,
) -> Vec<NutritionEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by_key(a, b, key);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &NutritionEntry, b: &NutritionEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => date_sort_value(&a.date).cmp(&date_sort_value(&b.date)),
        SortKey::Calories => a.calories.total_cmp(&b.calories),
        SortKey::Protein => a.protein.total_cmp(&b.protein),
        SortKey::Carbs => a.carbs.total_cmp(&b.carbs),
        SortKey::Fat => a.fat.total_cmp(&b.fat),
        SortKey::MealType => a
            .meal_type
            .to_lowercase()
            .cmp(&b.meal_type.to_lowercase()),
    }
}

/// Parse a date string to a comparable timestamp.
///
/// Accepts:
/// - YYYY-MM-DD
/// - RFC3339 datetime
/// - Naive datetime YYYY-MM-DDTHH:MM:SS
///
/// Unparseable dates return `None` and therefore sort before every
/// parseable date.
fn date_sort_value(s: &str) -> Option<i64> {
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(chrono::NaiveTime::MIN).and_utc().timestamp());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.and_utc().timestamp());
    }
    None
}
