//! Chart-ready series built from a settings snapshot.
//!
//! Each series carries a "has real data" guard: an empty series means
//! the caller hides that chart instead of drawing zero-height bars.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::meal_type_counts;
use crate::types::SettingsSnapshot;

/// Parallel label/value arrays for bar and pie charts.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One point of the calories-over-time line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CaloriePoint {
    pub date: String,
    pub calories: f64,
}

/// The three independent chart series plus the combined no-data signal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub water: ChartSeries,
    pub meal_types: ChartSeries,
    pub calories_over_time: Vec<CaloriePoint>,
    /// True only when all three series are empty; callers render a
    /// placeholder instead of any chart.
    pub no_data: bool,
}

impl ChartBundle {
    pub fn has_data(&self) -> bool {
        !self.no_data
    }
}

/// Reshape a snapshot into its three chart series.
pub fn chart_bundle(snapshot: &SettingsSnapshot) -> ChartBundle {
    let water = water_series(&snapshot.water_intake);
    let meal_types = meal_type_series(snapshot);
    let calories_over_time = calories_series(snapshot);

    let no_data = water.is_empty() && meal_types.is_empty() && calories_over_time.is_empty();
    ChartBundle {
        water,
        meal_types,
        calories_over_time,
        no_data,
    }
}

/// Collapse the per-cup flags to a single "Today" bar. Empty when no
/// cup has been logged.
fn water_series(water_intake: &[bool]) -> ChartSeries {
    let cups = water_intake.iter().filter(|flag| **flag).count();
    if cups == 0 {
        return ChartSeries::default();
    }
    ChartSeries {
        labels: vec!["Today".to_string()],
        values: vec![cups as f64],
    }
}

/// Meal-type distribution in first-seen label order. Empty when no
/// count is positive, which for an occurrence count means an empty log.
fn meal_type_series(snapshot: &SettingsSnapshot) -> ChartSeries {
    let counts = meal_type_counts(&snapshot.nutrition_log);
    if !counts.iter().any(|(_, n)| *n > 0) {
        return ChartSeries::default();
    }
    let (labels, values) = counts
        .into_iter()
        .map(|(label, n)| (label, n as f64))
        .unzip();
    ChartSeries { labels, values }
}

/// (date, calories) pairs in log order, not re-sorted. Empty unless at
/// least one calorie value is positive.
fn calories_series(snapshot: &SettingsSnapshot) -> Vec<CaloriePoint> {
    if !snapshot.nutrition_log.iter().any(|m| m.calories > 0.0) {
        return Vec::new();
    }
    snapshot
        .nutrition_log
        .iter()
        .map(|meal| CaloriePoint {
            date: meal.date.clone(),
            calories: meal.calories,
        })
        .collect()
}
