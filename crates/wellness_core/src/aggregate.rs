//! Reduction of a settings snapshot into summary statistics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{MealLogEntry, SettingsSnapshot};

/// Placeholder shown when no mood has been recorded.
pub const MOOD_PLACEHOLDER: &str = "—";
/// Placeholder shown when the nutrition log is empty.
pub const MEAL_TYPE_PLACEHOLDER: &str = "N/A";

/// Summary statistics derived from one settings snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Cups drunk today: the count of `true` water-intake flags (0-8).
    pub average_water_intake: u32,
    pub most_common_mood: String,
    pub total_meals: usize,
    pub average_calories: f64,
    pub average_protein: f64,
    pub average_carbs: f64,
    pub average_fat: f64,
    pub most_common_meal_type: String,
}

/// Reduce a snapshot to its summary statistics.
///
/// All averages are defined as `0.0` when the nutrition log is empty;
/// the divide-by-zero path never produces `NaN`.
pub fn progress_stats(snapshot: &SettingsSnapshot) -> ProgressStats {
    let cups = snapshot.water_intake.iter().filter(|flag| **flag).count() as u32;

    let most_common_mood = match snapshot.mood.as_deref() {
        Some(mood) if !mood.trim().is_empty() => mood.to_string(),
        _ => MOOD_PLACEHOLDER.to_string(),
    };

    let total_meals = snapshot.nutrition_log.len();
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    for meal in &snapshot.nutrition_log {
        calories += meal.calories;
        protein += meal.macros.protein;
        carbs += meal.macros.carbs;
        fat += meal.macros.fat;
    }
    let average = |total: f64| {
        if total_meals > 0 {
            total / total_meals as f64
        } else {
            0.0
        }
    };

    // Strict `>` keeps the first-encountered label on tied counts.
    let mut most_common_meal_type: Option<(String, usize)> = None;
    for (label, count) in meal_type_counts(&snapshot.nutrition_log) {
        let beats_current = most_common_meal_type
            .as_ref()
            .is_none_or(|(_, best)| count > *best);
        if beats_current {
            most_common_meal_type = Some((label, count));
        }
    }
    let most_common_meal_type = most_common_meal_type
        .map(|(label, _)| label)
        .unwrap_or_else(|| MEAL_TYPE_PLACEHOLDER.to_string());

    debug!(total_meals, cups, "computed progress stats");

    ProgressStats {
        average_water_intake: cups,
        most_common_mood,
        total_meals,
        average_calories: average(calories),
        average_protein: average(protein),
        average_carbs: average(carbs),
        average_fat: average(fat),
        most_common_meal_type,
    }
}

/// Count nutrition-log entries grouped by meal type, preserving the
/// order in which each label is first encountered.
pub fn meal_type_counts(log: &[MealLogEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for meal in log {
        match counts.iter_mut().find(|(label, _)| *label == meal.meal_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((meal.meal_type.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Macros;

    fn meal(meal_type: &str, calories: f64, protein: f64) -> MealLogEntry {
        MealLogEntry {
            meal_type: meal_type.to_string(),
            calories,
            macros: Macros {
                protein,
                ..Macros::default()
            },
            ..MealLogEntry::default()
        }
    }

    #[test]
    fn water_intake_counts_true_flags() {
        let snapshot = SettingsSnapshot {
            water_intake: vec![true, true, false, false, false, false, false, false],
            ..SettingsSnapshot::default()
        };
        assert_eq!(progress_stats(&snapshot).average_water_intake, 2);
    }

    #[test]
    fn empty_log_yields_zero_averages_and_placeholders() {
        let stats = progress_stats(&SettingsSnapshot::default());
        assert_eq!(stats.total_meals, 0);
        assert_eq!(stats.average_calories, 0.0);
        assert_eq!(stats.average_protein, 0.0);
        assert_eq!(stats.average_carbs, 0.0);
        assert_eq!(stats.average_fat, 0.0);
        assert_eq!(stats.most_common_mood, MOOD_PLACEHOLDER);
        assert_eq!(stats.most_common_meal_type, MEAL_TYPE_PLACEHOLDER);
    }

    #[test]
    fn blank_mood_maps_to_placeholder() {
        let snapshot = SettingsSnapshot {
            mood: Some("   ".to_string()),
            ..SettingsSnapshot::default()
        };
        assert_eq!(progress_stats(&snapshot).most_common_mood, MOOD_PLACEHOLDER);
    }

    #[test]
    fn averages_and_most_common_meal_type() {
        let snapshot = SettingsSnapshot {
            mood: Some("Happy".to_string()),
            nutrition_log: vec![
                meal("Breakfast", 300.0, 10.0),
                meal("Breakfast", 400.0, 20.0),
                meal("Lunch", 500.0, 30.0),
            ],
            ..SettingsSnapshot::default()
        };
        let stats = progress_stats(&snapshot);
        assert_eq!(stats.total_meals, 3);
        assert_eq!(stats.average_calories, 400.0);
        assert_eq!(stats.average_protein, 20.0);
        assert_eq!(stats.most_common_meal_type, "Breakfast");
        assert_eq!(stats.most_common_mood, "Happy");
    }

    #[test]
    fn meal_type_ties_resolve_to_first_encountered() {
        let snapshot = SettingsSnapshot {
            nutrition_log: vec![meal("Dinner", 600.0, 0.0), meal("Snack", 100.0, 0.0)],
            ..SettingsSnapshot::default()
        };
        assert_eq!(progress_stats(&snapshot).most_common_meal_type, "Dinner");
    }
}
