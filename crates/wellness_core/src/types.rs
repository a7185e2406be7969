//! Snapshot and row shapes consumed and produced by the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-user settings snapshot as handed over by the persistence
/// collaborator: current mood, one boolean per water-cup slot for the
/// day, and the append-only nutrition log.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub water_intake: Vec<bool>,
    #[serde(default)]
    pub nutrition_log: Vec<MealLogEntry>,
}

/// Macro nutrients for a logged meal.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Macros {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,
}

/// A meal as stored in the nutrition log. Immutable once appended.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MealLogEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,
    #[serde(rename = "type", default)]
    pub meal_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub macros: Macros,
}

/// Flat nutrition table row as consumed by the sort engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,
}

/// A persisted journal row. `entry` is an opaque serialized payload;
/// the export encoder decides whether it is structured.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct JournalRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub entry: String,
    #[serde(default)]
    pub created_at: String,
}

/// Structured journal payload. Every field tolerates absence so partial
/// payloads from older form versions still parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub energy: Option<i64>,
    #[serde(default)]
    pub gratitude: Vec<String>,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub water_cups: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub version: Option<i64>,
}

/// Lenient numeric coercion: missing, null, or non-numeric values become
/// `0.0`, so `NaN` never enters the aggregation path.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}
