//! Pure aggregation and presentation engine for a personal wellness tracker.
//!
//! Everything in this crate is a synchronous, side-effect-free transform:
//! a raw per-user settings snapshot (mood, water-intake flags, nutrition
//! log) goes in, a derived view comes out. Persistence, authentication,
//! and rendering live in the surrounding shell and are deliberately
//! absent here.

pub mod aggregate;
pub mod charts;
pub mod error;
pub mod export;
pub mod sanitize;
pub mod sort;
pub mod tags;
pub mod types;

pub use error::{WellnessError, WellnessResult};
pub use types::{
    JournalEntry, JournalRow, Macros, MealLogEntry, NutritionEntry, SettingsSnapshot,
};
