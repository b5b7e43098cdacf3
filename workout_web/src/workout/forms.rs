use serde::Deserialize;
use serde_json::Value;

use super::types::{Workout, WorkoutDraft, WorkoutEntry};
use crate::validation::{FormErrors, check_required};

/// Raw workout form as posted by the create and edit pages
///
/// `entries` is a JSON array typed into a textarea. All values are kept as
/// submitted so the form can be shown again after a failed validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "durationMinutes", alias = "duration_minutes")]
    pub duration_minutes: String,
    #[serde(default, rename = "caloriesBurned", alias = "calories_burned")]
    pub calories_burned: String,
    #[serde(default)]
    pub entries: String,
}

/// One element of the `entries` array before validation
#[derive(Debug, Deserialize)]
struct EntryInput {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    exercise_name: Option<String>,
    #[serde(default)]
    sets: Option<i64>,
    #[serde(default)]
    reps: Option<i64>,
    #[serde(default)]
    duration_seconds: Option<i64>,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    order_index: Option<i64>,
}

impl WorkoutForm {
    /// Prefills the edit form from a stored workout.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            title: workout.title.clone(),
            description: workout.description.clone(),
            duration_minutes: workout.duration_minutes.to_string(),
            calories_burned: workout.calories_burned.to_string(),
            entries: serde_json::to_string_pretty(&workout.entries)
                .unwrap_or_else(|_| "[]".to_string()),
        }
    }

    pub fn validate(&self) -> Result<WorkoutDraft, FormErrors> {
        let mut errors = FormErrors::new();

        check_required(&mut errors, "title", "Title", &self.title);
        check_required(&mut errors, "description", "Description", &self.description);

        let duration_minutes = parse_non_negative(
            &mut errors,
            "durationMinutes",
            "Duration (minutes)",
            &self.duration_minutes,
        );
        let calories_burned = parse_non_negative(
            &mut errors,
            "caloriesBurned",
            "Calories burned",
            &self.calories_burned,
        );

        let entries = parse_entries(&mut errors, &self.entries);
        errors.into_result()?;

        Ok(WorkoutDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            duration_minutes: duration_minutes.unwrap_or_default(),
            calories_burned: calories_burned.unwrap_or_default(),
            entries,
        })
    }
}

fn parse_non_negative(
    errors: &mut FormErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{label} is required."));
        return None;
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            errors.add(field, format!("{label} must be a whole number of 0 or more."));
            None
        }
    }
}

fn parse_entries(errors: &mut FormErrors, raw: &str) -> Vec<WorkoutEntry> {
    if raw.trim().is_empty() {
        errors.add("entries", "At least one entry is required.");
        return Vec::new();
    }

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) if !items.is_empty() => items,
        Ok(_) => {
            errors.add("entries", "Entries must be a non-empty JSON array.");
            return Vec::new();
        }
        Err(e) => {
            errors.add("entries", format!("Entries are not valid JSON: {e}"));
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let position = idx + 1;
        let input = match serde_json::from_value::<EntryInput>(item) {
            Ok(input) => input,
            Err(e) => {
                errors.add("entries", format!("Entry {position}: {e}"));
                continue;
            }
        };
        match validate_entry(input, position) {
            Ok(entry) => entries.push(entry),
            Err(message) => errors.add("entries", format!("Entry {position}: {message}")),
        }
    }
    entries
}

/// Checks one entry; `position` is 1-based and becomes the default `order_index`.
fn validate_entry(input: EntryInput, position: usize) -> Result<WorkoutEntry, String> {
    let exercise_name = input
        .exercise_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or("exercise_name is required.")?
        .to_string();

    let sets = match input.sets {
        Some(sets) if sets >= 1 => sets,
        _ => return Err("sets must be at least 1.".to_string()),
    };

    // Zero or negative counts as not given
    let reps = input.reps.filter(|n| *n > 0);
    let duration_seconds = input.duration_seconds.filter(|n| *n > 0);
    match (reps, duration_seconds) {
        (Some(_), Some(_)) => {
            return Err("an entry cannot have both reps and duration_seconds.".to_string());
        }
        (None, None) => {
            return Err("either reps or duration_seconds must be greater than 0.".to_string());
        }
        _ => {}
    }

    if input.weight.is_some_and(|w| w < 0.0) {
        return Err("weight cannot be negative.".to_string());
    }

    Ok(WorkoutEntry {
        id: input.id,
        exercise_name,
        sets,
        reps,
        duration_seconds,
        weight: input.weight,
        notes: input.notes.unwrap_or_default(),
        order_index: input.order_index.unwrap_or(position as i64),
    })
}
