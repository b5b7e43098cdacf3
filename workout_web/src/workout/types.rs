use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;

/// One exercise line of a workout
///
/// Exactly one of `reps` and `duration_seconds` is set on entries this crate
/// sends; entries read back from the backend are shown as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub exercise_name: String,
    pub sets: i64,
    #[serde(default)]
    pub reps: Option<i64>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default)]
    pub order_index: i64,
}

impl WorkoutEntry {
    /// "5 x 5" for rep based entries, "3 x 60s" for timed ones
    pub fn volume(&self) -> String {
        match (self.reps, self.duration_seconds) {
            (Some(reps), _) => format!("{} x {}", self.sets, reps),
            (None, Some(secs)) => format!("{} x {}s", self.sets, secs),
            (None, None) => format!("{} sets", self.sets),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub duration_minutes: i64,
    #[serde(default)]
    pub calories_burned: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<WorkoutEntry>,
}

/// Validated payload for `POST workouts/` and `PUT workouts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDraft {
    pub title: String,
    pub description: String,
    pub duration_minutes: i64,
    pub calories_burned: i64,
    pub entries: Vec<WorkoutEntry>,
}
