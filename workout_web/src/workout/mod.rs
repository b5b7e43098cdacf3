mod forms;
mod types;

pub use forms::WorkoutForm;
pub use types::{Workout, WorkoutDraft, WorkoutEntry};
