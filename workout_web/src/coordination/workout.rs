use super::errors::FlowError;
use crate::gateway::{GatewayClient, endpoints};
use crate::validation::FormErrors;
use crate::workout::{Workout, WorkoutForm};

const WORKOUT_NOT_FOUND: &str = "Workout not found.";

/// Parses the `{id}` path segment of the workout routes.
pub fn parse_workout_id(raw: &str) -> Result<i64, FlowError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            tracing::warn!("Invalid workout id in path: {}", raw);
            Err(FlowError::Validation(FormErrors::single(
                "id",
                "Valid Workout ID is required.",
            )))
        }
    }
}

pub async fn list_workouts_core(
    gateway: &GatewayClient,
    token: &str,
) -> Result<Vec<Workout>, FlowError> {
    endpoints::list_workouts(gateway, token)
        .await
        .map_err(|e| FlowError::from_authenticated(e, WORKOUT_NOT_FOUND))
}

/// Validates the form and creates the workout. Nothing is sent when validation fails.
pub async fn create_workout_core(
    gateway: &GatewayClient,
    token: &str,
    form: &WorkoutForm,
) -> Result<Workout, FlowError> {
    let draft = form.validate()?;
    let workout = endpoints::create_workout(gateway, token, &draft)
        .await
        .map_err(|e| FlowError::from_authenticated(e, WORKOUT_NOT_FOUND))?;
    tracing::info!(
        "Created workout {} with {} entries",
        workout.id,
        workout.entries.len()
    );
    Ok(workout)
}

pub async fn load_workout_core(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
) -> Result<Workout, FlowError> {
    endpoints::get_workout(gateway, token, id)
        .await
        .map_err(|e| FlowError::from_authenticated(e, WORKOUT_NOT_FOUND))
}

pub async fn update_workout_core(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
    form: &WorkoutForm,
) -> Result<Workout, FlowError> {
    let draft = form.validate()?;
    let workout = endpoints::update_workout(gateway, token, id, &draft)
        .await
        .map_err(|e| FlowError::from_authenticated(e, WORKOUT_NOT_FOUND))?;
    tracing::info!("Updated workout {}", workout.id);
    Ok(workout)
}

pub async fn delete_workout_core(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
) -> Result<(), FlowError> {
    endpoints::delete_workout(gateway, token, id)
        .await
        .map_err(|e| FlowError::from_authenticated(e, WORKOUT_NOT_FOUND))?;
    tracing::info!("Deleted workout {}", id);
    Ok(())
}
