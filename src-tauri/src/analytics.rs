use std::env;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};
use tracing::{error, warn};

pub const BUTTON_CLICK_GOAL: &str = "btnClick";
const GOAL_EVENT: &str = "goal-reached";
const GOALS_TOGGLE_VAR: &str = "ZMEIKA_GOALS";

#[derive(Clone, Debug, Serialize)]
pub struct GoalPayload {
    pub goal: String,
    pub fired_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GoalConfigError {
    #[error("invalid goal toggle '{value}': expected 1/0, true/false or on/off")]
    InvalidToggle { value: String },
}

pub trait GoalTracker {
    fn reach_goal(&self, goal: &str);
}

pub struct NoopTracker;

impl GoalTracker for NoopTracker {
    fn reach_goal(&self, _goal: &str) {}
}

pub struct EventTracker<R: Runtime> {
    handle: AppHandle<R>,
}

impl<R: Runtime> EventTracker<R> {
    pub fn new(handle: AppHandle<R>) -> Self {
        Self { handle }
    }
}

impl<R: Runtime> GoalTracker for EventTracker<R> {
    fn reach_goal(&self, goal: &str) {
        let payload = GoalPayload {
            goal: goal.to_string(),
            fired_at: Utc::now(),
        };

        if let Err(err) = self.handle.emit(GOAL_EVENT, payload) {
            error!(?err, goal, "failed to emit goal event");
        }
    }
}

pub fn goals_enabled() -> Result<bool, GoalConfigError> {
    let value = match env::var(GOALS_TOGGLE_VAR) {
        Ok(value) => value,
        Err(_) => return Ok(true),
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(GoalConfigError::InvalidToggle { value }),
    }
}

pub fn tracker<R: Runtime>(handle: &AppHandle<R>) -> Box<dyn GoalTracker> {
    match goals_enabled() {
        Ok(true) => Box::new(EventTracker::new(handle.clone())),
        Ok(false) => Box::new(NoopTracker),
        Err(err) => {
            warn!(?err, "goal reporting disabled");
            Box::new(NoopTracker)
        }
    }
}
