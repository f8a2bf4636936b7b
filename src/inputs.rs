use crate::events::EventId;
use clap::Args;
use serde::{Deserialize, Serialize};

/// The seven free-text fields an athlete fills in, exactly as typed.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAthleteInputs {
    /// Fast Forty time in seconds, e.g. 4.85
    #[arg(long = "sprint", default_value = "")]
    pub sprint_time: String,
    /// Max Toss distance, e.g. 65'0" or 780
    #[arg(long = "toss", default_value = "")]
    pub toss_distance: String,
    /// Vertical jump height in inches, e.g. 32"
    #[arg(long = "vertical", default_value = "")]
    pub vertical_height: String,
    /// Broad jump distance, e.g. 9'6"
    #[arg(long = "broad", default_value = "")]
    pub broad_distance: String,
    /// Push repetitions
    #[arg(long = "push", default_value = "")]
    pub push_reps: String,
    /// Pull repetitions
    #[arg(long = "pull", default_value = "")]
    pub pull_reps: String,
    /// Mile time as M:SS
    #[arg(long = "mile", default_value = "")]
    pub mile_time: String,
}

impl RawAthleteInputs {
    pub fn field(&self, event: EventId) -> &str {
        match event {
            EventId::FastForty => &self.sprint_time,
            EventId::MaxToss => &self.toss_distance,
            EventId::TheVertical => &self.vertical_height,
            EventId::TheBroad => &self.broad_distance,
            EventId::ThePush => &self.push_reps,
            EventId::ThePull => &self.pull_reps,
            EventId::TheMile => &self.mile_time,
        }
    }

    pub fn field_mut(&mut self, event: EventId) -> &mut String {
        match event {
            EventId::FastForty => &mut self.sprint_time,
            EventId::MaxToss => &mut self.toss_distance,
            EventId::TheVertical => &mut self.vertical_height,
            EventId::TheBroad => &mut self.broad_distance,
            EventId::ThePush => &mut self.push_reps,
            EventId::ThePull => &mut self.pull_reps,
            EventId::TheMile => &mut self.mile_time,
        }
    }

    pub fn with(mut self, event: EventId, text: &str) -> Self {
        *self.field_mut(event) = text.to_string();
        self
    }
}
