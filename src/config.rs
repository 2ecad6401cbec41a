use chrono::{Days, NaiveDate};
use gloo::console::{error, log};
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

use crate::booking::FieldRules;
use crate::slots::BusinessHours;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "scheduler-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scheduler config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub title: String,
    #[serde(flatten)]
    pub hours: BusinessHours,
    /// Last bookable day is today + N. Unbounded when absent.
    pub booking_window_days: Option<u32>,
    /// Show the optional notes textarea.
    pub notes: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            title: "Schedule a Consultation".to_string(),
            hours: BusinessHours::default(),
            booking_window_days: None,
            notes: false,
        }
    }
}

impl SchedulerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rules(&self, today: NaiveDate) -> FieldRules {
        FieldRules {
            min_date: today,
            max_date: self
                .booking_window_days
                .and_then(|n| today.checked_add_days(Days::new(u64::from(n)))),
            hours: self.hours,
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}

/// Reads the embedded config block. A missing block means defaults; a broken
/// one is logged and also falls back to defaults.
pub fn load_config() -> SchedulerConfig {
    let Some(json) = config_json_from_dom() else {
        return SchedulerConfig::default();
    };

    match SchedulerConfig::from_json(&json) {
        Ok(cfg) => {
            log!(format!("scheduler config loaded from #{CONFIG_ELEMENT_ID}"));
            cfg
        }
        Err(e) => {
            error!(e.to_string());
            SchedulerConfig::default()
        }
    }
}
