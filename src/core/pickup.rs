use chrono::{DateTime, Utc};

use crate::models::PickupStatus;

/// Hour thresholds separating the pickup urgency classes.
///
/// Fed from `Settings`; call sites never carry the numbers themselves.
#[derive(Debug, Clone, Copy)]
pub struct UrgencyThresholds {
    pub urgent_hours: f64,
    pub warning_hours: f64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent_hours: 2.0,
            warning_hours: 6.0,
        }
    }
}

/// Hours left until the pickup window closes; negative once it has
#[inline]
pub fn remaining_hours(now: DateTime<Utc>, pickup_end: DateTime<Utc>) -> f64 {
    (pickup_end - now).num_milliseconds() as f64 / 3_600_000.0
}

/// Classify a remaining-hours figure into a pickup status
///
/// Monotonic in `remaining`: as the window shrinks the status only moves
/// toward Expired, never back toward Normal.
#[inline]
pub fn classify(remaining: f64, thresholds: &UrgencyThresholds) -> PickupStatus {
    if remaining <= 0.0 {
        PickupStatus::Expired
    } else if remaining <= thresholds.urgent_hours {
        PickupStatus::Urgent
    } else if remaining <= thresholds.warning_hours {
        PickupStatus::Warning
    } else {
        PickupStatus::Normal
    }
}
