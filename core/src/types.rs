//! Shared primitive types used across the entire planning core.

use serde::{Deserialize, Serialize};

/// A calendar week label. Labels are for display replication only; week 54
/// simply means "start week 53 plus one", there is no wrap-around.
pub type Week = u32;

/// A stable caller-chosen identifier for an employment class or channel.
pub type ClassId = String;

/// The hour-category ladder an agent's scheduled time collapses through.
/// Each step applies one more rate on top of the previous one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HourCategory {
    /// Raw scheduled hours, no rate applied.
    Schedule,
    /// Scheduled hours after shrinkage (or times the direct attendance rate).
    Attendance,
    /// Attendance hours times the productive rate.
    Productive,
    /// Hours further scaled by the transactional rate. The breakdown
    /// side applies it on productive time, the inverse side on
    /// attendance; see calculator.rs.
    Transactional,
}

impl HourCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Attendance => "attendance",
            Self::Productive => "productive",
            Self::Transactional => "transactional",
        }
    }
}
