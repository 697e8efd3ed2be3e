//! The staffing arithmetic. Everything in this module is a pure
//! function of its arguments.
//!
//! RULES:
//!   - No state, no I/O, no hidden configuration. Same inputs, same
//!     outputs, bit for bit.
//!   - Input validation lives in config.rs. Functions here assume a
//!     validated plan and only ever fail with `DivisionUndefined`.
//!   - A zero denominator is reported as undefined, never as 0 or inf.

use crate::config::{ContactChannel, EmploymentClass, OccupancyTreatment, RateCard};
use crate::error::{PlanError, PlanResult};
use crate::types::HourCategory;
use serde::{Deserialize, Serialize};

/// Adjusted contact minutes for one channel: volume × (AHT / concurrency).
pub fn channel_minutes(channel: &ContactChannel) -> f64 {
    channel.volume * (channel.aht_minutes / channel.concurrency as f64)
}

/// Total adjusted contact minutes across all channels.
pub fn contact_minutes(channels: &[ContactChannel]) -> f64 {
    channels.iter().map(channel_minutes).sum()
}

/// Paid work hours required to serve `total_minutes` of contact work.
///
/// Under `DividesRequiredHours` the service hours are grossed up by the
/// occupancy rate; an occupancy rate of 0 makes the figure undefined.
/// Under `ReportedOnly` the raw service hours pass through unchanged.
pub fn required_work_hours(total_minutes: f64, rates: &RateCard) -> PlanResult<f64> {
    let service_hours = total_minutes / 60.0;
    match rates.occupancy_treatment {
        OccupancyTreatment::ReportedOnly => Ok(service_hours),
        OccupancyTreatment::DividesRequiredHours => {
            if rates.occupancy_rate <= 0.0 {
                return Err(PlanError::DivisionUndefined {
                    what: "required work hours with an occupancy rate of 0".into(),
                });
            }
            Ok(service_hours / rates.occupancy_rate)
        }
    }
}

/// Weekly hour breakdown for one agent of a class.
///
/// For rates validated into [0, 1] the fields obey
/// productive ≤ attendance ≤ scheduled, and the two residuals
/// (in_office, out_office) are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentHours {
    pub scheduled: f64,
    pub attendance: f64,
    pub productive: f64,
    /// Attended but not producing (meetings, coaching, admin).
    pub in_office: f64,
    /// Scheduled but absent (the shrinkage slice).
    pub out_office: f64,
}

/// Collapse one agent's scheduled hours through the rate ladder.
pub fn agent_hours(scheduled: f64, rates: &RateCard) -> AgentHours {
    let attendance = scheduled * rates.attendance_factor();
    let productive = attendance * rates.productive_rate;
    AgentHours {
        scheduled,
        attendance,
        productive,
        in_office: attendance - productive,
        out_office: scheduled - attendance,
    }
}

impl AgentHours {
    /// Hours in the given category, for use as an FTE denominator.
    /// `Transactional` is productive time further scaled by the
    /// transactional rate.
    pub fn category_hours(&self, category: HourCategory, rates: &RateCard) -> f64 {
        match category {
            HourCategory::Schedule => self.scheduled,
            HourCategory::Attendance => self.attendance,
            HourCategory::Productive => self.productive,
            HourCategory::Transactional => self.productive * rates.transactional_rate,
        }
    }
}

/// FTE agents needed to cover `required_hours` when one agent
/// contributes `effective_hours` per week. Fractional by design.
pub fn required_agents(required_hours: f64, effective_hours: f64) -> PlanResult<f64> {
    if effective_hours <= 0.0 {
        return Err(PlanError::DivisionUndefined {
            what: format!("required agents with {effective_hours} effective hours per agent"),
        });
    }
    Ok(required_hours / effective_hours)
}

/// Total effective capacity of the actual staff:
/// Σ headcount × per-agent hours in the chosen category.
pub fn capacity_hours(classes: &[EmploymentClass], rates: &RateCard, basis: HourCategory) -> f64 {
    classes
        .iter()
        .map(|class| {
            let per_agent = agent_hours(class.scheduled_hours, rates).category_hours(basis, rates);
            class.headcount as f64 * per_agent
        })
        .sum()
}

/// Achieved occupancy: required work hours over available capacity hours.
/// Undefined when there is no capacity.
pub fn occupancy(required_hours: f64, capacity: f64) -> PlanResult<f64> {
    if capacity <= 0.0 {
        return Err(PlanError::DivisionUndefined {
            what: "occupancy with zero capacity hours".into(),
        });
    }
    Ok(required_hours / capacity)
}

/// Hours one agent contributes per week towards the given category,
/// starting from scheduled hours. This is the inverse-conversion
/// denominator. Note the Transactional chain scales attendance by the
/// transactional rate directly, without the productive step.
pub fn category_multiplier(category: HourCategory, scheduled: f64, rates: &RateCard) -> f64 {
    let attendance_factor = rates.attendance_factor();
    match category {
        HourCategory::Schedule => scheduled,
        HourCategory::Attendance => scheduled * attendance_factor,
        HourCategory::Productive => scheduled * attendance_factor * rates.productive_rate,
        HourCategory::Transactional => scheduled * attendance_factor * rates.transactional_rate,
    }
}

/// Agents needed so that their combined hours in `category` reach
/// `target_hours`.
pub fn inverse_agents(
    target_hours: f64,
    category: HourCategory,
    scheduled: f64,
    rates: &RateCard,
) -> PlanResult<f64> {
    let multiplier = category_multiplier(category, scheduled, rates);
    if multiplier <= 0.0 {
        return Err(PlanError::DivisionUndefined {
            what: format!("inverse agents with a zero {} multiplier", category.name()),
        });
    }
    Ok(target_hours / multiplier)
}
