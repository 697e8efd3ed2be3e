//! Snapshot assembly. One plan evaluation produces one immutable
//! [`StaffingSnapshot`]; nothing is cached or mutated between runs.
//!
//! A `DivisionUndefined` from an individual metric is not fatal here:
//! the affected metric is recorded as `None` (serialized as JSON null)
//! and every independent metric is still computed. Any other error
//! aborts the evaluation.

use crate::calculator::{self, AgentHours};
use crate::config::CapacityPlan;
use crate::error::{PlanError, PlanResult};
use crate::types::{ClassId, HourCategory};
use serde::{Deserialize, Serialize};

/// Per-class hour breakdown. The hour figures are for one agent of the
/// class; headcount rides along for renderers and the capacity sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassHours {
    pub class_id: ClassId,
    pub label: String,
    pub headcount: u32,
    pub hours: AgentHours,
}

/// Result of the optional hours→agents question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseOutcome {
    pub category: HourCategory,
    pub target_hours: f64,
    pub agents: Option<f64>,
}

/// Everything one evaluation of a plan yields. `None` means the metric
/// was undefined for these inputs; renderers must show it as such,
/// never as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingSnapshot {
    // Demand
    pub total_contact_minutes: f64,
    pub service_hours: f64,
    pub required_work_hours: Option<f64>,

    // Staffing
    pub effective_hours_per_agent: f64,
    pub required_agents: Option<f64>,
    pub capacity_hours: f64,
    pub occupancy: Option<f64>,

    // Per-class breakdown
    pub class_hours: Vec<ClassHours>,

    // Inverse conversion, when the plan asked one
    pub inverse: Option<InverseOutcome>,
}

/// Validate a plan and evaluate it into a fresh snapshot.
pub fn compute(plan: &CapacityPlan) -> PlanResult<StaffingSnapshot> {
    plan.validate()?;

    let total_contact_minutes = calculator::contact_minutes(&plan.channels);
    let service_hours = total_contact_minutes / 60.0;
    for channel in &plan.channels {
        log::debug!(
            "channel {}: {:.0} adjusted minutes",
            channel.id,
            calculator::channel_minutes(channel)
        );
    }

    let required_work_hours = undefined_to_none(
        calculator::required_work_hours(total_contact_minutes, &plan.rates),
        "required_work_hours",
    )?;

    let class_hours: Vec<ClassHours> = plan
        .classes
        .iter()
        .map(|class| ClassHours {
            class_id: class.id.clone(),
            label: class.label.clone(),
            headcount: class.headcount,
            hours: calculator::agent_hours(class.scheduled_hours, &plan.rates),
        })
        .collect();

    let reference = class_hours
        .iter()
        .find(|c| c.class_id == plan.reference_class)
        .map(|c| c.hours)
        .ok_or_else(|| PlanError::UnknownClass {
            id: plan.reference_class.clone(),
        })?;
    let effective_hours_per_agent = reference.category_hours(plan.fte_basis, &plan.rates);

    let required_agents = match required_work_hours {
        Some(hours) => undefined_to_none(
            calculator::required_agents(hours, effective_hours_per_agent),
            "required_agents",
        )?,
        None => None,
    };

    let capacity_hours = calculator::capacity_hours(&plan.classes, &plan.rates, plan.fte_basis);

    let occupancy = match required_work_hours {
        Some(hours) => {
            undefined_to_none(calculator::occupancy(hours, capacity_hours), "occupancy")?
        }
        None => None,
    };

    let inverse = match &plan.inverse {
        Some(query) => {
            let agents = undefined_to_none(
                calculator::inverse_agents(
                    query.target_hours,
                    query.category,
                    reference.scheduled,
                    &plan.rates,
                ),
                "inverse_agents",
            )?;
            Some(InverseOutcome {
                category: query.category,
                target_hours: query.target_hours,
                agents,
            })
        }
        None => None,
    };

    log::info!(
        "plan evaluated: minutes={:.0} required_hours={} agents={} capacity={:.1} occupancy={}",
        total_contact_minutes,
        fmt_opt(required_work_hours),
        fmt_opt(required_agents),
        capacity_hours,
        fmt_opt(occupancy),
    );

    Ok(StaffingSnapshot {
        total_contact_minutes,
        service_hours,
        required_work_hours,
        effective_hours_per_agent,
        required_agents,
        capacity_hours,
        occupancy,
        class_hours,
        inverse,
    })
}

/// `DivisionUndefined` collapses to `None`; anything else propagates.
fn undefined_to_none(result: PlanResult<f64>, metric: &str) -> PlanResult<Option<f64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PlanError::DivisionUndefined { what }) => {
            log::warn!("{metric} undefined: {what}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".into(),
    }
}
