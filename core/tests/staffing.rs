//! Required-agents, capacity and occupancy tests.

use wfm_core::calculator::{capacity_hours, occupancy, required_agents};
use wfm_core::config::CapacityPlan;
use wfm_core::error::PlanError;
use wfm_core::result;
use wfm_core::types::HourCategory;

/// 130 required hours at 27.2 effective hours per agent need about 4.78
/// agents.
#[test]
fn required_agents_for_default_demand() {
    let agents = required_agents(130.0, 27.2).unwrap();
    assert!(
        (agents - 4.779411764705882).abs() < 1e-9,
        "agents: {agents}"
    );
}

/// Fractional FTE results are reported as-is; rounding is the caller's
/// business.
#[test]
fn required_agents_not_rounded() {
    let agents = required_agents(10.0, 3.0).unwrap();
    assert!((agents - 10.0 / 3.0).abs() < 1e-12, "agents: {agents}");
}

/// Zero effective hours per agent make the requirement undefined.
#[test]
fn zero_effective_hours_is_undefined() {
    let result = required_agents(130.0, 0.0);
    assert!(matches!(result, Err(PlanError::DivisionUndefined { .. })));
}

/// Capacity mixes heterogeneous classes: 10 full-timers at 27.2
/// productive hours plus 5 part-timers at 13.6 give 340.
#[test]
fn capacity_sums_across_classes() {
    let plan = CapacityPlan::default_test();
    let capacity = capacity_hours(&plan.classes, &plan.rates, HourCategory::Productive);
    assert!((capacity - 340.0).abs() < 1e-9, "capacity: {capacity}");
}

/// Headcount scales capacity linearly.
#[test]
fn capacity_linear_in_headcount() {
    let mut plan = CapacityPlan::default_test();
    let single = capacity_hours(&plan.classes, &plan.rates, HourCategory::Productive);

    for class in &mut plan.classes {
        class.headcount *= 3;
    }
    let tripled = capacity_hours(&plan.classes, &plan.rates, HourCategory::Productive);
    assert!(
        (tripled - 3.0 * single).abs() < 1e-9,
        "expected {}, got {tripled}",
        3.0 * single
    );
}

/// Occupancy is required hours over capacity hours.
#[test]
fn occupancy_is_required_over_capacity() {
    let occ = occupancy(130.0, 340.0).unwrap();
    assert!((occ - 130.0 / 340.0).abs() < 1e-12, "occupancy: {occ}");
}

/// Occupancy above 1 reports overload as-is; no clamping.
#[test]
fn occupancy_above_one_not_clamped() {
    let occ = occupancy(500.0, 340.0).unwrap();
    assert!(occ > 1.0, "occupancy: {occ}");
}

/// Zero capacity makes occupancy undefined.
#[test]
fn zero_capacity_is_undefined() {
    let result = occupancy(130.0, 0.0);
    assert!(matches!(result, Err(PlanError::DivisionUndefined { .. })));
}

/// With nobody on staff the capacity is 0 and occupancy is undefined,
/// while the independent requirement figure still computes.
#[test]
fn zero_headcount_leaves_requirement_defined() {
    let mut plan = CapacityPlan::default_test();
    for class in &mut plan.classes {
        class.headcount = 0;
    }

    let snapshot = result::compute(&plan).unwrap();
    assert_eq!(snapshot.capacity_hours, 0.0);
    assert!(
        snapshot.occupancy.is_none(),
        "occupancy must be undefined, got {:?}",
        snapshot.occupancy
    );

    let agents = snapshot
        .required_agents
        .expect("requirement is independent of headcount");
    assert!(
        (agents - 4.779411764705882).abs() < 1e-9,
        "agents: {agents}"
    );
}
