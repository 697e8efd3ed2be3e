//! Contact workload and required-hours tests.

use wfm_core::calculator::{channel_minutes, contact_minutes, required_work_hours};
use wfm_core::config::{CapacityPlan, ContactChannel, OccupancyTreatment, RateCard};
use wfm_core::error::PlanError;

fn base_rates() -> RateCard {
    CapacityPlan::default_test().rates
}

/// The default mix (1000 calls x 5.0 min, 500 chats x 4.0 min at
/// concurrency 2, 300 emails x 6.0 min) adds up to 7800 adjusted minutes.
#[test]
fn default_mix_totals_7800_minutes() {
    let plan = CapacityPlan::default_test();
    let minutes = contact_minutes(&plan.channels);
    assert_eq!(minutes, 7800.0, "adjusted minutes mismatch");
}

/// Concurrency divides the effective handle time, not the volume.
#[test]
fn concurrency_divides_handle_time() {
    let chats = ContactChannel {
        id: "chats".into(),
        volume: 500.0,
        aht_minutes: 4.0,
        concurrency: 2,
    };
    assert_eq!(channel_minutes(&chats), 1000.0);

    let solo = ContactChannel {
        concurrency: 1,
        ..chats
    };
    assert_eq!(channel_minutes(&solo), 2000.0);
}

/// A zero-volume channel contributes nothing and never errors.
#[test]
fn zero_volume_channel_contributes_nothing() {
    let plan = CapacityPlan::default_test();
    let base = contact_minutes(&plan.channels);

    let mut extended = plan.channels.clone();
    extended.push(ContactChannel {
        id: "social".into(),
        volume: 0.0,
        aht_minutes: 12.0,
        concurrency: 1,
    });
    assert_eq!(contact_minutes(&extended), base);
}

/// An empty channel list is valid and means zero demand.
#[test]
fn empty_channel_list_is_zero_demand() {
    assert_eq!(contact_minutes(&[]), 0.0);
}

/// The occupancy treatment selects the required-hours formula.
#[test]
fn occupancy_treatment_selects_formula() {
    let mut rates = base_rates();
    rates.occupancy_rate = 0.5;

    rates.occupancy_treatment = OccupancyTreatment::DividesRequiredHours;
    let grossed = required_work_hours(7800.0, &rates).unwrap();
    assert!(
        (grossed - 260.0).abs() < 1e-9,
        "7800 minutes at 50% occupancy should need 260 h, got {grossed}"
    );

    rates.occupancy_treatment = OccupancyTreatment::ReportedOnly;
    let raw = required_work_hours(7800.0, &rates).unwrap();
    assert!(
        (raw - 130.0).abs() < 1e-9,
        "ReportedOnly must pass raw service hours through, got {raw}"
    );
}

/// At a 100% occupancy rate both treatments agree.
#[test]
fn treatments_agree_at_full_occupancy() {
    let mut rates = base_rates();
    rates.occupancy_rate = 1.0;

    rates.occupancy_treatment = OccupancyTreatment::DividesRequiredHours;
    let grossed = required_work_hours(7800.0, &rates).unwrap();
    rates.occupancy_treatment = OccupancyTreatment::ReportedOnly;
    let raw = required_work_hours(7800.0, &rates).unwrap();

    assert_eq!(grossed, raw);
}

/// An occupancy rate of 0 under DividesRequiredHours is undefined,
/// never reported as 0 or infinity.
#[test]
fn zero_occupancy_rate_is_undefined() {
    let mut rates = base_rates();
    rates.occupancy_rate = 0.0;
    rates.occupancy_treatment = OccupancyTreatment::DividesRequiredHours;

    let result = required_work_hours(7800.0, &rates);
    assert!(matches!(result, Err(PlanError::DivisionUndefined { .. })));
}

/// More volume never means less workload.
#[test]
fn workload_monotonic_in_volume() {
    let mut previous = -1.0;
    for volume in [0.0, 1.0, 50.0, 500.0, 12_345.0] {
        let channel = ContactChannel {
            id: "calls".into(),
            volume,
            aht_minutes: 5.0,
            concurrency: 1,
        };
        let minutes = channel_minutes(&channel);
        assert!(
            minutes > previous,
            "workload dropped from {previous} to {minutes} at volume {volume}"
        );
        previous = minutes;
    }
}
