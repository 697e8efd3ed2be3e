//! Presentation feed: labeled numeric records an external dashboard can
//! render directly. No formatting lives here; a renderer decides units,
//! rounding, and how to show an undefined value (`None` is never 0).

use crate::config::WeekWindow;
use crate::result::StaffingSnapshot;
use crate::types::{ClassId, Week};
use serde::{Deserialize, Serialize};

/// One row of the weekly requirement table. The same computed figure is
/// replicated across the window; this is a display device, not a
/// per-week forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRequirement {
    pub week: Week,
    pub required_agents: Option<f64>,
}

/// Replicate the snapshot's required-agents figure across the window.
/// Week numbers run past 53 unwrapped when the window crosses a year
/// boundary; calendar mapping is the renderer's business.
pub fn weekly_requirement(snapshot: &StaffingSnapshot, window: &WeekWindow) -> Vec<WeeklyRequirement> {
    (0..window.num_weeks)
        .map(|i| WeeklyRequirement {
            week: window.start_week + i,
            required_agents: snapshot.required_agents,
        })
        .collect()
}

/// A named headline figure for the dashboard's metric row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    pub name: String,
    pub value: Option<f64>,
}

/// The headline metric row: demand, requirement, capacity, occupancy,
/// plus one headcount entry per employment class.
pub fn headline_metrics(snapshot: &StaffingSnapshot) -> Vec<MetricValue> {
    let mut metrics = vec![
        MetricValue {
            name: "total_contact_minutes".into(),
            value: Some(snapshot.total_contact_minutes),
        },
        MetricValue {
            name: "service_hours".into(),
            value: Some(snapshot.service_hours),
        },
        MetricValue {
            name: "required_work_hours".into(),
            value: snapshot.required_work_hours,
        },
        MetricValue {
            name: "required_agents".into(),
            value: snapshot.required_agents,
        },
        MetricValue {
            name: "capacity_hours".into(),
            value: Some(snapshot.capacity_hours),
        },
        MetricValue {
            name: "occupancy".into(),
            value: snapshot.occupancy,
        },
    ];
    for class in &snapshot.class_hours {
        metrics.push(MetricValue {
            name: format!("{}_headcount", class.class_id),
            value: Some(f64::from(class.headcount)),
        });
    }
    metrics
}

/// The five bars of the per-agent hour breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourBucket {
    Schedule,
    Attendance,
    Productive,
    InOffice,
    OutOffice,
}

impl HourBucket {
    pub const ALL: [HourBucket; 5] = [
        HourBucket::Schedule,
        HourBucket::Attendance,
        HourBucket::Productive,
        HourBucket::InOffice,
        HourBucket::OutOffice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HourBucket::Schedule => "schedule",
            HourBucket::Attendance => "attendance",
            HourBucket::Productive => "productive",
            HourBucket::InOffice => "in_office",
            HourBucket::OutOffice => "out_office",
        }
    }
}

/// One bar of the hour chart: class × bucket → per-agent hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourChartRow {
    pub class_id: ClassId,
    pub class_label: String,
    pub bucket: HourBucket,
    pub hours: f64,
}

/// Flatten the per-class breakdown into chart rows, five buckets per
/// class, in class order.
pub fn hour_chart_rows(snapshot: &StaffingSnapshot) -> Vec<HourChartRow> {
    let mut rows = Vec::with_capacity(snapshot.class_hours.len() * HourBucket::ALL.len());
    for class in &snapshot.class_hours {
        for bucket in HourBucket::ALL {
            let hours = match bucket {
                HourBucket::Schedule => class.hours.scheduled,
                HourBucket::Attendance => class.hours.attendance,
                HourBucket::Productive => class.hours.productive,
                HourBucket::InOffice => class.hours.in_office,
                HourBucket::OutOffice => class.hours.out_office,
            };
            rows.push(HourChartRow {
                class_id: class.class_id.clone(),
                class_label: class.label.clone(),
                bucket,
                hours,
            });
        }
    }
    rows
}
