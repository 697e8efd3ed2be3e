use crate::error::{PlanError, PlanResult};
use crate::types::{ClassId, HourCategory, Week};
use serde::{Deserialize, Serialize};

/// One contact channel (voice, chat, email, ...) with its weekly demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub id: String,
    /// Contacts per week.
    pub volume: f64,
    /// Average handle time per contact, in minutes.
    pub aht_minutes: f64,
    /// Parallel sessions one agent works at once. Divides the effective
    /// handle time. Must be at least 1.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

fn default_concurrency() -> u32 {
    1
}

/// How attendance hours are derived from scheduled hours.
/// The two input modes are selectable, never silently merged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceBasis {
    /// attendance = scheduled × (1 − shrinkage_rate)
    ShrinkageComplement,
    /// attendance = scheduled × attendance_rate
    DirectRate,
}

/// Where the occupancy rate enters the math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyTreatment {
    /// Required paid hours = service hours / occupancy_rate.
    DividesRequiredHours,
    /// Required hours are the raw service hours; occupancy appears only
    /// as the capacity-derived output metric.
    ReportedOnly,
}

/// All rate parameters. Every rate is a fraction of 1; values outside
/// [0, 1] are rejected at validation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCard {
    pub productive_rate: f64,
    pub transactional_rate: f64,
    pub attendance_rate: f64,
    pub occupancy_rate: f64,
    pub shrinkage_rate: f64,
    pub attendance_basis: AttendanceBasis,
    pub occupancy_treatment: OccupancyTreatment,
}

impl RateCard {
    /// Fraction of scheduled time actually attended, per the selected basis.
    pub fn attendance_factor(&self) -> f64 {
        match self.attendance_basis {
            AttendanceBasis::ShrinkageComplement => 1.0 - self.shrinkage_rate,
            AttendanceBasis::DirectRate => self.attendance_rate,
        }
    }
}

/// One employment class (full-time, part-time, ...) with its actual
/// headcount and weekly scheduled hours. Schedules may differ per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentClass {
    pub id: ClassId,
    pub label: String,
    pub headcount: u32,
    pub scheduled_hours: f64,
}

/// The week range the weekly table replicates the single result across.
/// Display only; there is no per-week variation in the calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start_week: Week,
    pub num_weeks: u32,
}

/// A hours→agents question: how many agents does it take for their
/// combined hours in `category` to reach `target_hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseQuery {
    pub category: HourCategory,
    pub target_hours: f64,
}

/// The complete input snapshot for one evaluation. Immutable once built;
/// every calculation is a pure function of one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityPlan {
    pub channels: Vec<ContactChannel>,
    pub rates: RateCard,
    pub classes: Vec<EmploymentClass>,
    /// The class whose hours define one FTE. Must name an entry in `classes`.
    #[serde(default = "default_reference_class")]
    pub reference_class: ClassId,
    /// Hour category used as the FTE denominator and the capacity basis.
    /// Productive per default; Transactional scales it by the
    /// transactional rate.
    #[serde(default = "default_fte_basis")]
    pub fte_basis: HourCategory,
    pub week_window: WeekWindow,
    pub inverse: Option<InverseQuery>,
}

fn default_reference_class() -> ClassId {
    "full_time".into()
}

fn default_fte_basis() -> HourCategory {
    HourCategory::Productive
}

impl CapacityPlan {
    /// Load and validate a plan from a JSON file.
    pub fn load(path: &str) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a plan from a JSON string.
    pub fn from_json_str(json: &str) -> PlanResult<Self> {
        let plan: CapacityPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Check every input before any calculation runs.
    ///
    /// Degenerate-but-valid inputs (an occupancy rate of 0, 100%
    /// shrinkage, zero headcount) pass validation; they surface later as
    /// individual undefined metrics, not as plan rejection.
    pub fn validate(&self) -> PlanResult<()> {
        for channel in &self.channels {
            check_non_negative(&format!("{}.volume", channel.id), channel.volume)?;
            check_non_negative(&format!("{}.aht_minutes", channel.id), channel.aht_minutes)?;
            if channel.concurrency == 0 {
                return Err(PlanError::InvalidConcurrency {
                    channel: channel.id.clone(),
                });
            }
        }

        check_rate("productive_rate", self.rates.productive_rate)?;
        check_rate("transactional_rate", self.rates.transactional_rate)?;
        check_rate("attendance_rate", self.rates.attendance_rate)?;
        check_rate("occupancy_rate", self.rates.occupancy_rate)?;
        check_rate("shrinkage_rate", self.rates.shrinkage_rate)?;

        for class in &self.classes {
            check_non_negative(
                &format!("{}.scheduled_hours", class.id),
                class.scheduled_hours,
            )?;
        }

        let window = &self.week_window;
        if !(1..=53).contains(&window.start_week) || !(1..=52).contains(&window.num_weeks) {
            return Err(PlanError::InvalidWeekWindow {
                start_week: window.start_week,
                num_weeks: window.num_weeks,
            });
        }

        if !self.classes.iter().any(|c| c.id == self.reference_class) {
            return Err(PlanError::UnknownClass {
                id: self.reference_class.clone(),
            });
        }

        if let Some(query) = &self.inverse {
            check_non_negative("inverse.target_hours", query.target_hours)?;
        }

        Ok(())
    }

    /// Plan with hardcoded defaults for use in unit tests. Mirrors the
    /// checked-in data/capacity_plan.json.
    pub fn default_test() -> Self {
        Self {
            channels: vec![
                ContactChannel {
                    id: "calls".into(),
                    volume: 1000.0,
                    aht_minutes: 5.0,
                    concurrency: 1,
                },
                ContactChannel {
                    id: "chats".into(),
                    volume: 500.0,
                    aht_minutes: 4.0,
                    concurrency: 2,
                },
                ContactChannel {
                    id: "emails".into(),
                    volume: 300.0,
                    aht_minutes: 6.0,
                    concurrency: 1,
                },
            ],
            rates: RateCard {
                productive_rate: 0.85,
                transactional_rate: 1.0,
                attendance_rate: 0.80,
                occupancy_rate: 1.0,
                shrinkage_rate: 0.20,
                attendance_basis: AttendanceBasis::ShrinkageComplement,
                occupancy_treatment: OccupancyTreatment::DividesRequiredHours,
            },
            classes: vec![
                EmploymentClass {
                    id: "full_time".into(),
                    label: "Full-Time".into(),
                    headcount: 10,
                    scheduled_hours: 40.0,
                },
                EmploymentClass {
                    id: "part_time".into(),
                    label: "Part-Time".into(),
                    headcount: 5,
                    scheduled_hours: 20.0,
                },
            ],
            reference_class: "full_time".into(),
            fte_basis: HourCategory::Productive,
            week_window: WeekWindow {
                start_week: 20,
                num_weeks: 6,
            },
            inverse: Some(InverseQuery {
                category: HourCategory::Productive,
                target_hours: 100.0,
            }),
        }
    }
}

fn check_rate(name: &str, value: f64) -> PlanResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PlanError::InvalidRate {
            name: name.into(),
            value,
        })
    }
}

fn check_non_negative(name: &str, value: f64) -> PlanResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        // NaN and infinities are rejected here too: JSON cannot encode
        // them, so this guards hand-constructed plans.
        Err(PlanError::NegativeQuantity {
            name: name.into(),
            value,
        })
    }
}
