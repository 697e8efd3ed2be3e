//! wfm-core: weekly workforce capacity arithmetic for a contact center.
//!
//! The crate turns one immutable [`config::CapacityPlan`] (channel
//! demand, rate card, employment classes) into one
//! [`result::StaffingSnapshot`] per evaluation, then exposes the
//! snapshot as plain numeric records through [`report`]. Calculations
//! are pure functions; there is no persistence and no background state.

pub mod calculator;
pub mod config;
pub mod error;
pub mod report;
pub mod result;
pub mod types;
