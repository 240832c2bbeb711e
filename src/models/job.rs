use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kinds of odd jobs seniors post on the board.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, FromFormField)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    #[field(value = "snow-removal")]
    SnowRemoval,
    Moving,
    #[field(value = "yard-work")]
    YardWork,
    Assembly,
    Repair,
    Other,
}

/// How soon the poster wants the work done.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, FromFormField)]
#[serde(rename_all = "kebab-case")]
pub enum TimePreference {
    Asap,
    Today,
    #[field(value = "this-week")]
    ThisWeek,
    Scheduled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Accepted,
    Completed,
    Cancelled,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStatus::Open => "open",
            JobStatus::Accepted => "accepted",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

/// A posted job and its lifecycle bookkeeping.
///
/// `status` only moves through the accept/complete/cancel endpoints; the
/// timestamps record when each transition first happened and are never
/// overwritten once set.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: JobCategory,
    pub location: Location,
    pub time_preference: TimePreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    pub pay: f64,
    #[serde(default)]
    pub photos: Vec<String>,
    pub posted_by: String,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub category: JobCategory,
    pub location: Location,
    pub time_preference: TimePreference,
    pub scheduled_date: Option<NaiveDate>,
    pub pay: f64,
    #[serde(default)]
    pub photos: Vec<String>,
    pub posted_by: String,
}

/// Cosmetic edits to a posting. Lifecycle fields (`status`, `acceptedBy`,
/// the timestamps) are deliberately absent, and unknown keys are rejected
/// so they cannot be smuggled past the transition endpoints.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<JobCategory>,
    pub location: Option<Location>,
    pub time_preference: Option<TimePreference>,
    pub scheduled_date: Option<NaiveDate>,
    pub pay: Option<f64>,
    pub photos: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptJobDto {
    pub profile_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, FromFormField)]
#[serde(rename_all = "kebab-case")]
pub enum JobSort {
    Newest,
    #[field(value = "pay-high")]
    PayHigh,
    #[field(value = "pay-low")]
    PayLow,
}

#[derive(Debug, FromForm, Deserialize, JsonSchema)]
pub struct JobListQuery {
    pub category: Option<JobCategory>,
    pub status: Option<JobStatus>,
    #[field(name = "minPay")]
    #[serde(rename = "minPay")]
    pub min_pay: Option<f64>,
    #[field(name = "maxPay")]
    #[serde(rename = "maxPay")]
    pub max_pay: Option<f64>,
    #[field(name = "timePreference")]
    #[serde(rename = "timePreference")]
    pub time_preference: Option<TimePreference>,
    pub sort: Option<JobSort>,
}
