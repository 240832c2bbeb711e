use chrono::{DateTime, Utc};
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub job_id: String,
    pub reviewer_id: String,
    pub reviewee_id: String,
    pub rating: i32, // 1-5
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub job_id: String,
    pub reviewer_id: String,
    pub reviewee_id: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, FromForm, Deserialize, JsonSchema)]
pub struct ReviewListQuery {
    #[field(name = "jobId")]
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
    #[field(name = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<String>,
}
