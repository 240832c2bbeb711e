use chrono::{DateTime, Utc};
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Youth,
    Senior,
}

/// A marketplace member. Youth profiles carry `totalEarned`; senior
/// profiles carry `totalSpent` and a `favourites` list of youth ids.
///
/// `rating` is maintained by the review flow and starts at 0 until the
/// first review lands.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub rating: f64,
    pub total_jobs: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_earned: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourites: Option<Vec<String>>,
    pub joined_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileDto {
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub bio: Option<String>,
    pub school: Option<String>,
    pub skills: Option<Vec<String>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub neighborhood: Option<String>,
}

/// Self-service edits. Rating, job counters and the profile type are
/// server-owned and not part of this DTO.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub school: Option<String>,
    pub skills: Option<Vec<String>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub neighborhood: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavouriteDto {
    pub youth_id: String,
}

#[derive(Debug, FromForm, Deserialize, JsonSchema)]
pub struct ProfileListQuery {
    #[field(name = "type")]
    #[serde(rename = "type")]
    pub profile_type: Option<ProfileType>,
}
